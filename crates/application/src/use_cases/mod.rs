//! Application use cases (business logic orchestration).

mod reload_history;

pub use reload_history::*;
