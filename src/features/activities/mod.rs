//! Activities feature: the read-only activity snapshot and the signup and
//! unregister mutations. Rosters hold student emails; keep them out of logs
//! above debug level.

pub mod client;
pub mod types;

pub use types::{Activity, ActivityBook, ActionMessage};
