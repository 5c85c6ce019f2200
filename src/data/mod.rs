//! Data Directory
//!
//! File-backed inputs and outputs shared by the API server and the CLI.

pub mod error;
pub mod store;
pub mod types;

pub use error::{DataError, DataResult};
pub use store::{DataStore, USAGE_REPORTS};
pub use types::{QuickWin, ScoreCache, SessionRecord, SessionScore, SessionsFile, SessionsMetadata};
