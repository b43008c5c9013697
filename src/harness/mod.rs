mod models;
mod printer;
mod runner;
mod writer;

pub use models::{CaseRecord, FetchRecord};
pub use runner::{fetch_endpoint, run_comparison, RunOptions};
pub use writer::{artifact_path, record_path};
