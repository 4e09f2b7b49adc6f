//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod bench;
pub mod compute;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use bench::execute_bench;
pub use compute::{execute_compute, validate_args};
pub use models::{BenchArgs, ComputeArgs};
pub use utils::{display_version, resolution_from_args, validate_series_file};
