pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{alloy_toolkit::AlloyToolkit, artifacts::HardhatArtifacts};
pub use config::{NetworkSettings, ResolvedConfig};
pub use core::runner::{DeploymentRunner, ExitStatus, RunnerState, CONTRACT_NAME, DEPLOYED_LABEL};
pub use utils::error::{DeployError, Result};
