pub mod runner;

pub use crate::domain::model::{ContractFactory, DeployedContract, PendingDeployment};
pub use crate::domain::ports::{ArtifactSource, DeploymentToolkit};
pub use crate::utils::error::Result;
