use crate::domain::model::{ContractFactory, DeployedContract, PendingDeployment};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves a contract name to a deployable template.
pub trait ArtifactSource: Send + Sync {
    fn contract_factory(&self, name: &str) -> Result<ContractFactory>;
}

/// The external deployment toolkit.
///
/// Each step consumes the output of the previous one, so a deployment can only
/// be confirmed after it was submitted, and only submitted after its template
/// was resolved.
#[async_trait]
pub trait DeploymentToolkit: Send + Sync {
    /// Fails with `DeployError::TemplateNotFound`.
    async fn contract_factory(&self, name: &str) -> Result<ContractFactory>;

    /// Sends the creation transaction without constructor arguments.
    /// Fails with `DeployError::DeploymentSubmission`.
    async fn deploy(&self, factory: ContractFactory) -> Result<PendingDeployment>;

    /// Fails with `DeployError::DeploymentConfirmation`.
    async fn wait_deployed(&self, pending: PendingDeployment) -> Result<DeployedContract>;
}
