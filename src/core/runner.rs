use crate::core::{DeployedContract, DeploymentToolkit};
use crate::utils::error::{DeployError, Result};
use std::io::Write;

/// 部署的合約名稱，固定不可設定
pub const CONTRACT_NAME: &str = "DecntralizedSocialMediaPlatform";

/// 成功時印在地址前面的標籤
pub const DEPLOYED_LABEL: &str = "DecntralizedSocialMediaPlatform deployed to:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Start,
    RequestingTemplate,
    Deploying,
    AwaitingConfirmation,
    Success,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

/// One-shot deployment of [`CONTRACT_NAME`] through a [`DeploymentToolkit`].
pub struct DeploymentRunner<T: DeploymentToolkit> {
    toolkit: T,
    state: RunnerState,
}

impl<T: DeploymentToolkit> DeploymentRunner<T> {
    pub fn new(toolkit: T) -> Self {
        Self {
            toolkit,
            state: RunnerState::Start,
        }
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    fn transition(&mut self, next: RunnerState) {
        tracing::debug!("Runner state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Runs template lookup, submission and confirmation in order, stopping at
    /// the first failure.
    pub async fn run(&mut self) -> Result<DeployedContract> {
        let result = self.run_steps().await;

        match &result {
            Ok(_) => self.transition(RunnerState::Success),
            Err(e) => {
                tracing::error!(
                    "❌ Deployment failed while {:?} (Category: {:?})",
                    self.state,
                    e.category()
                );
                self.transition(RunnerState::Failed);
            }
        }

        result
    }

    async fn run_steps(&mut self) -> Result<DeployedContract> {
        self.transition(RunnerState::RequestingTemplate);
        let factory = self.toolkit.contract_factory(CONTRACT_NAME).await?;
        tracing::info!(
            "📦 Loaded template {} ({} bytes)",
            factory.fully_qualified_name(),
            factory.bytecode.len()
        );

        self.transition(RunnerState::Deploying);
        let pending = self.toolkit.deploy(factory).await?;
        tracing::info!(
            tx_hash = %pending.tx_hash,
            deployer = %pending.deployer,
            "📤 Deployment transaction submitted"
        );

        self.transition(RunnerState::AwaitingConfirmation);
        let deployed = self.toolkit.wait_deployed(pending).await?;
        tracing::debug!(
            address = %deployed.address,
            block = ?deployed.block_number,
            gas_used = deployed.gas_used,
            "Deployment confirmed"
        );

        Ok(deployed)
    }

    /// Runs the deployment and reports it: the address line goes to `out`,
    /// error details go to `err`.
    pub async fn execute<O: Write, E: Write>(&mut self, out: &mut O, err: &mut E) -> ExitStatus {
        match self.run().await {
            Ok(deployed) => match writeln!(out, "{} {}", DEPLOYED_LABEL, deployed.address) {
                Ok(()) => ExitStatus::Success,
                Err(e) => {
                    report_failure(err, &DeployError::IoError(e));
                    ExitStatus::Failure
                }
            },
            Err(e) => {
                report_failure(err, &e);
                ExitStatus::Failure
            }
        }
    }
}

/// 將錯誤細節寫到 stderr；寫入失敗時只能放棄
pub fn report_failure<E: Write>(err: &mut E, error: &DeployError) {
    let _ = writeln!(err, "❌ {}", error.user_friendly_message());
    let _ = writeln!(err, "   {}", error);
    let _ = writeln!(err, "💡 {}", error.recovery_suggestion());
}
