use thiserror::Error;

/// 部署流程中的步驟
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentStage {
    Template,
    Submission,
    Confirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Template,
    Network,
    System,
}

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Contract template '{contract}' not found: {reason}")]
    TemplateNotFound { contract: String, reason: String },

    #[error("Deployment of '{contract}' could not be submitted: {reason}")]
    DeploymentSubmission { contract: String, reason: String },

    #[error("Deployment of '{contract}' was not confirmed: {reason}")]
    DeploymentConfirmation { contract: String, reason: String },

    #[error("IO error: {0}")]
    IoError(std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DeployError {
    pub fn template_not_found(contract: &str, reason: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            contract: contract.to_string(),
            reason: reason.into(),
        }
    }

    pub fn submission(contract: &str, reason: impl Into<String>) -> Self {
        Self::DeploymentSubmission {
            contract: contract.to_string(),
            reason: reason.into(),
        }
    }

    pub fn confirmation(contract: &str, reason: impl Into<String>) -> Self {
        Self::DeploymentConfirmation {
            contract: contract.to_string(),
            reason: reason.into(),
        }
    }

    /// 錯誤發生在哪個部署步驟；設定錯誤不屬於任何步驟
    pub fn stage(&self) -> Option<DeploymentStage> {
        match self {
            Self::TemplateNotFound { .. } => Some(DeploymentStage::Template),
            Self::DeploymentSubmission { .. } => Some(DeploymentStage::Submission),
            Self::DeploymentConfirmation { .. } => Some(DeploymentStage::Confirmation),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::Template,
            Self::DeploymentSubmission { .. } | Self::DeploymentConfirmation { .. } => {
                ErrorCategory::Network
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::TemplateNotFound { contract, .. } => {
                format!("No deployable artifact found for contract '{}'", contract)
            }
            Self::DeploymentSubmission { contract, .. } => {
                format!("Failed to send the deployment transaction for '{}'", contract)
            }
            Self::DeploymentConfirmation { contract, .. } => {
                format!("The deployment of '{}' did not complete on chain", contract)
            }
            Self::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Setting '{}' has an invalid value", field)
            }
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "The deployment configuration could not be loaded".to_string()
            }
            Self::IoError(_) => "An unexpected system error occurred".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Template => {
                "Compile the contracts first and check the --artifacts directory"
            }
            ErrorCategory::Network => {
                "Check the network URL, the deployer account balance and the node status"
            }
            ErrorCategory::Configuration => "Review deploy.toml and the command line flags",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;
