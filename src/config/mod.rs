#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use toml_config::DeployConfig;

pub const DEFAULT_CONFIG_FILE: &str = "deploy.toml";

/// 解析完成、可直接交給 toolkit 的網路設定
#[derive(Clone)]
pub struct NetworkSettings {
    pub name: String,
    pub url: String,
    /// Private keys; the first one signs the deployment.
    pub accounts: Vec<String>,
    pub chain_id: Option<u64>,
    pub confirmations: u64,
    pub timeout: Option<Duration>,
    pub gas_limit: Option<u64>,
    pub gas_price: Option<u128>,
}

// 私鑰不能出現在日誌裡
impl fmt::Debug for NetworkSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkSettings")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("accounts", &format_args!("[{} redacted]", self.accounts.len()))
            .field("chain_id", &self.chain_id)
            .field("confirmations", &self.confirmations)
            .field("timeout", &self.timeout)
            .field("gas_limit", &self.gas_limit)
            .field("gas_price", &self.gas_price)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub network: NetworkSettings,
    pub artifacts_dir: PathBuf,
}

impl ResolvedConfig {
    /// Network precedence: `network_override` > `default_network` > localhost.
    /// Artifacts precedence: `artifacts_override` > `[paths].artifacts` > `artifacts`.
    pub fn resolve(
        file: &DeployConfig,
        network_override: Option<&str>,
        artifacts_override: Option<&str>,
    ) -> Result<Self> {
        file.validate()?;

        let name = network_override.unwrap_or_else(|| file.default_network());
        validation::validate_non_empty_string("network", name)?;
        let network = file.network(name)?;

        let artifacts = artifacts_override.unwrap_or_else(|| file.artifacts_dir());
        validation::validate_path("artifacts", artifacts)?;

        // localhost 內建設定沒經過檔案驗證，這裡補驗一次 URL
        validation::validate_url(&format!("networks.{}.url", name), &network.url)?;

        Ok(Self {
            network: NetworkSettings {
                name: name.to_string(),
                url: network.url,
                accounts: network.accounts,
                chain_id: network.chain_id,
                confirmations: network.confirmations.unwrap_or(1),
                timeout: network.timeout_seconds.map(Duration::from_secs),
                gas_limit: network.gas_limit,
                gas_price: network.gas_price,
            },
            artifacts_dir: PathBuf::from(artifacts),
        })
    }
}

/// 指定的設定檔必須存在；沒指定時 deploy.toml 可有可無
pub fn load_config_file(explicit: Option<&Path>) -> Result<DeployConfig> {
    match explicit {
        Some(path) => DeployConfig::from_file(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            DeployConfig::from_file(DEFAULT_CONFIG_FILE)
        }
        None => {
            tracing::debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
            Ok(DeployConfig::default())
        }
    }
}

#[cfg(feature = "cli")]
impl cli::CliConfig {
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = load_config_file(self.config.as_deref())?;
        ResolvedConfig::resolve(&file, self.network.as_deref(), self.artifacts.as_deref())
    }
}
