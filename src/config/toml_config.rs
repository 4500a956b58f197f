use crate::utils::error::{DeployError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const LOCALHOST_NETWORK: &str = "localhost";
pub const LOCALHOST_URL: &str = "http://127.0.0.1:8545";
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// 部署設定檔 (deploy.toml)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeployConfig {
    pub default_network: Option<String>,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub networks: HashMap<String, NetworkConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    pub artifacts: Option<String>,
}

/// 只能讀取；私鑰不會被序列化或印出
#[derive(Clone, Deserialize)]
pub struct NetworkConfig {
    pub url: String,
    #[serde(default)]
    pub accounts: Vec<String>,
    pub chain_id: Option<u64>,
    pub confirmations: Option<u64>,
    pub timeout_seconds: Option<u64>,
    pub gas_limit: Option<u64>,
    pub gas_price: Option<u128>,
}

impl fmt::Debug for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkConfig")
            .field("url", &self.url)
            .field("accounts", &format_args!("[{} redacted]", self.accounts.len()))
            .field("chain_id", &self.chain_id)
            .field("confirmations", &self.confirmations)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("gas_limit", &self.gas_limit)
            .field("gas_price", &self.gas_price)
            .finish()
    }
}

impl NetworkConfig {
    /// 內建的 localhost 網路：使用節點自己解鎖的帳號
    pub fn localhost() -> Self {
        Self {
            url: LOCALHOST_URL.to_string(),
            accounts: Vec::new(),
            chain_id: None,
            confirmations: None,
            timeout_seconds: None,
            gas_limit: None,
            gas_price: None,
        }
    }

    fn validate_as(&self, name: &str) -> Result<()> {
        validation::validate_url(&format!("networks.{}.url", name), &self.url)?;

        for (i, key) in self.accounts.iter().enumerate() {
            validation::validate_private_key(&format!("networks.{}.accounts[{}]", name, i), key)?;
        }

        if let Some(confirmations) = self.confirmations {
            validation::validate_positive_number(
                &format!("networks.{}.confirmations", name),
                confirmations,
                1,
            )?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range(
                &format!("networks.{}.timeout_seconds", name),
                timeout,
                1,
                86_400,
            )?;
        }

        if let Some(gas_limit) = self.gas_limit {
            validation::validate_positive_number(
                &format!("networks.{}.gas_limit", name),
                gas_limit,
                21_000,
            )?;
        }

        Ok(())
    }
}

impl DeployConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| DeployError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| DeployError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        // 先解析再替換，環境變數的內容不會改變 TOML 結構
        let mut document = toml::Value::Table(table);
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DeployError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;
        substitute_env_vars(&mut document, &re);

        document
            .try_into()
            .map_err(|e| DeployError::ConfigValidationError {
                field: "toml_schema".to_string(),
                message: format!("TOML schema error: {}", e),
            })
    }

    /// 依名稱取得網路設定；`localhost` 即使沒寫在檔案裡也可使用
    pub fn network(&self, name: &str) -> Result<NetworkConfig> {
        if let Some(network) = self.networks.get(name) {
            return Ok(network.clone());
        }
        if name == LOCALHOST_NETWORK {
            return Ok(NetworkConfig::localhost());
        }

        let field = format!("networks.{}", name);
        validation::validate_required_field(&field, self.networks.get(name)).cloned()
    }

    pub fn default_network(&self) -> &str {
        self.default_network.as_deref().unwrap_or(LOCALHOST_NETWORK)
    }

    pub fn artifacts_dir(&self) -> &str {
        self.paths.artifacts.as_deref().unwrap_or(DEFAULT_ARTIFACTS_DIR)
    }
}

/// 替換字串值中的 ${VAR}；找不到的變數原樣保留
fn substitute_env_vars(value: &mut toml::Value, re: &Regex) {
    match value {
        toml::Value::String(text) => {
            let replaced = re.replace_all(text, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            });
            *text = replaced.into_owned();
        }
        toml::Value::Array(items) => {
            for item in items {
                substitute_env_vars(item, re);
            }
        }
        toml::Value::Table(table) => {
            for (_, item) in table.iter_mut() {
                substitute_env_vars(item, re);
            }
        }
        _ => {}
    }
}

impl Validate for DeployConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.default_network {
            validation::validate_non_empty_string("default_network", name)?;
        }
        if let Some(artifacts) = &self.paths.artifacts {
            validation::validate_path("paths.artifacts", artifacts)?;
        }
        for (name, network) in &self.networks {
            network.validate_as(name)?;
        }
        Ok(())
    }
}
