use crate::utils::error::{DeployError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl Into<String>, reason: impl Into<String>) -> DeployError {
    DeployError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.into(),
        reason: reason.into(),
    }
}

/// RPC 端點只接受 http(s)；`${VAR}` 沒被替換時也會在這裡失敗
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("not a JSON-RPC endpoint: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            url_str,
            format!("scheme '{}' is not supported, use http or https", url.scheme()),
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    match path {
        "" => Err(invalid(field_name, path, "directory must not be empty")),
        p if p.contains('\0') => Err(invalid(field_name, path, "directory contains a NUL byte")),
        _ => Ok(()),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    (value >= min_value)
        .then_some(())
        .ok_or_else(|| invalid(field_name, value.to_string(), format!("needs {} or more", min_value)))
}

pub fn validate_required_field<'a, T>(field_name: &str, value: Option<&'a T>) -> Result<&'a T> {
    value.ok_or_else(|| DeployError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "must name something"));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(invalid(
            field_name,
            value.to_string(),
            format!("outside {}..={}", min, max),
        ))
    }
}

/// 私鑰必須是 32 bytes 的十六進位字串，可帶 0x 前綴。
/// 錯誤訊息不回顯私鑰內容。
pub fn validate_private_key(field_name: &str, key: &str) -> Result<()> {
    let hex = key.strip_prefix("0x").unwrap_or(key);
    let reason = if hex.len() != 64 {
        format!("Expected 64 hex characters, got {}", hex.len())
    } else if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        "Contains non-hex characters (unresolved ${VAR}?)".to_string()
    } else {
        return Ok(());
    };

    Err(invalid(field_name, "<redacted>", reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("networks.localhost.url", "http://127.0.0.1:8545").is_ok());
        assert!(validate_url("networks.sepolia.url", "https://rpc.sepolia.org").is_ok());
        assert!(validate_url("networks.sepolia.url", "").is_err());
        assert!(validate_url("networks.sepolia.url", "not-a-url").is_err());
        assert!(validate_url("networks.sepolia.url", "${SEPOLIA_RPC_URL}").is_err());
        assert!(validate_url("networks.sepolia.url", "ws://127.0.0.1:8546").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("confirmations", 1, 1).is_ok());
        assert!(validate_positive_number("confirmations", 0, 1).is_err());
    }

    #[test]
    fn test_validate_private_key() {
        let key = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
        assert!(validate_private_key("accounts[0]", key).is_ok());
        assert!(validate_private_key("accounts[0]", &format!("0x{}", key)).is_ok());
        assert!(validate_private_key("accounts[0]", "0x1234").is_err());
        assert!(validate_private_key("accounts[0]", "${DEPLOYER_PRIVATE_KEY}").is_err());

        let err = validate_private_key("accounts[0]", &key.replace('a', "z")).unwrap_err();
        assert!(!err.to_string().contains("zc0974"));
    }

    #[test]
    fn test_validate_range_and_path() {
        assert!(validate_range("timeout_seconds", 300u64, 1, 86_400).is_ok());
        assert!(validate_range("timeout_seconds", 86_400u64, 1, 86_400).is_ok());
        assert!(validate_range("timeout_seconds", 0u64, 1, 86_400).is_err());

        assert!(validate_path("paths.artifacts", "out").is_ok());
        assert!(validate_path("paths.artifacts", "").is_err());
        assert!(validate_path("paths.artifacts", "out\0").is_err());
        assert!(validate_non_empty_string("default_network", "  ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let value = Some(3u64);
        assert_eq!(*validate_required_field("gas_limit", value.as_ref()).unwrap(), 3);

        let missing: Option<u64> = None;
        let err = validate_required_field("gas_limit", missing.as_ref()).unwrap_err();
        assert!(matches!(err, DeployError::MissingConfigError { .. }));
    }
}
