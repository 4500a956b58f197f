use clap::Parser;
use std::path::PathBuf;

/// 這些旗標只設定部署工具 (網路、artifacts)，部署的合約本身是固定的
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "deploy")]
#[command(about = "Deploys the DecntralizedSocialMediaPlatform contract")]
pub struct CliConfig {
    /// Network name from the config file (built-in: localhost)
    #[arg(long)]
    pub network: Option<String>,

    /// Path to the TOML config file [default: deploy.toml if present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the compiled contract artifacts
    #[arg(long)]
    pub artifacts: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "deploy",
            "--network",
            "sepolia",
            "--artifacts",
            "out",
            "--verbose",
        ]);

        assert_eq!(cli.network.as_deref(), Some("sepolia"));
        assert_eq!(cli.artifacts.as_deref(), Some("out"));
        assert!(cli.verbose);
        assert!(!cli.json_logs);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_rejects_positional_arguments() {
        let result = CliConfig::try_parse_from(["deploy", "SomeOtherContract"]);
        assert!(result.is_err());
    }
}
