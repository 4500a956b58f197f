use clap::Parser;
use deploy_runner::core::runner::report_failure;
use deploy_runner::utils::logger;
use deploy_runner::{AlloyToolkit, CliConfig, DeploymentRunner, HardhatArtifacts};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 解析並驗證設定
    let resolved = match config.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            report_failure(&mut std::io::stderr(), &e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "🚀 Deploying to network '{}' ({})",
        resolved.network.name,
        resolved.network.url
    );
    tracing::debug!("Resolved config: {:?}", resolved);

    let artifacts = HardhatArtifacts::new(resolved.artifacts_dir);
    let toolkit = match AlloyToolkit::connect(resolved.network, artifacts) {
        Ok(toolkit) => toolkit,
        Err(e) => {
            report_failure(&mut std::io::stderr(), &e);
            std::process::exit(1);
        }
    };

    let mut runner = DeploymentRunner::new(toolkit);
    let status = runner
        .execute(&mut std::io::stdout(), &mut std::io::stderr())
        .await;

    std::process::exit(status.code());
}
