use alloy::signers::local::PrivateKeySigner;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use estate_deploy::artifacts::DEFAULT_ARTIFACTS_DIR;
use estate_deploy::config::DEFAULT_CONFIG_FILE;
use estate_deploy::{ArtifactStore, DeployConfig, Deployment, Network, RpcClient, CONTRACT_NAME};

#[derive(Parser)]
#[command(name = "deploy")]
#[command(about = "Deploy the RealEstateTokenization contract")]
#[command(version)]
struct Args {
    /// Path to config file (default: deploy.toml when present)
    #[arg(short, long, env = "DEPLOY_CONFIG")]
    config: Option<PathBuf>,

    /// Network to deploy to (core-testnet, core-mainnet, localhost)
    #[arg(short, long, env = "NETWORK")]
    network: Option<Network>,

    /// RPC URL, overriding the config file and network default
    #[arg(long, env = "RPC_URL")]
    rpc_url: Option<String>,

    /// Hardhat artifacts directory
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    artifacts: PathBuf,

    /// Contract to deploy (bare or fully qualified name)
    #[arg(long, default_value = CONTRACT_NAME)]
    contract: String,

    /// Private key of the deployer account
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Log filter directives
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    log_filter: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_filter))
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("❌ Deployment failed: {err}");
            ExitCode::from(1)
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(network) = args.network {
        config.set_network(network);
    }
    if let Some(url) = &args.rpc_url {
        config = config.with_rpc(url);
    }
    info!(
        "Starting deployment to {}...",
        config.network().display_name()
    );

    let signer: PrivateKeySigner = args
        .private_key
        .ok_or("no deployer key, set PRIVATE_KEY or pass --private-key")?
        .parse()?;
    let client = RpcClient::connect(config, signer).await?;

    let report = Deployment::new(&client, ArtifactStore::new(args.artifacts))
        .contract_name(&args.contract)
        .currency_symbol(client.config().currency_symbol())
        .run()
        .await?;

    info!(address = %report.contract_address, "🎉 Deployment completed successfully!");
    info!(
        network = client.network().display_name(),
        chain_id = client.config().chain_id(),
        "Network"
    );
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<DeployConfig, estate_deploy::ConfigError> {
    match path {
        Some(path) => DeployConfig::from_file(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            DeployConfig::from_file(DEFAULT_CONFIG_FILE)
        }
        None => Ok(DeployConfig::default()),
    }
}
