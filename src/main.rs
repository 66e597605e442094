use clap::Parser;
use frp_panel_client::{force_offline, Config, ForceOfflineRequest, HttpApiClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "frp-panel-client")]
#[command(about = "Force a panel-managed tunnel offline", long_about = None)]
struct Cli {
    /// Id of the tunnel to force offline
    proxy_id: i64,

    /// Panel API base URL (overrides PANEL_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    /// Panel session token (overrides PANEL_API_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Request timeout in milliseconds (overrides PANEL_API_TIMEOUT_MS)
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frp_panel_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if cli.api_base.is_some() {
        config.api_base = cli.api_base;
    }
    if cli.token.is_some() {
        config.token = cli.token;
    }
    if cli.timeout_ms.is_some() {
        config.timeout_ms = cli.timeout_ms;
    }

    let client = match HttpApiClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(%e, "failed to build API client");
            std::process::exit(2);
        }
    };

    tracing::info!(proxy_id = cli.proxy_id, api_base = config.api_base(), "forcing tunnel offline");

    let response = force_offline(&client, ForceOfflineRequest { proxy_id: cli.proxy_id }).await;

    println!("{}", serde_json::to_string_pretty(&response).unwrap());

    if !response.flag {
        std::process::exit(1);
    }
}
