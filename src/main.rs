use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launch_dashboard::config::ServerConfig;
use launch_dashboard::engine::{compute_outcome_breakdown, outcome_counts};
use launch_dashboard::models::SiteSelection;
use launch_dashboard::{api, data};

#[derive(Parser)]
#[command(name = "launch-dashboard")]
#[command(about = "Interactive dashboard over a dataset of rocket launches")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    server: ServerConfig,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server (the default)
    Serve,
    /// Load the data file, print a per-site summary and exit
    Check,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "launch_dashboard=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let table = data::load_table(&config.data)?;
    let state = api::AppState::new(table, &config.layout)?;
    let app = api::create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Launch dashboard listening on http://{}", address);

    axum::serve(listener, app).await?;
    Ok(())
}

fn check(config: ServerConfig) -> anyhow::Result<()> {
    let table = data::load_table(&config.data)?;

    println!(
        "{}: {} launches, payload {}..={} kg",
        config.data.display(),
        table.len(),
        table.min_payload_mass_kg(),
        table.max_payload_mass_kg()
    );
    for site in table.sites() {
        let selection = compute_outcome_breakdown(&table, &SiteSelection::Site(site.clone()));
        let counts = outcome_counts(&selection.subset);
        println!(
            "  {:<14} {:>3} launches, {:>3} successful",
            site,
            counts.total(),
            counts.successes
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Check) => check(cli.server),
        Some(Commands::Serve) | None => serve(cli.server).await,
    }
}
