/// User search server - reference implementation of the search protocol
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use usersearch_server::{
    api, config::ServerConfig, dataset, services::StaticToken, AppState, UserDirectory,
};

#[derive(Parser)]
#[command(name = "usersearch-server")]
#[command(about = "Reference user search service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the users in a dataset
    ListUsers {
        /// Dataset path (defaults to the configured one)
        #[arg(short, long)]
        dataset: Option<PathBuf>,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "usersearch_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::ListUsers { dataset, config } => {
            list_users(dataset, config)?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting user search server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Load the dataset once; it is never modified afterwards
    let dataset = dataset::load_dataset(&config.dataset.path)?;
    tracing::info!(
        "Loaded {} users from {:?} (version {})",
        dataset.users.len(),
        config.dataset.path,
        dataset.version
    );

    let directory = Arc::new(UserDirectory::new(dataset.users));
    let credentials = Arc::new(StaticToken::new(config.auth.access_token.clone()));
    let app_state = AppState::new(directory, credentials);

    let app = api::router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn list_users(dataset_path: Option<PathBuf>, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = match dataset_path {
        Some(path) => path,
        None => ServerConfig::load(config_path.as_deref())?.dataset.path,
    };

    let dataset = dataset::load_dataset(&path)?;

    println!("Users (dataset version {}):", dataset.version);
    for user in dataset.users {
        println!(
            "  {:>4}  {:<24} {:>3}  {}",
            user.id, user.name, user.age, user.gender
        );
    }

    Ok(())
}
