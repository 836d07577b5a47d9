use clap::{Parser, Subcommand};
use std::sync::Arc;

use listr_bot::application::services::ListService;
use listr_bot::infrastructure::adapters::console::ConsoleAdapter;
use listr_bot::infrastructure::adapters::http;
use listr_bot::infrastructure::config::Config;
use listr_bot::infrastructure::database::SqliteStore;

#[derive(Parser)]
#[command(name = "listr-bot")]
#[command(about = "Per-sender SMS list manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Database path (overrides config)
    #[arg(short, long)]
    db: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the service
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_service(cli.config, cli.db);
        }
        Commands::Version => {
            println!("listr-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn run_service(config_path: String, db_override: Option<String>) {
    // Load config
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using environment", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    if let Some(db) = db_override {
        config.database.path = db.into();
    }

    tracing::info!("Starting {}", config.bot.name);

    // Open the database and build the executor it gets injected into
    let store = match SqliteStore::open(&config.database.path) {
        Ok(store) => {
            tracing::info!("Database ready at {}", config.database.path.display());
            store
        }
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };
    let service = Arc::new(ListService::new(store));

    // Select adapter
    let rt = tokio::runtime::Runtime::new().unwrap();

    if let Some(bind) = config.http_bind().map(|s| s.to_string()) {
        rt.block_on(async {
            if let Err(e) = http::serve(service, &bind).await {
                tracing::error!("Webhook stopped: {}", e);
            }
        });
    } else {
        // Run console session (dev mode)
        rt.block_on(async {
            let console = ConsoleAdapter::new();
            if let Err(e) = console.run(&service).await {
                tracing::error!("Console session failed: {}", e);
            }
        });
    }
}

fn init_config() {
    match Config::default().save("config.yaml") {
        Ok(()) => println!("Wrote config.yaml"),
        Err(e) => {
            tracing::error!("Failed to write config: {}", e);
            std::process::exit(1);
        }
    }
}
