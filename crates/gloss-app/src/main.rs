use clap::Parser;
use gloss_config::Config;
use gloss_dictionary::DictionaryClient;
use gloss_notion::NotionClient;
use tracing_subscriber::EnvFilter;

mod sync;


/// Fill empty definitions in a Notion vocabulary database
#[derive(Parser)]
#[command(name = "gloss", version)]
struct Args {
    /// Skip tag and language enrichment when updating records
    #[arg(long)]
    no_tags: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let mut config = Config::new();
    if args.no_tags {
        config.dictionary.tags = false;
    }

    let store = match NotionClient::new(&config.notion) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create Notion client: {:#}", e);
            std::process::exit(1);
        }
    };

    let provider = match DictionaryClient::new(&config.dictionary) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create dictionary client: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = sync::run(&store, &provider).await {
        tracing::error!("Error in main process: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!("Process completed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
