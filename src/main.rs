use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use usersearch::config::Config;
use usersearch::{SearchClient, SearchRequest};

#[derive(Parser)]
#[command(name = "usersearch", about = "Search a static user dataset over HTTP")]
struct Cli {
    /// Log at debug level. RUST_LOG takes precedence when set.
    #[arg(long, global = true)]
    debug: bool,

    /// Config file. Defaults to ~/.config/usersearch/config.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the dataset and serve search requests.
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:8080.
        #[arg(long)]
        bind: Option<String>,
        /// XML dataset to load.
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Send one search request and print the result as JSON.
    Find(FindArgs),
}

#[derive(Args)]
struct FindArgs {
    /// Server base URL.
    #[arg(long)]
    url: Option<String>,
    /// Access token sent in the AccessToken header.
    #[arg(long)]
    token: Option<String>,
    /// Substring to look for in name or about.
    #[arg(long, default_value = "")]
    query: String,
    /// Id, Age, Name, or empty.
    #[arg(long, default_value = "")]
    order_field: String,
    /// -1 descending, 0 as is, 1 ascending.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    order_by: i64,
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    limit: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Serve { bind, dataset } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            if let Some(dataset) = dataset {
                config.server.dataset = dataset;
            }
            usersearch::serve(&config.server).await
        }
        Command::Find(args) => {
            if let Some(url) = args.url {
                config.client.url = url;
            }
            if let Some(token) = args.token {
                config.client.access_token = token;
            }
            let request = SearchRequest {
                query: args.query,
                order_field: args.order_field,
                order_by: args.order_by,
                limit: args.limit,
                offset: args.offset,
            };
            let users = SearchClient::from_config(&config.client)
                .find_users(&request)
                .await?;
            println!("{}", serde_json::to_string_pretty(&users)?);
            Ok(())
        }
    }
}

/// Logs go to stderr so `find` output stays machine-readable.
fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}
