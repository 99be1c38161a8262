use clap::Parser;
use github_trending::{Since, Trending};
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use url::Url;

/// List the repositories currently trending on GitHub.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Time window: daily, weekly or monthly
    #[arg(short, long, default_value_t = Since::Daily.to_string())]
    since: String,

    /// Only show repositories written in this language
    #[arg(short, long, default_value = "")]
    language: String,

    /// Fetch from a mirror instead of github.com
    #[arg(long)]
    base_url: Option<Url>,

    /// Print the full entries as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let args = Args::parse();
    debug!("{:?}", args);

    let mut trending = Trending::new()
        .since(args.since)
        .language(args.language);
    if let Some(base_url) = args.base_url {
        trending = trending.base_url(base_url);
    }

    info!("Fetching {}", trending.url()?);
    let repos = trending.repos().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&repos)?);
    } else {
        for (index, repo) in repos.iter().enumerate() {
            println!("{}. {}", index + 1, repo.title);
        }
    }

    Ok(())
}
