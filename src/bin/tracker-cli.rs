use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use url::Url;

#[derive(Parser)]
#[command(name = "tracker-cli")]
#[command(about = "Command-line client for the Coin Tracker API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the API is up
    Ping,
    /// Start tracking an address
    Add {
        address: String,
    },
    /// List tracked addresses
    List,
    /// Show live balance and transaction count for a tracked address
    Show {
        address: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = Url::parse(&cli.url)?;

    let res = match cli.command {
        Commands::Ping => client.get(endpoint(&base, &[])?).send().await?,
        Commands::Add { address } => {
            client
                .post(endpoint(&base, &["api", "wallets"])?)
                .json(&json!({ "address": address }))
                .send()
                .await?
        }
        Commands::List => client.get(endpoint(&base, &["api", "wallets"])?).send().await?,
        Commands::Show { address } => {
            client
                .get(endpoint(&base, &["api", "wallets", address.as_str()])?)
                .send()
                .await?
        }
    };

    print_response(res).await
}

/// `base` with `segments` appended, each percent-encoded as a single path segment.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("{} cannot be used as a base URL", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
