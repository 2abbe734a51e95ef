use anyhow::Result;
use clap::Parser;
use client_core::{ApiClient, Calculator, Key};

/// Terminal front end for the calculator: feeds a key sequence through the
/// input state machine, optionally checking a running API server first.
#[derive(Parser, Debug)]
struct Args {
    /// Key presses to replay, e.g. "5+3*2=".
    keys: Option<String>,
    /// Base URL of a running calculator API, e.g. http://127.0.0.1:3000
    #[arg(long)]
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    if let Some(server_url) = args.server_url.as_deref() {
        let client = ApiClient::new(server_url)?;
        let health = client.health().await?;
        println!("{} v{}: {}", health.status, health.version, health.message);

        let listing = client.operations().await?;
        println!("Operaciones: {}", listing.operations.join(", "));
    }

    if let Some(keys) = args.keys.as_deref() {
        let mut calculator = Calculator::new();
        for c in keys.chars() {
            if let Some(key) = Key::from_char(c) {
                calculator.apply(key);
            }
        }
        println!("{}", calculator.display());
    }

    Ok(())
}
