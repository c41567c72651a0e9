use clap::Parser;
use escola_api::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Cli::parse().execute().await
}
