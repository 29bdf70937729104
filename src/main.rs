use anyhow::Result;
use clap::Parser;

use hookmaster::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run().await
}
