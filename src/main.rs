use betslip::cli::{self, Cli};
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = cli::run(cli).await {
        error!(error = %e, "Command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
