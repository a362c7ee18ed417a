use clap::Parser;
use seogenius::cli::{self, Args};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    dotenv::dotenv().ok();
    cli::setup_logging();

    if let Err(e) = cli::run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
