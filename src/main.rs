use std::process::ExitCode;

use summarizer::core::config::AppConfig;
use summarizer::worker::{self, Summarizer};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // .env values must be visible before anything else reads the environment
    AppConfig::load_dotenv()?;
    let config = AppConfig::from_env()?;
    summarizer::setup_logging(&config)?;
    let summarizer = Summarizer::from_config(&config)?;

    let mut stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    match worker::run(&summarizer, &mut stdin, &mut stdout).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
