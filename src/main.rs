//! HoopBuddy console
//!
//! Main application entry point

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn, error};

use HoopBuddy::{
    config::Settings,
    utils::logging,
    database::{load_seed, DatabaseService},
    services::ServiceFactory,
    state::AppContext,
    handlers::{handle_line, LineOutcome},
};

const PROMPT: &str = "hoop> ";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file writer on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", HoopBuddy::info());

    // Load the two datasets
    let seed = load_seed(settings.seed.path.as_deref()).await?;
    let database = DatabaseService::new(seed);

    info!("Initializing services...");
    let services = ServiceFactory::new(database, settings.clone());
    let stats = services.stats();
    info!(
        host_gatherings = stats.host_gatherings,
        guest_gatherings = stats.guest_gatherings,
        "Datasets loaded"
    );

    let mut ctx = AppContext::with_default_profiles(settings, services);

    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    stdout.write_all("HoopBuddy - 'help'로 명령어를 확인하세요.\n".as_bytes()).await?;

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match handle_line(&mut ctx, &line) {
            Ok(LineOutcome::Reply(text)) => {
                stdout.write_all(text.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }
            Ok(LineOutcome::Empty) => {}
            Ok(LineOutcome::Quit) => break,
            Err(e) => {
                if e.is_recoverable() {
                    warn!(error = %e, "Command refused");
                } else {
                    error!(error = %e, "Command failed");
                }
                stdout.write_all(format!("⚠️ {}\n", e).as_bytes()).await?;
            }
        }
    }

    info!("HoopBuddy has been shut down.");

    Ok(())
}
