use observer_game::{
    console, AppError, AppState, GameConfig, InMemoryDisplay, LoggingAudioOutput,
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "observer_game=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Game session failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = GameConfig::from_env()?;
    info!(
        starting_score = config.starting_score,
        starting_lives = config.starting_lives,
        "Starting game session"
    );

    let display = InMemoryDisplay::new();
    let mut state = AppState::new(
        config,
        Arc::new(LoggingAudioOutput::new()),
        Arc::new(display.clone()),
    )
    .await;

    console::run(
        &mut state,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    let screen = display.summary().await;
    info!(screen = %screen, "Final screen");
    state.shutdown().await;
    Ok(())
}
