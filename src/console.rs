use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::shared::{AppError, AppState};

const HELP: &str = "commands: start | score | hit | home | status | help | quit";

/// A line typed by the player, standing in for buttons and colliders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Score,
    Hit,
    Home,
    Status,
    Help,
    Quit,
}

impl TryFrom<&str> for Command {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "s" => Ok(Command::Start),
            "score" | "+" => Ok(Command::Score),
            "hit" | "-" => Ok(Command::Hit),
            "home" | "h" => Ok(Command::Home),
            "status" | "?" => Ok(Command::Status),
            "help" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(s.trim().to_string()),
        }
    }
}

/// Apply one command to the game; returns false when the session should stop
pub async fn execute(state: &mut AppState, command: Command) -> bool {
    debug!(command = ?command, "Executing command");
    match command {
        Command::Start => state.game.start_game().await,
        Command::Score => state.game.increment_score().await,
        Command::Hit => state.game.reduce_lives().await,
        Command::Home => state.game.go_home().await,
        Command::Status | Command::Help => {}
        Command::Quit => return false,
    }
    true
}

fn status_line(state: &AppState) -> String {
    format!(
        "phase={} score={} lives={}",
        state.game.phase(),
        state.game.score(),
        state.game.lives()
    )
}

/// Read commands line by line until `quit` or end of input
pub async fn run<R, W>(state: &mut AppState, input: R, mut output: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(format!("{}\n", HELP).as_bytes()).await?;
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::try_from(line.as_str()) {
            Ok(command) => command,
            Err(unknown) => {
                warn!(input = %unknown, "Unknown command");
                output
                    .write_all(format!("unknown command '{}'\n{}\n", unknown, HELP).as_bytes())
                    .await?;
                continue;
            }
        };

        if !execute(state, command).await {
            break;
        }

        let reply = match command {
            Command::Help => HELP.to_string(),
            _ => status_line(state),
        };
        output.write_all(format!("{}\n", reply).as_bytes()).await?;
    }

    output.flush().await?;
    Ok(())
}
