use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use skycast_core::{AppError, Config};
use skycast_ui::{AppServices, InputEvent, Key, TerminalPresenter};
use skycast_weather::UnitPreference;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const HELP: &str = "\
Type a place name to search. Commands:
  :down :up        move through suggestions
  :enter :esc      commit the highlighted suggestion / close the list
  :pick N          pick suggestion N
  :out             click outside the list
  :go              fetch weather for the current input
  :units metric|imperial
  :quit";

/// One line of terminal input
#[derive(Debug, PartialEq)]
enum Command {
    Event(InputEvent),
    Quit,
}

fn parse_line(line: &str) -> Result<Command> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(Command::Event(InputEvent::Text(line.to_string())));
    };

    let mut parts = command.split_whitespace();
    let event = match (parts.next(), parts.next()) {
        (Some("quit"), None) => return Ok(Command::Quit),
        (Some("down"), None) => InputEvent::Key(Key::ArrowDown),
        (Some("up"), None) => InputEvent::Key(Key::ArrowUp),
        (Some("enter"), None) => InputEvent::Key(Key::Enter),
        (Some("esc"), None) => InputEvent::Key(Key::Escape),
        (Some("out"), None) => InputEvent::ClickOutside,
        (Some("go"), None) => InputEvent::Submit,
        (Some("pick"), Some(n)) => {
            let n: usize = n.parse().with_context(|| format!("Not a number: {}", n))?;
            if n == 0 {
                bail!("Suggestions are numbered from 1");
            }
            InputEvent::ClickSuggestion(n - 1)
        }
        (Some("units"), Some("metric")) => InputEvent::ToggleUnits(UnitPreference::Metric),
        (Some("units"), Some("imperial")) => InputEvent::ToggleUnits(UnitPreference::Imperial),
        _ => bail!("Unknown command: {}", line),
    };
    Ok(Command::Event(event))
}

/// Forward stdin lines as input events until `:quit` or end of input.
async fn read_input(events: mpsc::Sender<InputEvent>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match parse_line(line.trim_end()) {
            Ok(Command::Event(event)) => {
                if events.send(event).await.is_err() {
                    break;
                }
            }
            Ok(Command::Quit) => break,
            Err(e) => {
                println!("{}", e);
                println!("{}", HELP);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    skycast_core::init()?;

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let (config, _) = match Config::load_validated(config_path.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            let err = AppError::classify(e);
            eprintln!("{}", err.user_message());
            return Err(err.into());
        }
    };
    let services = AppServices::from_config(&config)?;

    tracing::info!("Skycast started");
    println!("{}", HELP);

    let controller = services.into_controller(TerminalPresenter::stdout());
    let (tx, rx) = mpsc::channel(32);
    let reader = tokio::spawn(read_input(tx));

    controller.run(rx).await;

    reader.await.context("Input task failed")??;
    tracing::info!("Skycast stopped");
    Ok(())
}
