mod console;

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use concierge_core::config;
use concierge_core::engine::{select_reply, MAX_DELAY_MS};
use concierge_personas::{builtin, BUILTIN_NAMES};
use concierge_widget::chatbot;
use console::ConsoleSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(
    name = "concierge",
    version,
    about = "Scripted chat concierge for small-business sites"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a persona override file.
    #[arg(short, long, default_value = "overrides.toml", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat interactively with a persona.
    Chat {
        /// Built-in persona: pharmacy, chiromotion, or cornerstone.
        #[arg(short, long, default_value = "pharmacy")]
        persona: String,
    },
    /// Send a one-shot message and print the reply without the typing delay.
    Ask {
        /// Built-in persona: pharmacy, chiromotion, or cornerstone.
        #[arg(short, long, default_value = "pharmacy")]
        persona: String,
        /// The message to send.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// List built-in personas.
    Personas,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Chat { persona } => run_chat(&persona, &cli.config).await,
        Commands::Ask { persona, message } => {
            run_ask(&persona, &cli.config, &message.join(" ")).await
        }
        Commands::Personas => {
            for name in BUILTIN_NAMES {
                match builtin(name) {
                    Some(p) => {
                        let p = p?;
                        println!("{name:<12} {} {}", p.avatar, p.name);
                    }
                    None => unreachable!("BUILTIN_NAMES and builtin() are kept in sync"),
                }
            }
            Ok(())
        }
    }
}

async fn run_chat(persona: &str, config_path: &str) -> anyhow::Result<()> {
    let overrides = config::load(config_path)?;
    let surface = Arc::new(ConsoleSurface::new());
    let widget = chatbot(persona, surface, &overrides)?;

    println!(
        "{} {} — type a message, or 'quit' to leave.",
        widget.persona().avatar,
        widget.persona().name
    );
    widget.open();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim().to_string();
        if line == "quit" || line == "exit" {
            break;
        }
        widget.submit(&line).await?;
    }

    // Give any pending reply timer a chance to land before exiting.
    tokio::time::sleep(Duration::from_millis(MAX_DELAY_MS)).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_flag_parses_after_subcommand() {
        let cli = Cli::try_parse_from([
            "concierge",
            "chat",
            "--persona",
            "pharmacy",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Chat { ref persona } if persona == "pharmacy"));
    }

    #[test]
    fn test_config_flag_defaults_when_absent() {
        let cli = Cli::try_parse_from(["concierge", "personas"]).unwrap();
        assert_eq!(cli.config, "overrides.toml");
    }
}

async fn run_ask(persona: &str, config_path: &str, message: &str) -> anyhow::Result<()> {
    if message.trim().is_empty() {
        anyhow::bail!("message is empty — usage: concierge ask -p pharmacy <message>");
    }

    let overrides = config::load(config_path)?;
    let base = builtin(persona)
        .ok_or_else(|| anyhow::anyhow!("unknown persona '{persona}'"))??;
    let p = concierge_personas::build(base, &overrides)?;

    let mut rng = StdRng::from_entropy();
    let selection = select_reply(message, &p.table, &p.fallback, &mut rng);
    tracing::debug!(score = selection.score, "match score");
    println!("{}", selection.text);
    Ok(())
}
