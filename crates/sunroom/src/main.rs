use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use events::HubConfig;
use std::path::{Path, PathBuf};
use sunroom::{run, Style};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sunroom")]
#[command(about = "Light a room when the sun shines, four different ways", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML file with events hub settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single notification style
    Run {
        #[arg(value_enum)]
        style: Style,
    },
    /// Run every notification style
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let hub_config = load_hub_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Run { style }) => run_style(style, &hub_config).await,
        Some(Commands::All) | None => {
            for style in Style::ALL {
                run_style(style, &hub_config).await?;
            }
            Ok(())
        }
    }
}

fn load_hub_config(path: Option<&Path>) -> Result<HubConfig> {
    match path {
        Some(path) => HubConfig::load(path)
            .with_context(|| format!("Failed to load hub config from {}", path.display())),
        None => Ok(HubConfig::default()),
    }
}

async fn run_style(style: Style, hub_config: &HubConfig) -> Result<()> {
    let room = run(style, hub_config)
        .await
        .with_context(|| format!("Style '{}' failed", style.as_str()))?;
    println!(
        "{:<10} room is {}",
        style.as_str(),
        room.class().as_deref().unwrap_or("unchanged")
    );
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sunroom=warn,events=warn".into()),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use events::DispatchPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_style() {
        let cli = Cli::try_parse_from(["sunroom", "run", "observable"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Run {
                style: Style::Observable
            })
        ));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_style() {
        assert!(Cli::try_parse_from(["sunroom", "run", "telepathy"]).is_err());
    }

    #[test]
    fn test_load_hub_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hub.toml");
        std::fs::write(&path, "policy = \"isolate\"\n").unwrap();

        let config = load_hub_config(Some(path.as_path())).unwrap();
        assert_eq!(config.policy, DispatchPolicy::Isolate);
    }

    #[test]
    fn test_load_hub_config_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");
        let err = load_hub_config(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to load hub config"));
    }
}
