use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use depot::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "depot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.depot")]
    data_dir: String,

    /// Base URL of the artifact repository service
    #[arg(long, global = true)]
    repository_url: Option<String>,

    #[arg(long, global = true)]
    mock_repository: bool,

    #[arg(long, global = true)]
    memory_storage: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let data_dir = expand_tilde(&cli.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let container = Container::new(ContainerConfig {
        data_dir,
        repository_url: cli.repository_url,
        mock_repository: cli.mock_repository,
        memory_storage: cli.memory_storage,
    })?;

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn transitive_flag_parses() {
        let cli = Cli::try_parse_from([
            "depot",
            "refresh",
            "examples.metadata",
            "test",
            "2.3.1",
            "--project-id",
            "PROD-1",
            "--transitive",
        ])
        .unwrap();
        match cli.command {
            Commands::Refresh { transitive, .. } => assert!(transitive),
            _ => panic!("expected refresh command"),
        }
    }
}
