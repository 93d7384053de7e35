use clap::{Parser, Subcommand};
use starbase::{App, AppResult, AppSession};
use std::path::PathBuf;

use blockwright::commands::{run_blocks, run_render};

/// Blockwright CLI - host bootstrap for the block editor toolkit
#[derive(Parser)]
#[command(name = "blockwright")]
#[command(about = "Blockwright host tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// List registered block types
    Blocks,
    /// Render a stored document to published markup
    Render {
        /// Path to the document JSON file
        #[arg(short, long)]
        input: PathBuf,
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Host configuration TOML
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Application session for the Blockwright CLI
#[derive(Clone)]
struct BlockwrightSession {
    command: Commands,
}

#[async_trait::async_trait]
impl AppSession for BlockwrightSession {
    async fn execute(&mut self) -> AppResult {
        match &self.command {
            Commands::Blocks => run_blocks(),
            Commands::Render {
                input,
                output,
                config,
            } => run_render(input.clone(), output.clone(), config.clone()),
        }
    }
}

#[tokio::main]
async fn main() -> starbase::MainResult {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let session = BlockwrightSession {
        command: cli.command,
    };

    let exit_code = App::default()
        .run(session, |mut session| async move {
            session.execute().await
        })
        .await?;

    Ok(std::process::ExitCode::from(exit_code))
}
