use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use wnlookup::config::Config;
use wnlookup::lexicon::Database;
use wnlookup::shell::{Session, Shell, ShellError};

/// Look up words in a WordNet-style lexicon, folding inflected forms into
/// their base forms.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Lexicon file (defaults to $WNSEARCHDIR, $WNHOME/dict, then ./dict)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Maximum size in bytes of one search result [default: 204800]
    #[arg(long)]
    capacity: Option<usize>,

    /// Run a single command and exit instead of reading stdin
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wnlookup=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env(cli.db, cli.capacity);

    let db = Database::open(&config.db_path).unwrap_or_else(|e| {
        warn!("starting with database closed: {e}");
        Database::closed(&config.db_path)
    });
    let shell = Shell::new(Session::new(db, config.capacity));

    if !cli.command.is_empty() {
        return Ok(match run(&shell, &cli.command).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::from(e.exit_code())
            }
        });
    }

    info!(db = %config.db_path.display(), "starting interactive session");
    interactive(&shell).await?;
    info!("session ended");
    Ok(ExitCode::SUCCESS)
}

async fn run(shell: &Shell, argv: &[String]) -> Result<(), ShellError> {
    let output = shell.dispatch(argv).await?;
    print_result(&output);
    Ok(())
}

async fn interactive(shell: &Shell) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"wn> ").await?;
        stdout.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        let command = shell.run_line(line);
        tokio::pin!(command);
        let result = loop {
            tokio::select! {
                result = &mut command => break result,
                _ = tokio::signal::ctrl_c() => shell.abort(),
            }
        };

        match result {
            Ok(output) => print_result(&output),
            Err(e) => eprintln!("error: {e}"),
        }
    }
    Ok(())
}

fn print_result(output: &str) {
    if output.is_empty() {
        return;
    }
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}
