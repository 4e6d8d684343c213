use std::process::ExitCode;

use clap::Parser;
use normai_client::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use normai_client::query::ask;
use normai_client::query::http::HttpQueryClient;
use normai_core::annotate::{render_plain_text, AnnotatedAnswer};
use normai_core::error::AppError;
use tracing_subscriber::EnvFilter;

/// Ask the legal query service a question and print the cited answer.
#[derive(Debug, Parser)]
#[command(name = "normai", version)]
struct Cli {
    /// Question to ask; multiple words are joined with spaces.
    #[arg(required = true)]
    question: Vec<String>,

    #[arg(long, env = "NORMAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "NORMAI_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Print the annotated answer as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> Result<String, AppError> {
    let config = ClientConfig::new(&cli.base_url, cli.timeout_ms)?;
    let client = HttpQueryClient::new(config);
    let answer: AnnotatedAnswer = ask(&client, &cli.question.join(" "))?;

    if cli.json {
        serde_json::to_string_pretty(&answer).map_err(|e| {
            AppError::new("OUTPUT_FAILED", "Failed to encode answer").with_details(e.to_string())
        })
    } else {
        Ok(render_plain_text(&answer))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            if let Some(details) = e.details.as_deref() {
                eprintln!("  {details}");
            }
            ExitCode::FAILURE
        }
    }
}
