mod cli;
mod setup;
mod shell;
mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{debug, error, info};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use voyager_ai::{AiClient, GeminiClient};
use voyager_common::{Console, OutputSink, Tone, VoyagerError};
use voyager_config::{Credential, CredentialStore, VoyagerConfig};
use voyager_wiki::WikiClient;

use crate::shell::{Connector, Shell, ShellOutcome};
use crate::terminal::TerminalConsole;

const DEFAULT_LOG_DIRECTIVE: &str = "voyager=warn";

/// Load environment variables from a `.env` file (KEY=VALUE lines) in the
/// working directory. Variables already set are left alone.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var_os(key).is_none() {
                std::env::set_var(key, value);
            }
        }
    }
}

/// `RUST_LOG` plus `directives` (comma separated) on stderr.
fn init_logging(directives: &str) {
    let mut filter = EnvFilter::from_default_env();
    let mut rejected = Vec::new();
    for raw in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        match raw.parse::<Directive>() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(_) => rejected.push(raw.to_string()),
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    for raw in rejected {
        tracing::warn!("ignoring invalid log directive: {raw}");
    }
}

/// Show a fatal error once and pick the failure exit code.
fn fail(console: &mut impl OutputSink, err: &dyn std::fmt::Display) -> ExitCode {
    console.emit(Tone::Error, &format!("Error: {err}"));
    ExitCode::FAILURE
}

async fn run(
    location: Option<String>,
    config: VoyagerConfig,
    console: &mut dyn Console,
) -> Result<ShellOutcome, VoyagerError> {
    let wiki = WikiClient::new(setup::wiki_config(&config.wiki))
        .map_err(|e| VoyagerError::Lookup(e.to_string()))?;
    let credentials = CredentialStore::from_config(&config.credentials)?;

    let llm = config.llm.clone();
    let connect: Connector = Box::new(move |credential: &Credential| -> Arc<dyn AiClient> {
        Arc::new(GeminiClient::new(setup::gemini_config(&llm, credential)))
    });

    let shell = Shell::new(
        wiki,
        credentials,
        config.credentials.max_attempts,
        setup::conversation_policy(&config.llm),
        connect,
    );
    shell.run(location, console).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    load_dotenv();
    let args = cli::parse();

    let config = voyager_config::load_config(args.config.as_deref());
    let directive = args
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
    init_logging(&directive);

    info!("Voyager v{} starting", env!("CARGO_PKG_VERSION"));
    let mut console = TerminalConsole::new();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("config load failed: {e}");
            return fail(&mut console, &e);
        }
    };

    match run(args.location, config, &mut console).await {
        Ok(outcome) => {
            debug!(?outcome, "shell finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            fail(&mut console, &e)
        }
    }
}

#[cfg(test)]
mod tests {
    use voyager_common::{ConfigError, ScriptedConsole};

    use super::*;

    #[test]
    fn fatal_errors_are_shown_once() {
        let mut console = ScriptedConsole::default();
        let err = VoyagerError::from(ConfigError::CredentialError("no API key entered".into()));

        assert_eq!(fail(&mut console, &err), ExitCode::FAILURE);
        assert_eq!(
            console.lines_with(Tone::Error),
            vec!["Error: credential error: no API key entered"]
        );
    }
}
