//! The interactive shell: location search, candidate pick, document chat.

mod banner;
mod choice;
mod display;


use std::sync::Arc;

use tracing::{info, warn};
use voyager_ai::{AiClient, ConversationManager, ConversationPolicy, SessionOutcome};
use voyager_common::{Console, Tone, VoyagerError};
use voyager_config::{resolve_credential, Credential, CredentialStore};
use voyager_wiki::{LookupError, SearchHit, SearchResults, WikiClient};

pub use banner::print_banner;
pub use choice::{parse_choice, Choice};
pub use display::render_results;

/// Builds the provider client once the API key is known.
pub type Connector = Box<dyn Fn(&Credential) -> Arc<dyn AiClient> + Send + Sync>;

/// How a shell run finished without a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutcome {
    Chatted(SessionOutcome),
    NoResults,
    UnexpectedResults,
    Cancelled,
}

pub struct Shell {
    wiki: WikiClient,
    credentials: CredentialStore,
    max_attempts: u32,
    policy: ConversationPolicy,
    connect: Connector,
}

impl Shell {
    pub fn new(
        wiki: WikiClient,
        credentials: CredentialStore,
        max_attempts: u32,
        policy: ConversationPolicy,
        connect: Connector,
    ) -> Self {
        Self {
            wiki,
            credentials,
            max_attempts,
            policy,
            connect,
        }
    }

    /// Run one search-pick-chat pass.
    ///
    /// Errors are fatal for the process: credential exhaustion, search or
    /// fetch transport failures, and chat setup failures.
    pub async fn run(
        &self,
        location: Option<String>,
        console: &mut dyn Console,
    ) -> Result<ShellOutcome, VoyagerError> {
        print_banner(console);
        let credential = resolve_credential(&self.credentials, console, self.max_attempts)?;

        let Some(term) = read_location(location, console)? else {
            return Ok(ShellOutcome::Cancelled);
        };

        let results = match self.wiki.search(&term).await {
            Ok(results) => results,
            Err(LookupError::Malformed(detail)) => {
                warn!(term, "malformed search response: {detail}");
                console.emit(Tone::Error, "Unexpected results. Exiting.");
                return Ok(ShellOutcome::UnexpectedResults);
            }
            Err(e) => return Err(VoyagerError::Lookup(format!("search for '{term}' failed: {e}"))),
        };
        if results.is_empty() {
            console.emit(Tone::Notice, &format!("No results found for '{term}'."));
            return Ok(ShellOutcome::NoResults);
        }

        let shown = render_results(&results, console);
        let Some(hit) = choose(&results, shown, console)? else {
            return Ok(ShellOutcome::Cancelled);
        };

        let page = self.wiki.fetch(hit.page_id).await.map_err(|e| {
            VoyagerError::Lookup(format!("could not load '{}': {e}", hit.title))
        })?;
        info!(page_id = page.page_id, title = %page.title, chars = page.text.len(), "page loaded");

        let manager = ConversationManager::new((self.connect)(&credential), self.policy.clone());
        let outcome = manager
            .run(&page.text, console)
            .await
            .map_err(|e| VoyagerError::Chat(e.to_string()))?;
        info!(reason = ?outcome.reason, turns = outcome.turns, cached = outcome.cached, "chat ended");
        Ok(ShellOutcome::Chatted(outcome))
    }
}

fn read_location(
    location: Option<String>,
    console: &mut dyn Console,
) -> Result<Option<String>, VoyagerError> {
    if let Some(term) = location.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(Some(term.to_string()));
    }
    loop {
        let Some(answer) = console.prompt("Enter a location to search: ")? else {
            return Ok(None);
        };
        let term = answer.trim();
        if !term.is_empty() {
            return Ok(Some(term.to_string()));
        }
    }
}

fn choose(
    results: &SearchResults,
    shown: usize,
    console: &mut dyn Console,
) -> Result<Option<SearchHit>, VoyagerError> {
    let label = format!("Select a destination (1-{shown}, or 'quit'): ");
    loop {
        let Some(answer) = console.prompt(&label)? else {
            return Ok(None);
        };
        match parse_choice(&answer, shown) {
            Choice::Selected(index) => match results.selectable(index) {
                Some(hit) => return Ok(Some(hit.clone())),
                None => console.emit(Tone::Error, "That result is incomplete, pick another one."),
            },
            Choice::OutOfRange => console.emit(
                Tone::Error,
                &format!("Please enter a number between 1 and {shown}."),
            ),
            Choice::NotANumber => console.emit(Tone::Error, "Please enter a number, or 'quit'."),
            Choice::Cancel => return Ok(None),
        }
    }
}
