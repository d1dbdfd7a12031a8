//! Candidate list rendering.

use voyager_common::{Console, Tone};
use voyager_wiki::{snippet_to_markdown, SearchEntry, SearchResults, MAX_RESULTS};

pub(crate) const INCOMPLETE_ENTRY: &str = "Result missing 'title' or 'snippet' keys.";

/// Print the candidates numbered from 1, at most [`MAX_RESULTS`] of them.
/// Returns how many were shown.
pub fn render_results(results: &SearchResults, console: &mut dyn Console) -> usize {
    let shown = results.len().min(MAX_RESULTS);
    for (i, entry) in results.entries.iter().take(shown).enumerate() {
        match entry {
            SearchEntry::Hit(hit) => {
                console.emit(Tone::Candidate, &format!("{}. {}", i + 1, hit.title));
                console.emit(Tone::Markdown, &snippet_to_markdown(&hit.snippet));
            }
            SearchEntry::Incomplete { .. } => {
                console.emit(Tone::Candidate, &format!("{}.", i + 1));
                console.emit(Tone::Error, INCOMPLETE_ENTRY);
            }
        }
        console.blank();
    }
    shown
}
