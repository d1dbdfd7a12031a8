//! Conversion of search snippets to terminal markdown.

use std::sync::OnceLock;

use regex::Regex;

const MATCH_OPEN: &str = r#"<span class="searchmatch">"#;
const MATCH_CLOSE: &str = "</span>";

static TAG_RE: OnceLock<Regex> = OnceLock::new();

fn tag_re() -> &'static Regex {
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("static regex"))
}

/// Turn a raw search snippet into markdown: matched words become bold,
/// leftover markup is dropped, entities are decoded and an ellipsis marks
/// the cut-off text.
pub fn snippet_to_markdown(raw: &str) -> String {
    let marked = raw.replace(MATCH_OPEN, "**").replace(MATCH_CLOSE, "**");
    let stripped = tag_re().replace_all(&marked, "");
    let decoded = decode_entities(&stripped);
    format!("{}...", decoded.trim_end())
}

fn decode_entities(text: &str) -> String {
    // &amp; last so "&amp;lt;" stays "&lt;"
    text.replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_matches_in_bold() {
        let raw = r#"<span class="searchmatch">Paris</span> is the capital of France"#;
        assert_eq!(
            snippet_to_markdown(raw),
            "**Paris** is the capital of France..."
        );
    }

    #[test]
    fn handles_several_matches() {
        let raw = r#"<span class="searchmatch">New</span> <span class="searchmatch">York</span> City"#;
        assert_eq!(snippet_to_markdown(raw), "**New** **York** City...");
    }

    #[test]
    fn decodes_entities_and_strips_other_tags() {
        let raw = "Caf&eacute; &quot;Central&quot; &amp; <b>bar</b> &amp;lt;";
        assert_eq!(
            snippet_to_markdown(raw),
            "Caf&eacute; \"Central\" & bar &lt;..."
        );
    }

    #[test]
    fn empty_snippet_is_just_ellipsis() {
        assert_eq!(snippet_to_markdown(""), "...");
    }
}
