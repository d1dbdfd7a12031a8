//! Styled terminal console.
//!
//! Maps each [`Tone`] to a `console` style and renders markdown (search
//! snippets, assistant replies) through `pulldown-cmark`.

use std::io::{self, BufRead};

use console::{style, Term};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};
use tracing::debug;
use voyager_common::{InputSource, OutputSink, Tone};

/// The interactive console on stdin/stdout.
pub struct TerminalConsole {
    term: Term,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn write(&self, text: &str, newline: bool) {
        let result = if newline {
            self.term.write_line(text)
        } else {
            self.term.write_str(text).and_then(|()| self.term.flush())
        };
        if let Err(e) = result {
            debug!("terminal write failed: {e}");
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for TerminalConsole {
    fn emit(&mut self, tone: Tone, text: &str) {
        let rendered = match tone {
            Tone::Plain => text.to_string(),
            Tone::Banner => style(text).cyan().bold().to_string(),
            Tone::Prompt => {
                self.write(&style(text).bold().to_string(), false);
                return;
            }
            Tone::Candidate => style(text).bold().to_string(),
            Tone::Markdown => render_markdown(text).trim_end().to_string(),
            Tone::Assistant => format!(
                "{}\n{}\n",
                style("Guide:").green().bold(),
                render_markdown(text).trim_end()
            ),
            Tone::Notice => style(text).yellow().to_string(),
            Tone::Error => style(text).red().bold().to_string(),
        };
        self.write(&rendered, true);
    }
}

impl InputSource for TerminalConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Render markdown as styled terminal text.
pub fn render_markdown(markdown: &str) -> String {
    let mut output = String::new();
    let mut in_code_block = false;
    let mut list_depth: usize = 0;
    let mut strong = 0usize;
    let mut emphasis = 0usize;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let prefix = match level {
                    HeadingLevel::H1 => style("#").cyan().bold(),
                    HeadingLevel::H2 => style("##").cyan(),
                    _ => style("###").dim(),
                };
                output.push_str(&format!("{prefix} "));
                strong += 1;
            }
            Event::End(TagEnd::Heading(_)) => {
                strong = strong.saturating_sub(1);
                output.push_str("\n\n");
            }

            Event::Start(Tag::CodeBlock(kind)) => {
                in_code_block = true;
                let fence = match kind {
                    CodeBlockKind::Fenced(lang) => format!("```{lang}"),
                    CodeBlockKind::Indented => "```".to_string(),
                };
                output.push_str(&format!("{}\n", style(fence).dim()));
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                output.push_str(&format!("{}\n", style("```").dim()));
            }
            Event::Code(code) => {
                output.push_str(&style(format!("`{code}`")).cyan().to_string());
            }

            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    output.push('\n');
                }
            }
            Event::Start(Tag::Item) => {
                let indent = "  ".repeat(list_depth.saturating_sub(1));
                output.push_str(&format!("{indent}{} ", style("•").cyan()));
            }
            Event::End(TagEnd::Item) => {
                if !output.ends_with('\n') {
                    output.push('\n');
                }
            }

            Event::Start(Tag::Strong) => strong += 1,
            Event::End(TagEnd::Strong) => strong = strong.saturating_sub(1),
            Event::Start(Tag::Emphasis) => emphasis += 1,
            Event::End(TagEnd::Emphasis) => emphasis = emphasis.saturating_sub(1),

            Event::Text(text) => {
                if in_code_block {
                    output.push_str(&text);
                } else {
                    let mut styled = style(text.into_string());
                    if strong > 0 {
                        styled = styled.bold();
                    }
                    if emphasis > 0 {
                        styled = styled.italic();
                    }
                    output.push_str(&styled.to_string());
                }
            }
            Event::SoftBreak => output.push(if in_code_block { '\n' } else { ' ' }),
            Event::HardBreak => output.push('\n'),

            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => {
                if list_depth == 0 {
                    output.push_str("\n\n");
                }
            }
            _ => {}
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(markdown: &str) -> String {
        console::strip_ansi_codes(&render_markdown(markdown)).into_owned()
    }

    #[test]
    fn strips_bold_markers() {
        assert_eq!(plain("The **old town** of Lisbon...").trim(), "The old town of Lisbon...");
    }

    #[test]
    fn renders_headings_and_lists() {
        let text = plain("# Sights\n\n- Tram 28\n- Belém Tower\n");
        assert!(text.starts_with("# Sights"));
        assert!(text.contains("• Tram 28\n"));
        assert!(text.contains("• Belém Tower\n"));
    }

    #[test]
    fn keeps_code_blocks_verbatim() {
        let text = plain("```\nline one\nline two\n```\n");
        assert!(text.contains("line one\nline two\n"));
    }

    #[test]
    fn separates_paragraphs() {
        let text = plain("First.\nStill first.\n\nSecond.");
        assert_eq!(text.trim_end(), "First. Still first.\n\nSecond.");
    }
}
