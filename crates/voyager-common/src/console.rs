//! The console capability handed to every interactive component.
//!
//! Components never talk to stdin/stdout directly. They receive a
//! `&mut dyn Console` and describe *what* a line is (`Tone`); the
//! implementation decides how it looks. The binary wires in a styled
//! terminal, tests wire in [`ScriptedConsole`](crate::ScriptedConsole).

use std::io;

/// What a piece of output represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Unstyled text.
    Plain,
    /// The application banner.
    Banner,
    /// An input prompt; printed without a trailing newline.
    Prompt,
    /// A numbered search candidate heading.
    Candidate,
    /// Markdown that should be rendered for the terminal.
    Markdown,
    /// A reply from the assistant (markdown).
    Assistant,
    /// A status line worth drawing attention to.
    Notice,
    /// A short diagnostic for a failed operation.
    Error,
}

/// Destination for user-visible output.
pub trait OutputSink {
    fn emit(&mut self, tone: Tone, text: &str);

    fn blank(&mut self) {
        self.emit(Tone::Plain, "");
    }
}

/// Source of user input, one line at a time.
pub trait InputSource {
    /// Read the next line with the line terminator stripped.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// A bidirectional console.
pub trait Console: OutputSink + InputSource {
    /// Print `label` as a prompt and read the answer.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.emit(Tone::Prompt, label);
        self.read_line()
    }
}

impl<T: OutputSink + InputSource + ?Sized> Console for T {}
