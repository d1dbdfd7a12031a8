//! In-memory console for headless runs and tests.

use std::collections::VecDeque;
use std::io;

use crate::console::{InputSource, OutputSink, Tone};

/// Console that replays scripted input and records every emitted line.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<(Tone, String)>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything emitted so far, in order.
    pub fn output(&self) -> &[(Tone, String)] {
        &self.output
    }

    /// Text of every line emitted with `tone`.
    pub fn lines_with(&self, tone: Tone) -> Vec<&str> {
        self.output
            .iter()
            .filter(|(t, _)| *t == tone)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    /// Whether any emitted line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.output.iter().any(|(_, text)| text.contains(needle))
    }

    /// Number of scripted inputs not consumed yet.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl OutputSink for ScriptedConsole {
    fn emit(&mut self, tone: Tone, text: &str) {
        self.output.push((tone, text.to_string()));
    }
}

impl InputSource for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }
}
