use std::collections::VecDeque;
use std::io;

use super::{Console, Input};

/// In-memory console fed from a queue of inputs.
///
/// Reads past the end of the script return [`Input::Closed`].
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<Input>,
    /// Every line written, in order.
    pub output: Vec<String>,
    /// Every prompt shown, in order.
    pub prompts: Vec<String>,
    pub reads: usize,
    pub clears: usize,
}

impl ScriptedConsole {
    /// Script that submits each of `lines` in turn.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(|l| Input::Line(l.into())).collect(),
            ..Self::default()
        }
    }

    /// Append one more input to the script.
    pub fn then(mut self, input: Input) -> Self {
        self.inputs.push_back(input);
        self
    }

    /// Inputs not consumed yet.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// All output joined with newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Number of written lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.output.iter().filter(|l| l.contains(needle)).count()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Input> {
        self.reads += 1;
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front().unwrap_or(Input::Closed))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
