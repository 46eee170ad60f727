// Test doubles - mock backend and scripted console
//
// Used by the unit tests and the integration tests in `tests/` to drive the
// controller without a terminal or real tools.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use indicatif::ProgressBar;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use crate::backend::ToolBackend;
use crate::error::BackendError;
use crate::terminal::Console;

// =============================================================================
// Mock Backend
// =============================================================================

/// Calls made against a [`MockBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Probe(String),
    Run(String),
    Install(String),
    Update(String),
}

/// Backend with scripted outcomes that records every call
#[derive(Clone, Default)]
pub struct MockBackend {
    installed: Arc<Mutex<HashSet<String>>>,
    all_installed: bool,
    attaches_terminal: bool,
    run_failures: Arc<Mutex<HashMap<String, String>>>,
    install_failures: Arc<Mutex<HashMap<String, String>>>,
    update_failures: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<BackendCall>>>,
}

impl MockBackend {
    /// No tool is installed; every action succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Every probe reports installed
    pub fn all_installed(mut self) -> Self {
        self.all_installed = true;
        self
    }

    /// Runs take over the terminal, like [`crate::backend::ProcessBackend`]
    pub fn attached(mut self) -> Self {
        self.attaches_terminal = true;
        self
    }

    /// Probes report `tool` as installed
    pub fn with_installed(self, tool: &str) -> Self {
        self.installed.lock().unwrap().insert(tool.to_string());
        self
    }

    /// Running `tool` fails with `message`
    pub fn failing_run(self, tool: &str, message: &str) -> Self {
        self.run_failures
            .lock()
            .unwrap()
            .insert(tool.to_string(), message.to_string());
        self
    }

    /// Installing `tool` fails with `message`
    pub fn failing_install(self, tool: &str, message: &str) -> Self {
        self.install_failures
            .lock()
            .unwrap()
            .insert(tool.to_string(), message.to_string());
        self
    }

    /// Updating `tool` fails with `message`
    pub fn failing_update(self, tool: &str, message: &str) -> Self {
        self.update_failures
            .lock()
            .unwrap()
            .insert(tool.to_string(), message.to_string());
        self
    }

    /// All recorded calls in order
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded calls of one kind, as tool names
    pub fn runs(&self) -> Vec<String> {
        self.filter_calls(|c| match c {
            BackendCall::Run(t) => Some(t.clone()),
            _ => None,
        })
    }

    pub fn installs(&self) -> Vec<String> {
        self.filter_calls(|c| match c {
            BackendCall::Install(t) => Some(t.clone()),
            _ => None,
        })
    }

    pub fn updates(&self) -> Vec<String> {
        self.filter_calls(|c| match c {
            BackendCall::Update(t) => Some(t.clone()),
            _ => None,
        })
    }

    pub fn probes(&self) -> Vec<String> {
        self.filter_calls(|c| match c {
            BackendCall::Probe(t) => Some(t.clone()),
            _ => None,
        })
    }

    fn filter_calls<F>(&self, f: F) -> Vec<String>
    where
        F: Fn(&BackendCall) -> Option<String>,
    {
        self.calls.lock().unwrap().iter().filter_map(f).collect()
    }

    fn record(&self, call: BackendCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn scripted(
        failures: &Mutex<HashMap<String, String>>,
        tool: &str,
    ) -> Result<(), BackendError> {
        match failures.lock().unwrap().get(tool) {
            Some(message) => Err(BackendError::failed(tool, message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ToolBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn attaches_terminal(&self) -> bool {
        self.attaches_terminal
    }

    async fn is_installed(&self, tool: &str) -> bool {
        self.record(BackendCall::Probe(tool.to_string()));
        self.all_installed || self.installed.lock().unwrap().contains(tool)
    }

    async fn run(&self, tool: &str) -> Result<(), BackendError> {
        self.record(BackendCall::Run(tool.to_string()));
        Self::scripted(&self.run_failures, tool)
    }

    async fn install(&self, tool: &str) -> Result<(), BackendError> {
        self.record(BackendCall::Install(tool.to_string()));
        Self::scripted(&self.install_failures, tool)
    }

    async fn update(&self, tool: &str) -> Result<(), BackendError> {
        self.record(BackendCall::Update(tool.to_string()));
        Self::scripted(&self.update_failures, tool)
    }
}

// =============================================================================
// Scripted Console
// =============================================================================

/// A prompt shown by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRecord {
    pub prompt: String,
    pub options: Vec<String>,
}

/// Everything written to a [`ScriptedConsole`], in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Clear,
    Text(String),
    Prompt(PromptRecord),
    Acknowledge(String),
}

/// Console that answers prompts from a script and records all output.
///
/// Text is stored with ANSI codes stripped. Once the script runs out,
/// `choose` and `acknowledge` return an error.
#[derive(Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    output: Vec<Output>,
    bars: Vec<ProgressBar>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn output(&self) -> &[Output] {
        &self.output
    }

    /// All printed text joined by newlines
    pub fn text(&self) -> String {
        self.output
            .iter()
            .filter_map(|o| match o {
                Output::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn prompts(&self) -> Vec<&PromptRecord> {
        self.output
            .iter()
            .filter_map(|o| match o {
                Output::Prompt(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// Unanswered script entries
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Progress bars and spinners handed out, in creation order
    pub fn bars(&self) -> &[ProgressBar] {
        &self.bars
    }

    fn next_answer(&mut self) -> Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("scripted console ran out of answers"))
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> Result<()> {
        self.output.push(Output::Clear);
        Ok(())
    }

    fn print(&mut self, text: &str) {
        self.output
            .push(Output::Text(console::strip_ansi_codes(text).into_owned()));
    }

    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<String> {
        self.output.push(Output::Prompt(PromptRecord {
            prompt: prompt.to_string(),
            options: options.to_vec(),
        }));
        self.next_answer()
    }

    fn acknowledge(&mut self, prompt: &str) -> Result<()> {
        self.output.push(Output::Acknowledge(prompt.to_string()));
        self.next_answer().map(|_| ())
    }

    fn spinner(&mut self, message: &str) -> ProgressBar {
        let pb = ProgressBar::hidden();
        pb.set_message(message.to_string());
        self.bars.push(pb.clone());
        pb
    }

    fn progress_bar(&mut self, total: u64, message: &str) -> ProgressBar {
        let pb = ProgressBar::hidden();
        pb.set_length(total);
        pb.set_message(message.to_string());
        self.bars.push(pb.clone());
        pb
    }
}
