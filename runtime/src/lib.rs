//! Command line front end for the writing-prompt agent.

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use agent::{ParsedRequest, PipelineObserver};
use clap::Parser;
use llm::ClientConfig;
use log::warn;
use memory::Memory;

/// Requests run when none are given on the command line.
pub const SAMPLE_REQUESTS: [&str; 3] = [
    "Give me a funny prompt about vegan baking for Instagram",
    "Serious tech prompt about AI ethics for professionals",
    "Travel writing idea about hidden gems in Europe",
];

const RULE: &str = "==================================================";

#[derive(Parser, Debug)]
#[command(author, version, about = "Turn free-text writing requests into writing prompts")]
pub struct Cli {
    /// Writing requests, processed in order
    pub requests: Vec<String>,

    /// Run the built-in sample requests first
    #[arg(long)]
    pub demo: bool,

    /// Chat model to use (overrides OPENAI_MODEL)
    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of the completion API (overrides OPENAI_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (overrides OPENAI_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print only the final prompts
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    /// Requests to process: the samples when asked for or when nothing was
    /// given, followed by any explicit requests.
    pub fn inputs(&self) -> Vec<String> {
        let mut inputs = Vec::new();
        if self.demo || self.requests.is_empty() {
            inputs.extend(SAMPLE_REQUESTS.iter().map(|s| s.to_string()));
        }
        inputs.extend(self.requests.iter().cloned());
        inputs
    }

    /// Let command line flags override environment settings.
    pub fn apply(&self, config: &mut ClientConfig) {
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            config.timeout = Some(Duration::from_secs(secs));
        }
    }
}

/// Prints each pipeline stage for a human to follow along.
///
/// Observer hooks cannot fail, so the first write error is kept and later
/// writes are skipped. Callers collect it with [`ConsoleObserver::take_error`].
pub struct ConsoleObserver<W> {
    out: W,
    verbose: bool,
    error: Option<io::Error>,
}

impl<W: Write + Send> ConsoleObserver<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self {
            out,
            verbose,
            error: None,
        }
    }

    /// Announce a new request.
    pub fn begin(&mut self, input: &str) {
        if self.verbose {
            self.emit(format_args!("\n{RULE}\nProcessing: '{input}'\n"));
        }
    }

    /// Close off a request.
    pub fn end(&mut self) {
        if self.verbose {
            self.emit(format_args!("\n{RULE}\n\n"));
        }
        if self.error.is_none() {
            if let Err(e) = self.out.flush() {
                self.fail(e);
            }
        }
    }

    /// The first write error seen since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn section(&mut self, title: &str, body: &str) {
        self.emit(format_args!("\n[{title}]\n{body}\n"));
    }

    fn emit(&mut self, text: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_fmt(text) {
            self.fail(e);
        }
    }

    fn fail(&mut self, e: io::Error) {
        warn!("console write failed: {e}");
        self.error = Some(e);
    }
}

impl<W: Write + Send> PipelineObserver for ConsoleObserver<W> {
    fn input_parsed(&mut self, parsed: &ParsedRequest) {
        if !self.verbose {
            return;
        }
        let body = serde_json::to_string_pretty(parsed).unwrap_or_else(|e| e.to_string());
        self.section("Input Parsed", &body);
    }

    fn memory_updated(&mut self, memory: &Memory) {
        if !self.verbose {
            return;
        }
        let body = serde_json::to_string_pretty(memory).unwrap_or_else(|e| e.to_string());
        self.section("Memory State", &body);
    }

    fn plan_created(&mut self, plan: &str) {
        if self.verbose {
            self.section("Generation Plan", plan);
        }
    }

    fn output_generated(&mut self, output: &str) {
        if self.verbose {
            self.section("Final Output", output);
        } else {
            self.emit(format_args!("{output}\n\n"));
        }
    }
}
