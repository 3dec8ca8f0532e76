//! Screen lifecycle and timing.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Where one screen lifetime is in its page stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenPhase {
    /// Nothing written yet.
    Start,
    ShellSent,
    /// The last section written, by name.
    SectionSent(String),
    /// Closing written and the body closed.
    Completion,
}

const SHELL_SENT: &str = "shell_sent";
const FETCH_PREFIX: &str = "fetch_";
const FETCH_SUFFIX: &str = "_done";

/// Named instants within one host request, relative to its start.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record `name` now. A repeated name keeps the latest instant.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    pub fn mark_section_start(&mut self, section: &str) {
        self.mark(&format!("section_{}_start", section));
    }

    pub fn mark_section_sent(&mut self, section: &str) {
        self.mark(&format!("section_{}_sent", section));
    }

    /// Record that the read for `endpoint` resolved with a value.
    pub fn mark_fetch_done(&mut self, endpoint: &str) {
        self.mark(&format!("{}{}{}", FETCH_PREFIX, endpoint, FETCH_SUFFIX));
    }

    pub fn has_mark(&self, name: &str) -> bool {
        self.marks.contains_key(name)
    }

    pub fn since_start(&self, name: &str) -> Option<Duration> {
        self.marks.get(name).map(|t| t.duration_since(self.start))
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn time_to_shell(&self) -> Option<Duration> {
        self.since_start(SHELL_SENT)
    }

    /// Resolved reads as `(endpoint, time since start)`, earliest first.
    pub fn fetch_timings(&self) -> Vec<(String, Duration)> {
        let mut fetches: Vec<(String, Duration)> = self
            .marks
            .iter()
            .filter_map(|(name, at)| {
                let endpoint = name.strip_prefix(FETCH_PREFIX)?.strip_suffix(FETCH_SUFFIX)?;
                Some((endpoint.to_string(), at.duration_since(self.start)))
            })
            .collect();
        fetches.sort_by_key(|(_, at)| *at);
        fetches
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}
