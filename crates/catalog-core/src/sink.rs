//! Shell-first page sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};

use crate::error::ScreenError;
use crate::lifecycle::{ScreenPhase, TimingContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    Initial,
    ShellSent,
    Completed,
}

/// Streams one page: the shell first, then named sections, then the closing.
///
/// Generic over any `Sink<Vec<u8>>`, which includes Spin's `OutgoingBody`.
pub struct PageSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> PageSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    /// Send the shell HTML. Must be called before any section.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), ScreenError> {
        match self.state {
            SinkState::Initial => {}
            SinkState::ShellSent => return Err(ScreenError::ShellAlreadySent),
            SinkState::Completed => return Err(ScreenError::Completed),
        }

        self.timing.mark("shell_start");
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section after the shell.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), ScreenError> {
        self.ensure_open()?;

        self.timing.mark_section_start(name);
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send the closing HTML and complete the page.
    pub async fn finish(&mut self, closing: &str) -> Result<(), ScreenError> {
        self.ensure_open()?;

        self.write(closing.as_bytes().to_vec()).await?;
        self.inner
            .close()
            .await
            .map_err(|e| ScreenError::Stream(e.to_string()))?;
        self.state = SinkState::Completed;
        self.timing.mark("complete");

        Ok(())
    }

    fn ensure_open(&self) -> Result<(), ScreenError> {
        match self.state {
            SinkState::Initial => Err(ScreenError::ShellNotSent),
            SinkState::ShellSent => Ok(()),
            SinkState::Completed => Err(ScreenError::Completed),
        }
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), ScreenError> {
        let len = bytes.len();
        self.inner
            .send(bytes)
            .await
            .map_err(|e| ScreenError::Stream(e.to_string()))?;
        self.bytes_sent += len;
        Ok(())
    }

    /// Names of the sections sent so far, in order.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Total bytes written.
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ScreenPhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => ScreenPhase::Start,
            (SinkState::ShellSent, None) => ScreenPhase::ShellSent,
            (SinkState::ShellSent, Some(last)) => ScreenPhase::SectionSent(last.clone()),
            (SinkState::Completed, _) => ScreenPhase::Completion,
        }
    }

    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    pub fn timing_mut(&mut self) -> &mut TimingContext {
        &mut self.timing
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}
