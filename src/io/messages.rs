use std::path::PathBuf;

use tracing::debug;

use crate::error::{ParadeError, Result};
use crate::parse::duty_list::DUTY_LIST_MARKER;

/// Marker identifying a previously-sent parade state in chat history.
pub const REPORT_MARKER: &str = "Parade State for";

/// One message retrieved from the chat history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
}

/// Source of recent chat messages. The transport gives no ordering or
/// completeness guarantee, so scans must read the whole returned window
/// before concluding no match exists.
pub trait MessageHistorySource {
    /// Returns up to `limit` recent messages, in no particular order.
    fn recent_messages(&self, limit: usize) -> Result<Vec<Message>>;
}

/// Destination for the rendered report. A failed send surfaces as
/// [`ParadeError::Transmission`]; retrying is the caller's decision.
pub trait MessageSink {
    fn send(&self, text: &str) -> Result<()>;
}

/// Finds the first duty-list announcement within the scan window, matching
/// the `/DI LIST` marker case-insensitively. No match is a valid outcome.
pub fn find_duty_list(
    source: &dyn MessageHistorySource,
    limit: usize,
) -> Result<Option<String>> {
    let messages = source.recent_messages(limit)?;
    let found = messages
        .into_iter()
        .find(|message| message.text.to_uppercase().contains(DUTY_LIST_MARKER));
    if found.is_none() {
        debug!(limit, "no duty list found in scan window");
    }
    Ok(found.map(|message| message.text))
}

/// Finds the most recently scanned parade state message, if any.
pub fn find_previous_report(
    source: &dyn MessageHistorySource,
    limit: usize,
) -> Result<Option<String>> {
    let messages = source.recent_messages(limit)?;
    Ok(messages
        .into_iter()
        .find(|message| message.text.contains(REPORT_MARKER))
        .map(|message| message.text))
}

/// History backed by an in-memory list, used by the CLI (which loads the
/// duty-list announcement from a file) and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticHistory {
    messages: Vec<Message>,
}

impl StaticHistory {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: texts
                .into_iter()
                .map(|text| Message { text: text.into() })
                .collect(),
        }
    }
}

impl MessageHistorySource for StaticHistory {
    fn recent_messages(&self, limit: usize) -> Result<Vec<Message>> {
        Ok(self.messages.iter().take(limit).cloned().collect())
    }
}

/// Sink that writes the report to a local file, standing in for the real
/// transport at the same interface boundary.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MessageSink for FileSink {
    fn send(&self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text).map_err(|error| {
            ParadeError::Transmission(format!("{}: {error}", self.path.display()))
        })
    }
}
