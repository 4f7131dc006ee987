//! Voice command parsing — a regex table over reader transcripts.
//!
//! Unrecognized transcripts parse to `None`, mirroring the lenient
//! blank-query behavior of the search pipeline.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A parsed reader voice command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ReadingCommand {
    Search { query: String },
    GoToPage { page: usize },
    NextPage,
    PreviousPage,
    ReadAloud,
    Pause,
}

/// Parses transcripts like "search for whales" or "go to page 12".
/// Build once; the patterns are compiled up front.
pub struct CommandParser {
    page_re: Regex,
    next_re: Regex,
    prev_re: Regex,
    read_re: Regex,
    pause_re: Regex,
    search_re: Regex,
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            page_re: Regex::new(r"(?i)^\s*(?:go\s+to\s+|turn\s+to\s+|open\s+)?page\s+(\d+)\s*$")
                .expect("hardcoded pattern"),
            next_re: Regex::new(r"(?i)^\s*(?:next(?:\s+page)?|forward)\s*$")
                .expect("hardcoded pattern"),
            prev_re: Regex::new(r"(?i)^\s*(?:previous(?:\s+page)?|go\s+back|back)\s*$")
                .expect("hardcoded pattern"),
            read_re: Regex::new(r"(?i)^\s*read(?:\s+(?:aloud|this|it))?\s*$")
                .expect("hardcoded pattern"),
            pause_re: Regex::new(r"(?i)^\s*(?:pause|stop)(?:\s+reading)?\s*$")
                .expect("hardcoded pattern"),
            search_re: Regex::new(r"(?i)^\s*(?:search|find|look)(?:\s+for)?\s+(.+?)\s*$")
                .expect("hardcoded pattern"),
        }
    }

    /// Map a transcript to a command; `None` when nothing matches.
    pub fn parse(&self, transcript: &str) -> Option<ReadingCommand> {
        let t = transcript.trim();
        if t.is_empty() {
            return None;
        }

        if let Some(caps) = self.page_re.captures(t) {
            let page: usize = caps[1].parse().ok()?;
            if page >= 1 {
                return Some(ReadingCommand::GoToPage { page });
            }
            return None;
        }
        if self.next_re.is_match(t) {
            return Some(ReadingCommand::NextPage);
        }
        if self.prev_re.is_match(t) {
            return Some(ReadingCommand::PreviousPage);
        }
        if self.read_re.is_match(t) {
            return Some(ReadingCommand::ReadAloud);
        }
        if self.pause_re.is_match(t) {
            return Some(ReadingCommand::Pause);
        }
        if let Some(caps) = self.search_re.captures(t) {
            return Some(ReadingCommand::Search {
                query: caps[1].to_string(),
            });
        }
        None
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
