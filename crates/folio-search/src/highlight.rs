//! Highlighter — wraps matched substrings in markup for client rendering.
//!
//! Purely presentational; applied independently from scoring.

use regex::Regex;

/// Wraps every case-insensitive occurrence of the query in `<mark>` tags,
/// preserving the original casing of the matched text. Build once per search.
pub struct Highlighter {
    re: Option<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        let re = if query.trim().is_empty() {
            None
        } else {
            Regex::new(&format!("(?i){}", regex::escape(query))).ok()
        };
        Self { re }
    }

    pub fn highlight(&self, line: &str) -> String {
        match &self.re {
            Some(re) => re.replace_all(line, "<mark>$0</mark>").into_owned(),
            None => line.to_string(),
        }
    }
}
