//! Line matcher — case-insensitive substring scan producing raw hits.

/// 0-based indices of lines containing the query, in document order.
/// A line contributes at most one hit regardless of occurrence count.
/// Blank or whitespace-only queries yield no hits.
pub fn matching_lines(lines: &[String], query: &str) -> Vec<usize> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// Non-overlapping occurrences of `query` within `line`, case-insensitive.
/// Feeds the frequency bonus in the relevance score.
pub fn occurrence_count(line: &str, query: &str) -> usize {
    if query.trim().is_empty() {
        return 0;
    }
    line.to_lowercase().matches(&query.to_lowercase()).count()
}
