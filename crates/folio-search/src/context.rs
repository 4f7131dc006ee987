//! Context extraction — windowed snippet around a hit line.

/// Builds the context snippet for a hit at `index`: up to `radius` lines on
/// each side, newline-joined, with the hit line wrapped in `>>> … <<<` so the
/// client can render it distinctly. Windows near the document edges shrink
/// instead of padding.
pub fn context_snippet(lines: &[String], index: usize, radius: usize) -> String {
    if lines.is_empty() || index >= lines.len() {
        return String::new();
    }
    let start = index.saturating_sub(radius);
    let end = (index + radius).min(lines.len() - 1);

    let mut parts = Vec::with_capacity(end - start + 1);
    for (i, line) in lines.iter().enumerate().take(end + 1).skip(start) {
        if i == index {
            parts.push(format!(">>> {line} <<<"));
        } else {
            parts.push(line.clone());
        }
    }
    parts.join("\n")
}
