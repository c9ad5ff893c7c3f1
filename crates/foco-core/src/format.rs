//! Text formatting helpers shared by the UI and CLI output

/// Format a second count as a zero-padded `MM:SS` clock.
///
/// Minutes are not wrapped into hours: 120 minutes renders as `120:00`.
pub fn clock(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Truncate a string to `max` characters, ending with an ellipsis when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}
