use std::fmt;

/// Substrings that select lines for the confirmation echo.
pub const CONFIRMATION_KEYS: [&str; 2] = ["Version:", "WP_SMART_SLUG_VERSION"];

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationLine {
    pub number: usize,
    pub content: String,
}

impl fmt::Display for ConfirmationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.number, self.content)
    }
}

/// Splits on `\n`, `\r\n` and a lone `\r`, so line numbers stay right for
/// old Mac line endings.
fn universal_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Collects every line containing one of `keys`, numbered from 1 and trimmed.
pub fn confirmation_lines(content: &str, keys: &[&str]) -> Vec<ConfirmationLine> {
    universal_lines(content)
        .enumerate()
        .filter(|(_, line)| keys.iter().any(|key| line.contains(key)))
        .map(|(index, line)| ConfirmationLine {
            number: index + 1,
            content: line.trim().to_string(),
        })
        .collect()
}
