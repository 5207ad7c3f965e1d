/// Fallback when no line looks like a name.
pub const UNKNOWN_NAME: &str = "Unknown";

const MAX_NAME_TOKENS: usize = 4;

/// First line of the document that reads like a proper name, in title case.
///
/// A line qualifies when it has 1–4 tokens, no digits, at least one alphabetic token, and every
/// alphabetic token starts with an uppercase letter.
pub fn extract_name(raw_text: &str) -> String {
    raw_text
        .lines()
        .map(str::trim)
        .find(|line| looks_like_name(line))
        .map(title_case)
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

fn looks_like_name(line: &str) -> bool {
    if line.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > MAX_NAME_TOKENS {
        return false;
    }

    let mut alphabetic = tokens
        .iter()
        .filter(|t| t.chars().any(char::is_alphabetic))
        .peekable();
    alphabetic.peek().is_some()
        && alphabetic.all(|t| t.chars().next().is_some_and(char::is_uppercase))
}

fn title_case(line: &str) -> String {
    line.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
