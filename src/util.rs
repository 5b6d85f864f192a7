use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:19|20)\d{2}").unwrap())
}

/// First 19xx/20xx year in a free-text period, if any.
/// Period strings are user-authored, so anything unparsable is just None.
pub fn first_year(text: &str) -> Option<i32> {
    year_re()
        .find(text)
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

/// Identity token set for a template key: the full key plus its
/// underscore/hyphen-delimited parts, case-folded.
pub fn template_tokens(key: &str) -> HashSet<String> {
    let lowered = key.to_lowercase();
    let mut tokens: HashSet<String> = lowered
        .replace('-', "_")
        .split('_')
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect();
    tokens.insert(lowered);
    tokens
}

/// Capitalize the first letter of each whitespace-separated word.
/// Used for contact channel labels ("email" -> "Email").
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
