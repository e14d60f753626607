//! URL-shaped input check run before anything is sent to the backend.

use std::sync::OnceLock;

use regex::Regex;

/// scheme, optional `www.`, a dotted host ending in a 2-6 letter tld,
/// then an optional tail from a restricted character set.
///
/// only the start is anchored: anything after the first valid url-shaped
/// prefix is accepted as-is.
const URL_PATTERN: &str =
    r"^(https?://)(www\.)?[a-zA-Z0-9@:%._+~#?&/=]{2,256}\.[a-z]{2,6}(?-u:\b)[-a-zA-Z0-9@:%._+~#?&/=]*";

fn url_regex() -> &'static Regex {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    URL_RE.get_or_init(|| Regex::new(URL_PATTERN).expect("url pattern must compile"))
}

/// Whether `input` looks like an http(s) url. Callers trim first.
pub fn is_valid_url(input: &str) -> bool {
    url_regex().is_match(input)
}
