use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const QUALIFIER_SUFFIXES: &[&str] = &["_maid", "_nationality"];

/// Canonical form for a single categorical token.
///
/// Strips invisible characters, lowercases, unifies spaces and hyphens into
/// underscores, then removes trailing qualifiers such as `_maid`.
pub fn normalize_token(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let mut token = cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace([' ', '-'], "_");

    while let Some(rest) = QUALIFIER_SUFFIXES
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
    {
        token = rest.trim_end_matches('_').to_string();
    }

    token
}

/// True for the blank and "unspecified" sentinels that uploaded sheets use for holes.
pub fn is_unspecified(token: &str) -> bool {
    matches!(
        token,
        "" | "unspecified" | "not_specified" | "none" | "nan" | "n/a" | "na"
    )
}

/// Normalized set of tokens parsed from a `+`-joined cell such as `lebanese+khaleeji`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenSet(BTreeSet<String>);

impl TokenSet {
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .split(['+', ',', ';'])
            .map(normalize_token)
            .filter(|token| !is_unspecified(token))
            .collect();
        Self(tokens)
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            tokens
                .into_iter()
                .map(|token| normalize_token(token.as_ref()))
                .filter(|token| !is_unspecified(token))
                .collect(),
        )
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn overlap(&self, other: &TokenSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    pub fn joined(&self) -> String {
        self.0.iter().cloned().collect::<Vec<_>>().join("+")
    }
}
