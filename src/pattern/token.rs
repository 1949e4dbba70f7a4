//! Tokenization of raw command strings.

/// Split a raw command string into normalized tokens.
///
/// Tokens are lower-cased and whitespace-delimited. Quoting and escaping
/// are not supported; empty or whitespace-only input yields no tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}
