//! Word extraction shared by ingestion and queries.

/// Split text into lowercase, whitespace-delimited words.
///
/// Runs of whitespace count as a single separator and no empty words are
/// produced, so blank or whitespace-only text yields nothing.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}
