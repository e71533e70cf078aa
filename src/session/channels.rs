//! Channel list normalization.

/// Lowercase, strip a leading `#`, drop blanks and duplicates, and sort.
pub fn deduplicate_channels<I, S>(channels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = channels
        .into_iter()
        .map(|c| c.as_ref().trim().trim_start_matches('#').to_lowercase())
        .filter(|c| !c.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}
