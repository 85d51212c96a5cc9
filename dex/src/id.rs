/// Reduce a display name to its lookup id ("Mr. Mime" -> "mrmime")
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
