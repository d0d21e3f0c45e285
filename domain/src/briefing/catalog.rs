//! Built-in sports catalog offered for selection.

/// Sports offered for selection when the configuration does not override them.
pub const DEFAULT_TOPICS: [&str; 10] = [
    "Football",
    "Basketball",
    "Tennis",
    "Formula 1",
    "Baseball",
    "Ice Hockey",
    "Golf",
    "Cricket",
    "Rugby",
    "MMA",
];

/// The default catalog as owned strings
pub fn default_topics() -> Vec<String> {
    DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect()
}

/// Find a catalog entry by case-insensitive name or 1-based position.
pub fn lookup<'a>(catalog: &'a [String], key: &str) -> Option<&'a str> {
    let key = key.trim();
    if let Ok(index) = key.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| catalog.get(i))
            .map(String::as_str);
    }
    catalog
        .iter()
        .find(|t| t.eq_ignore_ascii_case(key))
        .map(String::as_str)
}
