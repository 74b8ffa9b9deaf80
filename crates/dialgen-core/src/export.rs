//! Export file naming and content

use crate::generator::ResultSet;

/// Replace characters that are unsafe in a file name with `_`.
///
/// Path separators, characters Windows rejects, control characters and
/// whitespace all become `_`. An empty result falls back to `"numbers"`.
pub fn sanitize_file_component(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() || c.is_whitespace() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() {
        "numbers".to_string()
    } else {
        cleaned
    }
}

/// Suggested file name: `{country}_{count}_{unix-millis}.txt`.
pub fn suggested_file_name(country_name: &str, count: usize, generated_at_millis: i64) -> String {
    format!(
        "{}_{}_{}.txt",
        sanitize_file_component(country_name),
        count,
        generated_at_millis
    )
}

/// File name for a concrete result set.
pub fn file_name_for(results: &ResultSet) -> String {
    suggested_file_name(
        &results.country_name,
        results.len(),
        results.generated_at.timestamp_millis(),
    )
}

/// Text written to the export file: one number per line, no trailing newline.
pub fn export_content(results: &ResultSet) -> String {
    results.join_lines()
}
