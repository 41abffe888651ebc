/// Translate a provider field name (`PascalCase`, with upper-case abbreviations)
/// into the crate's `snake_case` attribute name.
///
/// A separator goes between an upper-case run and a following upper+lower pair
/// (`CheckURLValue` → `Check_URL_Value`), and between a lower-case letter or digit and
/// an upper-case letter. The result is lower-cased.
pub fn camel_to_snake(name: &str) -> String {
    let chars = name.chars().collect::<Vec<_>>();

    let mut split_runs = Vec::<char>::with_capacity(chars.len() + 4);
    for (idx, &ch) in chars.iter().enumerate() {
        let closes_run = idx > 0
            && chars[idx - 1].is_ascii_uppercase()
            && ch.is_ascii_uppercase()
            && chars.get(idx + 1).is_some_and(char::is_ascii_lowercase);
        if closes_run {
            split_runs.push('_');
        }
        split_runs.push(ch);
    }

    let mut out = String::with_capacity(split_runs.len() + 4);
    for (idx, &ch) in split_runs.iter().enumerate() {
        let after_lower = idx > 0
            && (split_runs[idx - 1].is_ascii_lowercase() || split_runs[idx - 1].is_ascii_digit());
        if after_lower && ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(ch);
    }

    out.to_lowercase()
}
