/// Normalizes a free-text account name into a lowercase, hyphen-delimited token.
///
/// Spaces and underscores become hyphens, anything outside `[a-z0-9-]` is dropped,
/// hyphen runs collapse to one and leading/trailing hyphens are removed.
pub fn sanitize_account_name(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase().replace([' ', '_'], "-");

    let mut sanitized = String::with_capacity(normalized.len());
    let mut prev_was_dash = false;

    for ch in normalized.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            sanitized.push(ch);
            prev_was_dash = false;
        } else if ch == '-' && !prev_was_dash {
            sanitized.push(ch);
            prev_was_dash = true;
        }
    }

    sanitized.trim_matches('-').to_string()
}
