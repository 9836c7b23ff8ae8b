use wildmatch::WildMatch;

/// Returns true when the media range `range` (possibly containing `*`/`?`
/// wildcards, e.g. `text/*`) accepts the candidate type `candidate`.
///
/// Comparison is ASCII-case-insensitive but otherwise literal: nothing is
/// trimmed, so a range that kept a stray space from its header token will
/// not match anything. A bare `*` is not a media range and never matches a
/// full `type/subtype` candidate.
pub fn range_matches(range: &str, candidate: &str) -> bool {
    if range.is_empty() || candidate.is_empty() {
        return false;
    }

    if range.eq_ignore_ascii_case(candidate) {
        return true;
    }

    // Globbing only makes sense between two type/subtype strings.
    if !range.contains('/') || !candidate.contains('/') {
        return false;
    }

    if range.contains('*') || range.contains('?') {
        let range = range.to_ascii_lowercase();
        let candidate = candidate.to_ascii_lowercase();
        return WildMatch::new(&range).matches(&candidate);
    }

    false
}
