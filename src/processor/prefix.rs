//! Longest-common-prefix over completion candidates.

/// Return the longest string every candidate starts with.
///
/// Comparison is exact, char by char; no case folding. An empty slice
/// yields the empty string, though callers guard that case before asking.
/// Runs in O(total input length).
pub fn common_prefix(candidates: &[String]) -> String {
    let Some(first) = candidates.first() else {
        return String::new();
    };
    let mut end = first.len();
    for other in &candidates[1..] {
        let mut matched = 0;
        for ((i, a), b) in first[..end].char_indices().zip(other.chars()) {
            if a != b {
                break;
            }
            matched = i + a.len_utf8();
        }
        end = matched;
        if end == 0 {
            break;
        }
    }
    first[..end].to_string()
}
