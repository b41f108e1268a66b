/// Sorts candidates byte-wise and joins them one per line.
///
/// Leading newlines are trimmed, so an empty candidate (e.g. the piece after
/// git's final newline) does not open the output with a blank line.
pub fn format_candidates(mut candidates: Vec<String>) -> String {
    candidates.sort();
    candidates.join("\n").trim_start_matches('\n').to_string()
}
