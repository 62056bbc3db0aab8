/// Validates a player key used as a file name inside a data directory.
///
/// Checks:
/// - Non-empty
/// - No path separators (/, \)
/// - Not "." or ".."
/// - Characters are alphanumeric, '-', '_', or '.'
pub fn validate_player_key(key: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    if key.contains('/') || key.contains('\\') {
        return false;
    }
    if key == "." || key == ".." {
        return false;
    }
    key.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}
