//! Pure parsing of `server.properties`.

/// Value of the first `online-mode=` line, or `None` when there is none.
pub fn parse_online_mode(content: &str) -> Option<bool> {
    let value = content.lines().map(str::trim).find_map(|line| line.strip_prefix("online-mode="))?;
    let value = value.split('=').next().unwrap_or_default().trim();
    Some(value.eq_ignore_ascii_case("true"))
}
