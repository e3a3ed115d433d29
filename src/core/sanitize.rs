// src/core/sanitize.rs

/// Collapse runs of whitespace (incl. &nbsp; once decoded) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Display name → URL path segment: "Premier League" → "Premier-League".
pub fn url_segment(name: &str) -> String {
    name.replace(' ', "-")
}

/// Display name → lowercase file stem: "Serie A" → "serie_a".
pub fn file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch.to_ascii_lowercase()); last_us = false; }
        else if ch.is_whitespace() || ch == '-' || ch == '_' {
            if !last_us { out.push('_'); last_us = true; }
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("table") } else { out }
}

/// Lenient numeric read of a table cell: "1,234" → 1234, "+12" → 12, "" → None.
pub fn parse_number(cell: &str) -> Option<f64> {
    let t = cell.trim();
    if t.is_empty() { return None; }
    let t = t.strip_prefix('+').unwrap_or(t);
    let cleaned: String = t.chars().filter(|&c| c != ',').collect();
    // fbref renders minus as U+2212 on some pages
    let cleaned = cleaned.replace('\u{2212}', "-");
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_is_collapsed() {
        assert_eq!(normalize_ws("  Manchester\u{a0}\n City "), "Manchester City");
    }

    #[test]
    fn names_become_url_segments_and_stems() {
        assert_eq!(url_segment("Premier League"), "Premier-League");
        assert_eq!(url_segment("Ligue 1"), "Ligue-1");
        assert_eq!(file_stem("Serie A"), "serie_a");
        assert_eq!(file_stem("  "), "table");
    }

    #[test]
    fn numbers_tolerate_site_formatting() {
        assert_eq!(parse_number("38"), Some(38.0));
        assert_eq!(parse_number("+12"), Some(12.0));
        assert_eq!(parse_number("\u{2212}7"), Some(-7.0));
        assert_eq!(parse_number("-7"), Some(-7.0));
        assert_eq!(parse_number("60,123"), Some(60123.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("Arsenal"), None);
    }
}
