// src/core/sanitize.rs

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

/// The site renders unknown cells as `--`.
pub fn placeholder_to_none(s: &str) -> Option<String> {
    let t = s.trim();
    if t == "--" || t.is_empty() { None } else { Some(t.to_string()) }
}

/// `32%` → `32`
pub fn strip_percent(s: &str) -> String {
    s.replace('%', "").trim().to_string()
}

/// `Attendance: 38,512` → `38512`
pub fn attendance_digits(s: &str) -> String {
    s.replace("Attendance:", "").replace(',', "").trim().to_string()
}

/// `2V` → `2`: drop the result marker and anything after it.
pub fn score_before_marker(s: &str) -> String {
    match s.find('V') {
        Some(i) => s[..i].trim().to_string(),
        None => s.trim().to_string(),
    }
}

/// `1.85 m` → `1.85`
pub fn strip_meters(s: &str) -> String {
    s.replace(" m", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders() {
        assert_eq!(placeholder_to_none("--"), None);
        assert_eq!(placeholder_to_none(" -- "), None);
        assert_eq!(placeholder_to_none("27"), Some(s!("27")));
    }

    #[test]
    fn numeric_cleanup() {
        assert_eq!(strip_percent("58.3%"), "58.3");
        assert_eq!(attendance_digits("Attendance: 38,512"), "38512");
        assert_eq!(score_before_marker("2V"), "2");
        assert_eq!(score_before_marker("0"), "0");
        assert_eq!(strip_meters("1.85 m"), "1.85");
    }
}
