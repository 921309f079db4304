//! Formatting helpers shared by the views.

/// Formats a `0.0..=1.0` confidence as a percentage with one decimal, e.g.
/// `0.73` becomes `"73.0%"`. Values outside the range are printed as-is.
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// CSS width for a confidence bar; same text as the label but clamped to
/// `0%..=100%` so a bad value cannot overflow the track.
pub fn confidence_bar_width(confidence: f64) -> String {
    confidence_percent(confidence.clamp(0.0, 1.0))
}

/// Upper-cases the first letter of every word; `_` and `-` count as spaces.
/// `"folk_song"` becomes `"Folk Song"`.
pub fn title_case(input: &str) -> String {
    input
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Cuts `input` to at most `max` characters, appending `…` when shortened.
pub fn truncate_chars(input: &str, max: usize) -> String {
    match input.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &input[..idx]),
        None => input.to_string(),
    }
}

/// Human readable byte size: `512 B`, `1.5 KB`, `2.0 MB`.
pub fn format_file_size(bytes: f64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", value as u64)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_label_has_one_decimal() {
        assert_eq!(confidence_percent(0.73), "73.0%");
        assert_eq!(confidence_percent(0.0), "0.0%");
        assert_eq!(confidence_percent(1.0), "100.0%");
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(confidence_bar_width(1.7), "100.0%");
        assert_eq!(confidence_bar_width(-0.2), "0.0%");
        assert_eq!(confidence_bar_width(0.73), "73.0%");
    }

    #[test]
    fn title_case_normalizes_wire_values() {
        assert_eq!(title_case("interactive"), "Interactive");
        assert_eq!(title_case("QUIZ"), "Quiz");
        assert_eq!(title_case("folk_song"), "Folk Song");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("संस्कृत", 3), "संस…");
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(512.0), "512 B");
        assert_eq!(format_file_size(1536.0), "1.5 KB");
        assert_eq!(format_file_size(2.0 * 1024.0 * 1024.0), "2.0 MB");
    }
}
