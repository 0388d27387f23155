//! Line routing for IGC records
//!
//! Only the leading record letter and a minimum length are inspected.

/// Shortest line that can hold a complete B record
pub const MIN_POSITION_FIX_LEN: usize = 35;
/// Shortest line that can hold a K record time field
pub const MIN_SENSOR_FIX_LEN: usize = 7;
/// Shortest `I`/`J` line that can hold the field count
pub const MIN_EXTENSION_DEF_LEN: usize = 3;

/// Record kind of one IGC line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    /// `I` record, declares B-record extensions
    ExtensionDefB,
    /// `J` record, declares K-record extensions
    ExtensionDefK,
    PositionFix,
    SensorFix,
    Ignored,
}

pub fn classify_line(line: &str) -> LineKind {
    let len = line.len();
    match line.as_bytes().first() {
        Some(b'H') => LineKind::Header,
        Some(b'I') if len >= MIN_EXTENSION_DEF_LEN => LineKind::ExtensionDefB,
        Some(b'J') if len >= MIN_EXTENSION_DEF_LEN => LineKind::ExtensionDefK,
        Some(b'B') if len >= MIN_POSITION_FIX_LEN => LineKind::PositionFix,
        Some(b'K') if len >= MIN_SENSOR_FIX_LEN => LineKind::SensorFix,
        _ => LineKind::Ignored,
    }
}

/// Split text on universal newline boundaries (`\r\n`, `\r` or `\n`).
///
/// A trailing line break does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headers_and_definitions() {
        assert_eq!(classify_line("HFDTE010180"), LineKind::Header);
        assert_eq!(classify_line("H"), LineKind::Header);
        assert_eq!(classify_line("I013638FXA"), LineKind::ExtensionDefB);
        assert_eq!(classify_line("I00"), LineKind::ExtensionDefB);
        assert_eq!(classify_line("I0"), LineKind::Ignored);
        assert_eq!(classify_line("J010812HDT"), LineKind::ExtensionDefK);
    }

    #[test]
    fn test_classify_fixes() {
        let b = "B1200005213123N00019456WA0010000150";
        assert_eq!(b.len(), 35);
        assert_eq!(classify_line(b), LineKind::PositionFix);
        assert_eq!(classify_line(&b[..34]), LineKind::Ignored);
        assert_eq!(classify_line("K120000"), LineKind::SensorFix);
        assert_eq!(classify_line("K12000"), LineKind::Ignored);
    }

    #[test]
    fn test_classify_ignored() {
        assert_eq!(classify_line(""), LineKind::Ignored);
        assert_eq!(classify_line("AXXXABC"), LineKind::Ignored);
        assert_eq!(classify_line("GREJNGJERJKNJKRE31895478537H43982FJN9248F942389T433T"), LineKind::Ignored);
        assert_eq!(classify_line("h lowercase"), LineKind::Ignored);
    }

    #[test]
    fn test_split_lines_universal_newlines() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\r\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }
}
