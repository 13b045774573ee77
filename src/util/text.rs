use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of the truncation ellipsis.
const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Calculates the display width of a string in terminal columns,
/// accounting for CJK characters and emoji (2 columns) and zero-width
/// combining marks.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fits a string into `max_width` terminal columns, appending "..." when
/// text had to be cut. Returns `Cow::Borrowed` when the string already
/// fits. For widths of 3 columns or fewer there is no room for the
/// ellipsis, so as many characters as fit are returned bare.
pub fn fit_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let budget = if max_width > ELLIPSIS_WIDTH {
        max_width - ELLIPSIS_WIDTH
    } else {
        max_width
    };

    let mut used = 0;
    let mut cut = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        cut = idx + c.len_utf8();
    }

    if max_width > ELLIPSIS_WIDTH {
        Cow::Owned(format!("{}{}", &s[..cut], ELLIPSIS))
    } else {
        Cow::Owned(s[..cut].to_string())
    }
}

/// Strips ASCII control characters and ANSI escape sequences from text
/// before it reaches the terminal. The feed is an external source; its
/// titles and descriptions must not be able to move the cursor or retitle
/// the window. Tab, newline, and carriage return are preserved.
pub fn sanitize(s: &str) -> Cow<'_, str> {
    let dirty = |b: u8| b == 0x1b || b == 0x7f || (b < 0x20 && b != 0x09 && b != 0x0a && b != 0x0d);

    if !s.bytes().any(dirty) {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == 0x1b {
            i += 1;
            match bytes.get(i) {
                // CSI: parameters then one final byte in 0x40..=0x7e
                Some(b'[') => {
                    i += 1;
                    while i < bytes.len() {
                        let c = bytes[i];
                        i += 1;
                        if (0x40..=0x7e).contains(&c) {
                            break;
                        }
                    }
                }
                // OSC: runs to BEL or ST
                Some(b']') => {
                    i += 1;
                    while i < bytes.len() {
                        if bytes[i] == 0x07 {
                            i += 1;
                            break;
                        }
                        if bytes[i] == 0x1b && bytes.get(i + 1) == Some(&b'\\') {
                            i += 2;
                            break;
                        }
                        i += 1;
                    }
                }
                _ => {}
            }
        } else if dirty(b) {
            i += 1;
        } else {
            let start = i;
            while i < bytes.len() && !dirty(bytes[i]) {
                i += 1;
            }
            // Control bytes are ASCII and cannot split a UTF-8 codepoint,
            // so this slice is always valid.
            out.push_str(&s[start..i]);
        }
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_no_truncation_borrows() {
        let result = fit_to_width("Short", 10);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Short");
    }

    #[test]
    fn test_fit_ascii_truncation() {
        assert_eq!(fit_to_width("Hello World", 8), "Hello...");
    }

    #[test]
    fn test_fit_cjk_truncation() {
        // CJK characters occupy two columns each
        assert_eq!(fit_to_width("你好世界", 7), "你好...");
        assert_eq!(fit_to_width("你好", 10), "你好");
    }

    #[test]
    fn test_fit_narrow_widths() {
        assert_eq!(fit_to_width("Test", 0), "");
        assert_eq!(fit_to_width("Testing", 2), "Te");
        assert_eq!(fit_to_width("Test", 4), "Test");
        assert_eq!(fit_to_width("Testing", 4), "T...");
    }

    #[test]
    fn test_sanitize_clean_text_borrows() {
        let input = "A perfectly ordinary title";
        let result = sanitize(input);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, input);
    }

    #[test]
    fn test_sanitize_strips_csi_and_osc() {
        assert_eq!(sanitize("\x1b[31mRed\x1b[0m"), "Red");
        assert_eq!(sanitize("\x1b]0;evil title\x07safe"), "safe");
        assert_eq!(sanitize("\x1b]0;evil\x1b\\safe"), "safe");
    }

    #[test]
    fn test_sanitize_strips_control_bytes_keeps_whitespace() {
        assert_eq!(sanitize("a\x00b\x07c\nd\te"), "abc\nd\te");
        assert_eq!(sanitize("del\x7fete"), "delete");
    }

    #[test]
    fn test_sanitize_preserves_unicode() {
        assert_eq!(sanitize("日本語 \x1b[1mタイトル\x1b[0m"), "日本語 タイトル");
    }
}
