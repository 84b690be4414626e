//! Character encoding detection for saved pages.
//!
//! Saved article pages are mostly UTF-8, but older Chinese pages still come
//! as GBK or GB18030. Bytes are decoded once, up front, and everything
//! downstream works on `&str`.

use encoding_rs::{Encoding, UTF_8};
use log::debug;

use crate::patterns::META_CHARSET;

/// Only this many leading bytes are searched for a charset declaration.
pub const SNIFF_LEN: usize = 1024;

/// Detect the encoding of an HTML byte stream.
///
/// A byte order mark wins, then a meta declaration near the top, then UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    META_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode bytes to a UTF-8 string. Malformed sequences become U+FFFD.
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        debug!("malformed {} sequences replaced", used.name());
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{GBK, UTF_16LE};

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<html><body>plain</body></html>"), UTF_8);
        assert_eq!(decode_html("<p>中文</p>".as_bytes()), "<p>中文</p>");
    }

    #[test]
    fn meta_charset_is_honoured() {
        let (body, _, _) = GBK.encode("<p>微信文章</p>");
        let mut html = br#"<html><head><meta charset="gbk"></head><body>"#.to_vec();
        html.extend_from_slice(&body);
        html.extend_from_slice(b"</body></html>");

        assert_eq!(detect_encoding(&html), GBK);
        assert!(decode_html(&html).contains("<p>微信文章</p>"));
    }

    #[test]
    fn http_equiv_charset_is_honoured() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=GB2312"><p>x</p>"#;
        assert_eq!(detect_encoding(html), GBK);
    }

    #[test]
    fn bom_wins_over_meta() {
        let mut html = vec![0xFF, 0xFE];
        for unit in r#"<meta charset="gbk">"#.encode_utf16() {
            html.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(detect_encoding(&html), UTF_16LE);
    }

    #[test]
    fn unknown_label_falls_back() {
        assert_eq!(detect_encoding(br#"<meta charset="klingon">"#), UTF_8);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let decoded = decode_html(b"<p>\xFF\xFEok</p>");
        assert!(decoded.contains('\u{FFFD}'));
        assert!(decoded.contains("ok"));
    }
}
