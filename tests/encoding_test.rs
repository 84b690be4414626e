use wx_html_cleaner::{clean_bytes, clean_bytes_with_options, encoding, Options};

#[test]
fn utf8_content_handled_correctly() {
    let html = "<html><head><meta charset=\"utf-8\"></head><body><p>UTF-8 正文: é, ñ, ü</p></body></html>";
    let out = clean_bytes(html.as_bytes());
    assert!(out.contains("<p>UTF-8 正文: é, ñ, ü</p>"));
}

#[test]
fn gbk_page_is_transcoded() {
    let (body, _, _) = encoding_rs::GBK.encode("<p>这是一篇用GBK编码保存的文章。</p>");
    let mut html = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=gbk\"></head><body>".to_vec();
    html.extend_from_slice(&body);
    html.extend_from_slice(b"</body></html>");

    let out = clean_bytes(&html);
    assert!(out.contains("<p>这是一篇用GBK编码保存的文章。</p>"));
    assert!(out.contains(r#"<meta charset="utf-8">"#));
}

#[test]
fn windows_1252_page_is_transcoded() {
    let html = b"<html><head><meta charset=\"windows-1252\"></head><body><p>\x93quoted\x94 caf\xE9</p></body></html>";
    let out = clean_bytes(html);
    assert!(out.contains("\u{201c}quoted\u{201d} café"));
}

#[test]
fn utf8_bom_is_stripped() {
    let mut html = vec![0xEF, 0xBB, 0xBF];
    html.extend_from_slice("<body><p>带BOM的文件</p></body>".as_bytes());
    let out = clean_bytes(&html);
    assert!(out.contains("<p>带BOM的文件</p>"));
    assert!(!out.contains('\u{feff}'));
}

#[test]
fn bytes_with_options_use_string_mode() {
    let options = Options {
        tree_parsing: false,
        ..Options::default()
    };
    let out = clean_bytes_with_options(b"<body><p class=\"x\">plain</p></body>", &options);
    assert!(out.contains("<p>plain</p>"));
}

#[test]
fn detection_is_exposed() {
    assert_eq!(
        encoding::detect_encoding(b"<meta charset=\"gb18030\">"),
        encoding_rs::GB18030
    );
}
