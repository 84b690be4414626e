//! UI and navigation text detection.
//!
//! Short strings made of interface vocabulary ("点击查看更多", "Read more")
//! are chrome, not article prose.

/// Interface vocabulary, Chinese and English. English entries are lowercase.
pub static UI_KEYWORDS: [&str; 37] = [
    "点击", "查看", "更多", "阅读原文", "阅读全文", "关注", "分享", "收藏", "点赞", "在看",
    "转发", "评论", "留言", "扫码", "二维码", "长按", "识别", "返回", "上一篇", "下一篇",
    "首页", "登录", "注册", "订阅", "click", "view", "more", "share", "follow", "subscribe",
    "comment", "login", "log in", "sign in", "sign up", "read more", "menu",
];

/// Texts up to this many chars are rejected on a single keyword.
pub const SHORT_TEXT_LEN: usize = 50;

/// Longer texts are rejected only above this many distinct keywords.
pub const MAX_KEYWORDS_IN_LONG_TEXT: usize = 3;

/// Number of distinct keywords occurring in `text` (case-insensitive).
#[must_use]
pub fn keyword_hits(text: &str) -> usize {
    let lower = text.to_lowercase();
    UI_KEYWORDS.iter().filter(|k| lower.contains(*k)).count()
}

/// Whether `text` reads as interface chrome rather than content.
#[must_use]
pub fn is_ui_text(text: &str) -> bool {
    let text = text.trim();
    let hits = keyword_hits(text);
    if text.chars().count() <= SHORT_TEXT_LEN {
        hits > 0
    } else {
        hits > MAX_KEYWORDS_IN_LONG_TEXT
    }
}
