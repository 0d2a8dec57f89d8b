//! 説明文のHTML整形
//!
//! モーダルの詳細説明は innerHTML として挿入されるため、
//! 段落化の前に必ずエスケープする。

/// HTML特殊文字をエスケープ
///
/// # Examples
/// ```
/// use portfolio_common::escape_html;
///
/// assert_eq!(escape_html("<b>\"A\" & 'B'</b>"), "&lt;b&gt;&quot;A&quot; &amp; &#039;B&#039;&lt;/b&gt;");
/// ```
pub fn escape_html(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// プレーンテキストを段落HTMLに変換
///
/// - 2つ以上連続する改行 → 別の `<p>` ブロック
/// - 単独の改行 → `<br>`
/// - 前後の空白は段落ごとに除去し、空の段落は捨てる
pub fn format_paragraphs(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    split_paragraphs(&normalized)
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", escape_html(p).replace('\n', "<br>")))
        .collect()
}

/// 2つ以上連続する改行で分割
fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let run_start = i;
            while i < bytes.len() && bytes[i] == b'\n' {
                i += 1;
            }
            if i - run_start >= 2 {
                parts.push(&text[start..run_start]);
                start = i;
            }
        } else {
            i += 1;
        }
    }
    parts.push(&text[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_special_chars() {
        assert_eq!(escape_html("&<>\"'"), "&amp;&lt;&gt;&quot;&#039;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_escape_ampersand_first() {
        // 既にエスケープされた文字列も二重にエスケープされる
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_paragraphs(""), "");
        assert_eq!(format_paragraphs("\n\n\n"), "");
    }

    #[test]
    fn test_format_paragraphs_and_breaks() {
        let html = format_paragraphs("First line\nsecond line\n\n Second para ");
        assert_eq!(html, "<p>First line<br>second line</p><p>Second para</p>");
    }

    #[test]
    fn test_format_normalizes_line_endings() {
        let html = format_paragraphs("a\r\n\r\nb\rc");
        assert_eq!(html, "<p>a</p><p>b<br>c</p>");
    }

    #[test]
    fn test_format_collapses_long_blank_runs() {
        let html = format_paragraphs("a\n\n\n\nb");
        assert_eq!(html, "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_format_script_is_escaped() {
        let html = format_paragraphs("<script>alert('x')</script>");
        assert!(!html.contains("<script>"));
        assert_eq!(
            html,
            "<p>&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;</p>"
        );
    }
}
