use super::{block::tokenize_block, language::Language, token::Token};

/// Renders a snippet as the code-block markup used by the documentation
/// pages. `tag` is shown as the language label and picks the lexer.
pub fn render_code_block(code: &str, tag: &str) -> String {
    let language = Language::from_tag(tag);
    let label = escape_html(tag);

    let mut out = String::new();
    out.push_str("<div class=\"code-block-frame\">");
    out.push_str(&format!(
        "<div class=\"code-block__language\">{label}</div>"
    ));
    out.push_str(&format!(
        "<pre class=\"code-block code-block--{label}\"><code>"
    ));
    for line in tokenize_block(code, language) {
        out.push_str(&render_line(&line));
    }
    out.push_str("</code></pre></div>");
    out
}

pub fn render_line(tokens: &[Token]) -> String {
    let mut out = String::from("<span class=\"code-block__line\">");
    for token in tokens {
        out.push_str(&format!(
            "<span class=\"code-block__token code-block__token--{}\">{}</span>",
            token.kind.as_str(),
            escape_html(&token.text)
        ));
    }
    out.push_str("</span>");
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_line() {
        let line = vec![
            Token::new(TokenKind::Tag, "<b"),
            Token::new(TokenKind::Punctuation, ">"),
        ];
        assert_eq!(
            render_line(&line),
            "<span class=\"code-block__line\">\
             <span class=\"code-block__token code-block__token--tag\">&lt;b</span>\
             <span class=\"code-block__token code-block__token--punctuation\">&gt;</span>\
             </span>"
        );
    }

    #[test]
    fn test_render_code_block_frame() {
        let html = render_code_block("\n{\"a\": true}\n", "json");
        assert!(html.starts_with(
            "<div class=\"code-block-frame\"><div class=\"code-block__language\">json</div>\
             <pre class=\"code-block code-block--json\"><code>"
        ));
        assert!(html.ends_with("</code></pre></div>"));
        assert!(html.contains("code-block__token--property\">&quot;a&quot;</span>"));
        assert!(html.contains("code-block__token--keyword\">true</span>"));
        assert_eq!(html.matches("code-block__line").count(), 1);
    }

    #[test]
    fn test_render_uses_attr_kind_names() {
        let html = render_code_block("<i id='a'>", "html");
        assert!(html.contains("code-block__token--attr-name\">id</span>"));
        assert!(html.contains("code-block__token--attr-value\">&#39;a&#39;</span>"));
    }
}
