//! Minimal HTML tokenizer: splits a document into tags and text runs.
//!
//! Only what the link rewriter needs. Tags, comments and declarations are
//! returned verbatim so the output reproduces the input byte for byte
//! outside of rewritten text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A tag, comment or declaration, including its angle brackets.
    Tag(&'a str),
    Text(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    /// Lowercase element name.
    pub name: String,
    pub closing: bool,
    pub self_closing: bool,
}

/// Splits `html` into segments. Concatenating them yields `html` again.
#[must_use]
pub fn segments(html: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let bytes = html.as_bytes();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' || !starts_markup(bytes.get(i + 1).copied()) {
            i += 1;
            continue;
        }

        let end = if html[i..].starts_with("<!--") {
            // An unclosed comment runs to the end of the document
            Some(html[i + 4..].find("-->").map_or(html.len(), |p| i + 4 + p + 3))
        } else {
            html[i..].find('>').map(|p| i + p + 1)
        };
        // Unterminated tags are kept as text
        let Some(end) = end else {
            break;
        };

        if text_start < i {
            out.push(Segment::Text(&html[text_start..i]));
        }
        out.push(Segment::Tag(&html[i..end]));
        i = end;
        text_start = end;
    }

    if text_start < html.len() {
        out.push(Segment::Text(&html[text_start..]));
    }
    out
}

/// Element name and kind of a tag segment; `None` for comments and
/// declarations.
#[must_use]
pub fn parse_tag(tag: &str) -> Option<TagInfo> {
    let inner = tag.strip_prefix('<')?.strip_suffix('>')?;
    let (closing, rest) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };

    let name: String = rest
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if name.is_empty() {
        return None;
    }

    Some(TagInfo {
        name,
        closing,
        self_closing: inner.trim_end().ends_with('/'),
    })
}

fn starts_markup(next: Option<u8>) -> bool {
    matches!(next, Some(c) if c.is_ascii_alphabetic() || c == b'/' || c == b'!')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_tags_and_text() {
        let html = "<p>Une <a href=\"/x\">maison</a> neuve</p>";
        assert_eq!(
            segments(html),
            vec![
                Segment::Tag("<p>"),
                Segment::Text("Une "),
                Segment::Tag("<a href=\"/x\">"),
                Segment::Text("maison"),
                Segment::Tag("</a>"),
                Segment::Text(" neuve"),
                Segment::Tag("</p>"),
            ]
        );
    }

    #[test]
    fn comments_and_stray_brackets() {
        let html = "a < b <!-- <a> --> c";
        assert_eq!(
            segments(html),
            vec![
                Segment::Text("a < b "),
                Segment::Tag("<!-- <a> -->"),
                Segment::Text(" c"),
            ]
        );
    }

    #[test]
    fn unclosed_comment_swallows_the_rest() {
        assert_eq!(
            segments("<p>a</p><!-- draft <p>devis</p>"),
            vec![
                Segment::Tag("<p>"),
                Segment::Text("a"),
                Segment::Tag("</p>"),
                Segment::Tag("<!-- draft <p>devis</p>"),
            ]
        );
    }

    #[test]
    fn unterminated_tag_is_text() {
        assert_eq!(segments("text <a href"), vec![Segment::Text("text <a href")]);
    }

    #[test]
    fn tag_info() {
        assert_eq!(
            parse_tag("<A HREF='/'>"),
            Some(TagInfo {
                name: "a".to_string(),
                closing: false,
                self_closing: false,
            })
        );
        assert_eq!(parse_tag("</h2>").map(|t| t.closing), Some(true));
        assert_eq!(parse_tag("<br />").map(|t| t.self_closing), Some(true));
        assert_eq!(parse_tag("<!DOCTYPE html>"), None);
    }
}
