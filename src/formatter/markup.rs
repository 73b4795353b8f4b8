//! Paragraph markup parser
//!
//! Understands only the tags the text service is asked to produce. `<p>` is
//! dropped, `</p>` becomes a paragraph break and `<br>`, `<br/>` or `<br />`
//! become a line break. Anything else, including other tags, stays as text.

use std::sync::OnceLock;
use regex::Regex;

/// One piece of parsed story markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode<'a> {
    Text(&'a str),
    ParagraphBreak,
    LineBreak,
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<p>|</p>|<br\s*/?>").expect("static tag pattern is valid"))
}

/// Split `markup` into text and break nodes
pub fn parse(markup: &str) -> Vec<MarkupNode<'_>> {
    let mut nodes = Vec::new();
    let mut last = 0;

    for tag in tag_pattern().find_iter(markup) {
        if tag.start() > last {
            nodes.push(MarkupNode::Text(&markup[last..tag.start()]));
        }
        match tag.as_str() {
            "<p>" => {}
            "</p>" => nodes.push(MarkupNode::ParagraphBreak),
            _ => nodes.push(MarkupNode::LineBreak),
        }
        last = tag.end();
    }

    if last < markup.len() {
        nodes.push(MarkupNode::Text(&markup[last..]));
    }

    nodes
}

/// Render nodes as plain text
pub fn render(nodes: &[MarkupNode<'_>]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            MarkupNode::Text(text) => out.push_str(text),
            MarkupNode::ParagraphBreak => out.push_str("\n\n"),
            MarkupNode::LineBreak => out.push('\n'),
        }
    }
    out
}

/// Parse and render in one step
pub fn to_plain_text(markup: &str) -> String {
    render(&parse(markup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paragraphs() {
        assert_eq!(
            parse("<p>One.</p><p>Two.</p>"),
            vec![
                MarkupNode::Text("One."),
                MarkupNode::ParagraphBreak,
                MarkupNode::Text("Two."),
                MarkupNode::ParagraphBreak,
            ]
        );
    }

    #[test]
    fn test_line_break_variants() {
        assert_eq!(to_plain_text("a<br>b<br/>c<br />d<br   />e"), "a\nb\nc\nd\ne");
    }

    #[test]
    fn test_unknown_tags_kept_verbatim() {
        assert_eq!(to_plain_text("<p><b>Bold</b> & <P>loud</P></p>"), "<b>Bold</b> & <P>loud</P>\n\n");
    }

    #[test]
    fn test_unbalanced_markup() {
        assert_eq!(to_plain_text("No tags at all"), "No tags at all");
        assert_eq!(to_plain_text("</p></p>end<p>"), "\n\n\n\nend");
        assert!(parse("").is_empty());
    }
}
