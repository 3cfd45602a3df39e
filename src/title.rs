use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::node::{Element, Node};

// `.` never crosses a line terminator, so neither may the span body.
static EMPHASIS_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<strong[^>]*>[^\n\r\u{2028}\u{2029}]*?</strong>").expect("valid emphasis pattern")
});
static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class="([^"]*)""#).expect("valid class pattern"));
static INNER_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">([^<]+)<").expect("valid inner text pattern"));
static STRONG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?strong[^>]*>").expect("valid tag pattern"));

/// A slide title: either a node built by the caller or text with inline `<strong>` spans.
#[derive(Debug, Clone, PartialEq)]
pub enum Title {
    Node(Node),
    Text(String),
}

impl Title {
    /// Empty text titles are treated as missing.
    pub fn is_present(&self) -> bool {
        match self {
            Title::Node(_) => true,
            Title::Text(text) => !text.is_empty(),
        }
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Title::Text(text.to_string())
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Title::Text(text)
    }
}

impl From<Node> for Title {
    fn from(node: Node) -> Self {
        Title::Node(node)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fragment<'a> {
    Text(&'a str),
    Strong {
        class: Option<&'a str>,
        text: Cow<'a, str>,
    },
}

impl Fragment<'_> {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Text(text) => text,
            Fragment::Strong { text, .. } => text,
        }
    }

    pub fn to_node(&self) -> Node {
        match self {
            Fragment::Text(text) => Node::Text(text.to_string()),
            Fragment::Strong { class, text } => Element::new("strong")
                .class(class.unwrap_or_default())
                .child(text.as_ref())
                .into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormattedTitle<'a> {
    /// A caller-built node, passed through untouched.
    Node(&'a Node),
    Fragments(Vec<Fragment<'a>>),
}

impl FormattedTitle<'_> {
    pub fn to_node(&self) -> Node {
        match self {
            FormattedTitle::Node(node) => (*node).clone(),
            FormattedTitle::Fragments(fragments) => {
                Node::Fragment(fragments.iter().map(Fragment::to_node).collect())
            }
        }
    }

    pub fn plain_text(&self) -> String {
        match self {
            FormattedTitle::Node(node) => node.text_content(),
            FormattedTitle::Fragments(fragments) => fragments.iter().map(Fragment::text).collect(),
        }
    }
}

pub fn format_title(title: &Title) -> FormattedTitle<'_> {
    match title {
        Title::Node(node) => FormattedTitle::Node(node),
        Title::Text(text) if text.contains("<strong") => FormattedTitle::Fragments(split_emphasis(text)),
        Title::Text(text) => FormattedTitle::Fragments(vec![Fragment::Text(text)]),
    }
}

/// Splits `text` around every emphasis span, keeping the spans. The plain pieces between
/// them are kept even when empty, so the output always alternates plain/emphasis and starts
/// and ends with a plain piece.
fn split_emphasis(text: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut last = 0;

    for span in EMPHASIS_SPAN.find_iter(text) {
        fragments.push(Fragment::Text(&text[last..span.start()]));
        fragments.push(emphasis_fragment(span.as_str()));
        last = span.end();
    }
    fragments.push(Fragment::Text(&text[last..]));

    fragments
}

fn emphasis_fragment(span: &str) -> Fragment<'_> {
    let class = CLASS_ATTR.captures(span).and_then(|c| c.get(1));
    let inner = INNER_TEXT.captures(span).and_then(|c| c.get(1));

    match (class, inner) {
        (Some(class), Some(inner)) => Fragment::Strong {
            class: Some(class.as_str()),
            text: Cow::Borrowed(inner.as_str()),
        },
        _ => Fragment::Strong {
            class: None,
            text: STRONG_TAG.replace_all(span, ""),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(title: &Title) -> Vec<Fragment<'_>> {
        match format_title(title) {
            FormattedTitle::Fragments(fragments) => fragments,
            FormattedTitle::Node(_) => panic!("expected fragments"),
        }
    }

    fn strong<'a>(class: Option<&'a str>, text: &'a str) -> Fragment<'a> {
        Fragment::Strong { class, text: Cow::Borrowed(text) }
    }

    #[test]
    fn plain_title_is_single_fragment() {
        let title = Title::from("Plain text");
        assert_eq!(fragments(&title), vec![Fragment::Text("Plain text")]);
    }

    #[test]
    fn classed_emphasis_keeps_class_and_text() {
        let title = Title::from(r#"Welcome to <strong class="highlight">Our Site</strong>"#);
        assert_eq!(
            fragments(&title),
            vec![
                Fragment::Text("Welcome to "),
                strong(Some("highlight"), "Our Site"),
                Fragment::Text(""),
            ]
        );
    }

    #[test]
    fn bare_emphasis_has_no_class() {
        let title = Title::from("<strong>Bold</strong> text");
        assert_eq!(
            fragments(&title),
            vec![Fragment::Text(""), strong(None, "Bold"), Fragment::Text(" text")]
        );
    }

    #[test]
    fn several_spans_alternate_in_order() {
        let title = Title::from(r#"<strong>Fast</strong>, <strong class="a">safe</strong> and fun"#);
        assert_eq!(
            fragments(&title),
            vec![
                Fragment::Text(""),
                strong(None, "Fast"),
                Fragment::Text(", "),
                strong(Some("a"), "safe"),
                Fragment::Text(" and fun"),
            ]
        );
    }

    #[test]
    fn matching_is_non_greedy() {
        let title = Title::from("<strong>a</strong>-<strong>b</strong>");
        let parts = fragments(&title);
        assert_eq!(parts.len(), 5);
        assert_eq!(parts[1], strong(None, "a"));
        assert_eq!(parts[2], Fragment::Text("-"));
        assert_eq!(parts[3], strong(None, "b"));
    }

    #[test]
    fn unterminated_tag_stays_plain() {
        let raw = "Open <strong class=\"x\">forever";
        let title = Title::from(raw);
        assert_eq!(fragments(&title), vec![Fragment::Text(raw)]);
    }

    #[test]
    fn span_does_not_cross_line_breaks() {
        let raw = "<strong>two\nlines</strong>";
        let title = Title::from(raw);
        assert_eq!(fragments(&title), vec![Fragment::Text(raw)]);
    }

    #[test]
    fn class_without_text_falls_back_to_stripped_span() {
        let title = Title::from(r#"<strong class="empty"></strong>"#);
        assert_eq!(
            fragments(&title),
            vec![Fragment::Text(""), strong(None, ""), Fragment::Text("")]
        );
    }

    #[test]
    fn fallback_strips_only_strong_tags() {
        let title = Title::from("<strong><em>x</em></strong>");
        assert_eq!(fragments(&title)[1], strong(None, "<em>x</em>"));
    }

    #[test]
    fn classed_span_takes_first_text_run() {
        let title = Title::from(r#"<strong class="c">a <em>b</em></strong>"#);
        assert_eq!(fragments(&title)[1], strong(Some("c"), "a "));
    }

    #[test]
    fn node_title_passes_through_by_reference() {
        let title = Title::Node(Element::new("span").child("Custom").into());
        let Title::Node(inner) = &title else { unreachable!() };

        match format_title(&title) {
            FormattedTitle::Node(node) => assert!(std::ptr::eq(node, inner)),
            FormattedTitle::Fragments(_) => panic!("node title must not be split"),
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let raw = r#"Hi <strong class="h">there</strong>"#;
        let title = Title::from(raw);
        let _ = format_title(&title);
        assert_eq!(title, Title::Text(raw.to_string()));
    }

    #[test]
    fn fragments_render_to_markup() {
        let title = Title::from(r#"Welcome to <strong class="highlight">Our Site</strong>"#);
        assert_eq!(
            format_title(&title).to_node().to_markup(),
            r#"Welcome to <strong class="highlight">Our Site</strong>"#
        );
        assert_eq!(format_title(&title).plain_text(), "Welcome to Our Site");
    }
}
