use crate::entity::{Link, Segment, Segmented};
use crate::parser::segment;

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Renders a segmented text as an inline HTML fragment.
pub fn translate(segmented: &Segmented) -> String {
    match segmented {
        Segmented::Plain(text) => encode_text(text).into_owned(),
        Segmented::Segments(segments) => segments
            .iter()
            .map(translate_segment)
            .collect::<Vec<String>>()
            .join(""),
    }
}

pub fn render(source: &str) -> String {
    translate(&segment(source))
}

fn translate_segment(segment: &Segment) -> String {
    match segment {
        Segment::Plaintext(text) => encode_text(text).into_owned(),
        Segment::Link(link) => translate_link(link),
    }
}

fn translate_link(link: &Link) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        encode_double_quoted_attribute(link.href),
        encode_text(link.text)
    )
}

#[cfg(test)]
mod tests {
    use crate::translator::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_translate_link() {
        assert_eq!(
            translate_link(&Link {
                text: "pip",
                href: "https://pip.pypa.io/en/stable/"
            }),
            "<a href=\"https://pip.pypa.io/en/stable/\">pip</a>"
        );
        assert_eq!(
            translate_link(&Link {
                text: "a < b",
                href: "/q?x=\"1\""
            }),
            "<a href=\"/q?x=&quot;1&quot;\">a &lt; b</a>"
        );
    }

    #[test]
    fn test_translate_plain() {
        assert_eq!(translate(&Segmented::Plain("Hello, world!")), "Hello, world!");
        assert_eq!(translate(&Segmented::Plain("")), "");
        assert_eq!(
            translate(&Segmented::Plain("<script>alert(1)</script>")),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render("[Google](https://google.com) and [GitHub](https://github.com)"),
            "<a href=\"https://google.com\">Google</a> and <a href=\"https://github.com\">GitHub</a>"
        );
        assert_eq!(
            render("see [docs](/a?b=1&c=2)"),
            "see <a href=\"/a?b=1&amp;c=2\">docs</a>"
        );
        assert_eq!(render("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(render("a [b(c) d"), "a [b(c) d");
    }
}
