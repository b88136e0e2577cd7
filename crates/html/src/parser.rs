//! HTML Parser
//!
//! Drives the buffer tokenizer into a document, one fragment at a time.

use log::debug;
use wordfreq_dom::Document;

use crate::tokenizer::Fragments;

/// HTML parser that builds a document
pub struct HtmlParser {
    document: Document,
    fragments: usize,
}

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            fragments: 0,
        }
    }

    /// Parse an HTML string into a document.
    ///
    /// Never fails: malformed markup degrades to text nodes or unclosed
    /// elements. Input after the last `<` or `>` is dropped.
    pub fn parse(mut self, html: &str) -> Document {
        let mut tokenizer = Fragments::from_html(html);

        for fragment in tokenizer.by_ref() {
            self.document.digest(&fragment);
            self.fragments += 1;
        }

        debug!(
            "Parsed {} fragments into {} nodes ({} trailing bytes dropped)",
            self.fragments,
            self.document.len(),
            tokenizer.pending().len()
        );

        self.document
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an HTML string into a document
pub fn parse_html(html: &str) -> Document {
    HtmlParser::new().parse(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfreq_dom::Queryable;

    const BASE_HTML: &str = include_str!("../tests/fixtures/base.html");
    const ADVANCED_HTML: &str = include_str!("../tests/fixtures/advanced.html");

    fn root_kinds(doc: &Document) -> Vec<String> {
        doc.children(doc.root_id())
            .into_iter()
            .filter_map(|id| doc.get(id).map(|n| n.kind().to_string()))
            .collect()
    }

    #[test]
    fn test_base_html_parsing() {
        let doc = parse_html(BASE_HTML);

        assert!(doc.get(doc.root_id()).unwrap().is_root());
        assert_eq!(root_kinds(&doc), ["doctype", "html"]);
        assert_eq!(doc.text(), "Test text.");
    }

    #[test]
    fn test_advanced_html_parsing() {
        let doc = parse_html(ADVANCED_HTML);

        assert_eq!(root_kinds(&doc), ["html"]);

        let expected = "Header\n\
                        Nested paragraph1\n\
                        Nested paragraph2\n\
                        < p>Invalid tag treated as text\n\
                        </p>\n\
                        This i a <<<textarea>>>\n\
                        Don't push me!";
        assert_eq!(doc.text(), expected);
    }

    #[test]
    fn test_advanced_html_structure() {
        let doc = parse_html(ADVANCED_HTML);

        assert_eq!(doc.get_nodes_by_kind("p").len(), 2);
        assert_eq!(doc.get_nodes_by_kind("comment").len(), 1);
        assert_eq!(doc.get_nodes_by_kind("textarea").len(), 1);
        // Markup inside comments and textareas is not parsed
        assert!(doc.get_nodes_by_kind("em").is_empty());
        assert_eq!(doc.get_nodes_by_kind("br").len(), 1);
    }

    #[test]
    fn test_end_to_end_document() {
        let html = "<html><head><title>Title should be hidden</title></head><body>\
                    <!-- Can't see me --><p>One two Three Two tHree+three</p></body></html>";
        let doc = parse_html(html);

        assert_eq!(root_kinds(&doc), ["html"]);
        assert_eq!(doc.text(), "One two Three Two tHree+three");
    }

    #[test]
    fn test_indented_document() {
        let html = r#"
        <html>
          <head>
            <title>Title should be hidden</title>
          </head>
          <body>
            <!-- Can't see me -->
            <p>One two Three Two tHree+three</p>
          </body>
        </html>
        "#;
        let doc = parse_html(html);

        assert_eq!(root_kinds(&doc), ["html"]);
        assert_eq!(doc.text(), "One two Three Two tHree+three");
    }

    #[test]
    fn test_malformed_tag_is_text() {
        let doc = parse_html("<div>< p>Invalid tag treated as text\n</p>\n<br/></div>");
        let div = doc.children(doc.root_id())[0];

        let kinds: Vec<&str> = doc
            .children(div)
            .into_iter()
            .filter_map(|id| doc.get(id).map(|n| n.kind()))
            .collect();
        assert_eq!(kinds, ["text", "text", "br"]);
        assert!(doc.get_nodes_by_kind("p").is_empty());
        assert_eq!(doc.text(), "< p>Invalid tag treated as text\n\n</p>");
    }

    #[test]
    fn test_void_elements_never_gain_children() {
        let doc = parse_html("<p><br/>a<br />b<meta charset=\"utf-8\" />c<img src=x>d</p>");

        for kind in ["br", "meta", "img"] {
            for id in doc.get_nodes_by_kind(kind) {
                assert!(doc.children(id).is_empty(), "{kind} gained children");
            }
        }
        assert_eq!(doc.text(), "a\nb\nc\nd");
    }

    #[test]
    fn test_textarea_renders_verbatim() {
        let doc = parse_html("<form><textarea name=\"t\"><p>Hello</p> and <b>world</b></textarea></form>");

        assert!(doc.get_nodes_by_kind("p").is_empty());
        assert!(doc.get_nodes_by_kind("b").is_empty());
        assert_eq!(doc.text(), "<p>Hello</p> and <b>world</b>");
    }

    #[test]
    fn test_invisible_containers_hide_nested_text() {
        let html = "<div><head><p>meta</p></head><video><p>no video</p></video>\
                    <audio>sound</audio><p>seen</p></div>";
        assert_eq!(parse_html(html).text(), "seen");
    }

    #[test]
    fn test_consecutive_invisible_siblings_add_no_blank_lines() {
        let html = "<p>a</p><script>x</script><style>y</style><p>b</p>";
        assert_eq!(parse_html(html).text(), "a\nb");
    }

    #[test]
    fn test_unclosed_tags_stay_open() {
        let doc = parse_html("<div><p>Unclosed<span>more");

        assert_eq!(doc.get_nodes_by_kind("div").len(), 1);
        assert_eq!(doc.get_nodes_by_kind("span").len(), 1);
        // "more" never hit a delimiter
        assert_eq!(doc.text(), "Unclosed");
        assert_eq!(doc.open_spine().len(), 4);
    }

    #[test]
    fn test_uppercase_tags_are_case_sensitive() {
        let doc = parse_html("<DIV>a</div>b</DIV>c<p>");

        let div = doc.children(doc.root_id())[0];
        assert_eq!(doc.get(div).unwrap().kind(), "DIV");
        assert!(doc.get(div).unwrap().is_closed());
        // `</div>` did not close `DIV`, so it was kept as text and merged
        assert_eq!(doc.text_of(div), "a\n</div>b");
    }

    #[test]
    fn test_text_is_idempotent() {
        let doc = parse_html(ADVANCED_HTML);
        assert_eq!(doc.text(), doc.text());
    }

    #[test]
    fn test_empty_input() {
        let doc = parse_html("");
        assert!(doc.is_empty());
        assert_eq!(doc.text(), "");
    }
}
