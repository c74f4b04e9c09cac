//! Output tree: named elements with attributes and either text or children.

use std::borrow::Cow;

/// Content of a [`Node`]. Text and children are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    Empty,
    /// XML-escaped text.
    Text(String),
    Children(Vec<Node>),
}

/// One XML element.
///
/// Attribute values and text are stored XML-escaped, exactly as they are
/// written; use [`Node::text_unescaped`] to read the original value back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub content: Content,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            content: Content::Empty,
        }
    }

    /// A leaf element with already-escaped text.
    pub fn with_text(tag: impl Into<String>, escaped: impl Into<String>) -> Self {
        let mut node = Self::new(tag);
        node.content = Content::Text(escaped.into());
        node
    }

    pub fn with_attr(mut self, name: impl Into<String>, escaped: impl Into<String>) -> Self {
        self.attrs.push((name.into(), escaped.into()));
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.push(child);
        self
    }

    /// Append a child. Any text content is replaced.
    pub fn push(&mut self, child: Node) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            other => *other = Content::Children(vec![child]),
        }
    }

    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Escaped text content, if this is a text leaf.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text content with XML escapes resolved. Empty for non-text nodes.
    pub fn text_unescaped(&self) -> Cow<'_, str> {
        let text = self.text().unwrap_or("");
        quick_xml::escape::unescape(text).unwrap_or(Cow::Borrowed(text))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First direct child with `tag`.
    pub fn child(&self, tag: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.tag == tag)
    }

    /// Text of the first direct child with `tag`.
    pub fn child_text(&self, tag: &str) -> Option<&str> {
        self.child(tag).and_then(Node::text)
    }

    /// Direct children with `tag`.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children().iter().filter(move |c| c.tag == tag)
    }

    /// Follow a `/`-separated path of direct-child tags.
    pub fn path(&self, path: &str) -> Option<&Node> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self, |node, tag| node.child(tag))
    }

    /// Every descendant (depth-first, document order) with `tag`.
    pub fn descendants(&self, tag: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_descendants(tag, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, tag: &str, found: &mut Vec<&'a Node>) {
        for child in self.children() {
            if child.tag == tag {
                found.push(child);
            }
            child.collect_descendants(tag, found);
        }
    }
}

/// A complete Tally import document rooted at `ENVELOPE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Node,
}

impl Document {
    /// The `TALLYMESSAGE` wrappers under `REQUESTDATA`.
    pub fn messages(&self) -> &[Node] {
        self.root
            .path("BODY/IMPORTDATA/REQUESTDATA")
            .map(Node::children)
            .unwrap_or(&[])
    }

    /// Every record element (the children of all `TALLYMESSAGE` wrappers),
    /// in document order.
    pub fn records(&self) -> Vec<&Node> {
        self.messages().iter().flat_map(Node::children).collect()
    }

    /// Record elements with `tag`, in document order.
    pub fn records_named(&self, tag: &str) -> Vec<&Node> {
        self.records().into_iter().filter(|n| n.tag == tag).collect()
    }

    /// The `REPORTNAME` this document imports into.
    pub fn report_name(&self) -> Option<&str> {
        self.root
            .path("BODY/IMPORTDATA/REQUESTDESC/REPORTNAME")
            .and_then(Node::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_replaces_text() {
        let mut node = Node::with_text("A", "x");
        node.push(Node::new("B"));
        assert_eq!(node.text(), None);
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn navigation_helpers() {
        let root = Node::new("ROOT")
            .with_child(
                Node::new("LIST")
                    .with_attr("TYPE", "String")
                    .with_child(Node::with_text("NAME", "R&amp;D")),
            )
            .with_child(Node::new("LIST").with_child(Node::with_text("NAME", "Ops")));

        assert_eq!(root.children_named("LIST").count(), 2);
        assert_eq!(root.path("LIST/NAME").unwrap().text(), Some("R&amp;D"));
        assert_eq!(root.path("LIST/NAME").unwrap().text_unescaped(), "R&D");
        assert_eq!(root.child("LIST").unwrap().attr("TYPE"), Some("String"));
        assert_eq!(root.descendants("NAME").len(), 2);
        assert!(root.path("LIST/MISSING").is_none());
    }
}
