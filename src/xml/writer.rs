use quick_xml::Writer;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use std::borrow::Cow;
use std::io::Cursor;

use crate::core::{Content, Document, Node, TallyError};

fn xml_io(e: std::io::Error) -> TallyError {
    TallyError::Xml(format!("write error: {e}"))
}

/// Start tag with attributes whose values are already escaped.
fn start_tag<'a>(name: &'a str, attrs: &'a [(String, String)]) -> BytesStart<'a> {
    let mut elem = BytesStart::new(name);
    for (k, v) in attrs {
        elem.push_attribute(Attribute {
            key: QName(k.as_bytes()),
            value: Cow::Borrowed(v.as_bytes()),
        });
    }
    elem
}

/// Indenting XML writer for [`Node`] trees.
///
/// Node text and attribute values are stored escaped, so they are written
/// as-is; nothing is escaped twice.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub fn new() -> Result<Self, TallyError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> Result<String, TallyError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| TallyError::Xml(format!("UTF-8 error: {e}")))
    }

    /// Write `node` and its subtree. Childless, textless nodes are written
    /// self-closing.
    pub fn node(&mut self, node: &Node) -> Result<&mut Self, TallyError> {
        let start = start_tag(&node.tag, &node.attrs);
        match &node.content {
            Content::Empty => {
                self.writer
                    .write_event(Event::Empty(start))
                    .map_err(xml_io)?;
            }
            Content::Text(text) => {
                self.writer
                    .write_event(Event::Start(start))
                    .map_err(xml_io)?;
                self.writer
                    .write_event(Event::Text(BytesText::from_escaped(text.as_str())))
                    .map_err(xml_io)?;
                self.end_element(&node.tag)?;
            }
            Content::Children(children) => {
                self.writer
                    .write_event(Event::Start(start))
                    .map_err(xml_io)?;
                for child in children {
                    self.node(child)?;
                }
                self.end_element(&node.tag)?;
            }
        }
        Ok(self)
    }

    fn end_element(&mut self, name: &str) -> Result<&mut Self, TallyError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }
}

/// Serialize a document: XML declaration, two-space indentation.
pub fn to_xml(doc: &Document) -> Result<String, TallyError> {
    let mut w = XmlWriter::new()?;
    w.node(&doc.root)?;
    w.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document {
            root: Node::new("ENVELOPE").with_child(
                Node::new("LEDGER")
                    .with_attr("NAME", "R&amp;D &quot;Ops&quot;")
                    .with_child(Node::with_text("PARENT", "\t"))
                    .with_child(Node::with_text("EMAIL", "a&lt;b&gt;"))
                    .with_child(Node::new("VATDETAILS.LIST"))
                    .with_child(Node::with_text("GSTDETAILS.LIST", "      ")),
            ),
        }
    }

    #[test]
    fn writes_declaration_and_indentation() {
        let xml = to_xml(&sample()).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("\n<ENVELOPE>\n  <LEDGER"));
        assert!(xml.contains("\n    <EMAIL>a&lt;b&gt;</EMAIL>"));
    }

    #[test]
    fn escaped_content_is_not_escaped_again() {
        let xml = to_xml(&sample()).unwrap();
        assert!(xml.contains(r#"<LEDGER NAME="R&amp;D &quot;Ops&quot;">"#));
        assert!(!xml.contains("&amp;amp;"));
    }

    #[test]
    fn empty_nodes_self_close_and_placeholders_do_not() {
        let xml = to_xml(&sample()).unwrap();
        assert!(xml.contains("<VATDETAILS.LIST/>"));
        assert!(xml.contains("<GSTDETAILS.LIST>      </GSTDETAILS.LIST>"));
        assert!(xml.contains("<PARENT>\t</PARENT>"));
    }
}
