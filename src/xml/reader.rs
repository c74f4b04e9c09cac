use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::core::{Content, Document, Node, TallyError, escape};

fn xml_parse(e: impl std::fmt::Display) -> TallyError {
    TallyError::Xml(format!("parse error: {e}"))
}

fn utf8(bytes: &[u8]) -> Result<&str, TallyError> {
    std::str::from_utf8(bytes).map_err(xml_parse)
}

fn open(e: &BytesStart<'_>) -> Result<Node, TallyError> {
    let mut node = Node::new(utf8(e.name().as_ref())?);
    for attr in e.attributes() {
        let attr = attr.map_err(xml_parse)?;
        node.attrs
            .push((utf8(attr.key.as_ref())?.to_string(), utf8(&attr.value)?.to_string()));
    }
    Ok(node)
}

struct Frame {
    node: Node,
    text: String,
}

/// Parse serialized XML back into a [`Document`].
///
/// Text and attribute values keep their escaped form, matching how the
/// builder stores them. Whitespace between elements is dropped; a leaf's
/// whitespace-only text (a placeholder) is kept.
pub fn parse(xml: &str) -> Result<Document, TallyError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<Node> = None;

    fn attach(stack: &mut [Frame], root: &mut Option<Node>, node: Node) {
        match stack.last_mut() {
            Some(parent) => parent.node.push(node),
            None => *root = Some(node),
        }
    }

    loop {
        match reader.read_event().map_err(xml_parse)? {
            Event::Start(ref e) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.clear();
                }
                stack.push(Frame {
                    node: open(e)?,
                    text: String::new(),
                });
            }
            Event::Empty(ref e) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.clear();
                }
                let node = open(e)?;
                attach(&mut stack, &mut root, node);
            }
            Event::Text(ref e) => {
                if let Some(top) = stack.last_mut() {
                    if top.node.children().is_empty() {
                        top.text.push_str(utf8(e)?);
                    }
                }
            }
            Event::CData(ref e) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&escape(utf8(e)?));
                }
            }
            Event::End(_) => {
                let Some(Frame { mut node, text }) = stack.pop() else {
                    return Err(xml_parse("unbalanced end tag"));
                };
                if node.children().is_empty() && !text.is_empty() {
                    node.content = Content::Text(text);
                }
                attach(&mut stack, &mut root, node);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(xml_parse("unexpected end of document"));
    }
    root.map(|root| Document { root })
        .ok_or_else(|| xml_parse("no root element"))
}
