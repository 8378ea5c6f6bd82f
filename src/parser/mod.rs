//! XHTML markup loader for the headless document.
//!
//! Reads well-formed markup (every element closed, `<br/>` style for empty
//! ones) into a [`MemoryDocument`] subtree. Comments, processing
//! instructions and doctype declarations are skipped; whitespace-only text
//! between elements is dropped.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Result, ScrollerError};
use crate::host::{HostDocument, MemoryDocument, NodeId};
use crate::xml_helpers::{attr_pairs, local_name_string, text_string};

/// Parse `markup` and append its top-level elements under `parent`.
pub(crate) fn parse_into(doc: &MemoryDocument, parent: NodeId, markup: &str) -> Result<()> {
    let mut xml = Reader::from_str(markup);
    xml.trim_text(true);

    let mut stack: Vec<(NodeId, String)> = Vec::new();
    let mut elements = 0_usize;

    loop {
        match xml.read_event()? {
            Event::Start(ref e) => {
                let name = local_name_string(e);
                let node = open_element(doc, current(&stack, parent), &name, &attr_pairs(e)?)?;
                stack.push((node, name));
                elements += 1;
            }
            Event::Empty(ref e) => {
                let name = local_name_string(e);
                open_element(doc, current(&stack, parent), &name, &attr_pairs(e)?)?;
                elements += 1;
            }
            Event::End(ref e) => {
                let name = std::str::from_utf8(e.local_name().as_ref())
                    .unwrap_or("")
                    .to_ascii_lowercase();
                match stack.pop() {
                    Some((_, open)) if open == name => {}
                    Some((_, open)) => {
                        return Err(ScrollerError::Markup(format!(
                            "expected </{open}>, found </{name}>"
                        )));
                    }
                    None => {
                        return Err(ScrollerError::Markup(format!(
                            "unexpected closing tag </{name}>"
                        )));
                    }
                }
            }
            Event::Text(ref t) => {
                let text = text_string(t)?;
                doc.append_text(&current(&stack, parent), &text);
            }
            Event::CData(ref t) => {
                let text = String::from_utf8_lossy(t.as_ref()).into_owned();
                doc.append_text(&current(&stack, parent), &text);
            }
            Event::Eof => break,
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    if let Some((_, open)) = stack.last() {
        return Err(ScrollerError::Markup(format!("unclosed <{open}>")));
    }

    tracing::trace!(target: "tablescroller::parser", elements, "markup loaded");
    Ok(())
}

fn current(stack: &[(NodeId, String)], root: NodeId) -> NodeId {
    stack.last().map_or(root, |(node, _)| *node)
}

fn open_element(
    doc: &MemoryDocument,
    parent: NodeId,
    name: &str,
    attributes: &[(String, String)],
) -> Result<NodeId> {
    if name.is_empty() {
        return Err(ScrollerError::Markup("element without a name".to_string()));
    }
    let node = doc.create_element(name)?;
    for (key, value) in attributes {
        doc.set_attribute(&node, key, value)?;
    }
    doc.append_child(&parent, &node)?;
    Ok(node)
}
