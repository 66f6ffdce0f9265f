//! XMind 8 `content.xml` parser.
//!
//! ```xml
//! <xmap-content xmlns="urn:xmind:xmap:xmlns:content:2.0">
//!   <sheet>
//!     <title>Sheet 1</title>
//!     <topic xlink:href="https://example.com">
//!       <title>Root</title>
//!       <notes><plain>text</plain></notes>
//!       <labels><label>tag</label></labels>
//!       <marker-refs><marker-ref marker-id="priority-1"/></marker-refs>
//!       <children><topics type="attached"><topic>...</topic></topics></children>
//!     </topic>
//!   </sheet>
//! </xmap-content>
//! ```
//!
//! Elements are matched by local name, so default namespaces and arbitrary
//! prefixes are both accepted.

use super::ParseToOutline;
use crate::common::format::ContentFormat;
use crate::common::xml::Element;
use crate::common::{Error, Result};
use crate::model::{Sheet, Topic};

/// Attribute names carrying a marker id, in lookup order.
const MARKER_ID_ATTRS: [&str; 3] = ["marker-id", "markerId", "id"];

/// Parser for `content.xml`.
pub struct XmlParser;

impl ParseToOutline for XmlParser {
    const FORMAT: ContentFormat = ContentFormat::Xml;

    fn parse_sheets(data: &[u8]) -> Result<Vec<Sheet>> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::parse(Self::FORMAT, format!("invalid UTF-8: {}", e)))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let root = Element::parse(text)?;
        let sheets: Vec<&Element> = root.children_named("sheet").collect();
        if sheets.is_empty() {
            return Err(Error::parse(
                Self::FORMAT,
                format!("no sheet elements found under <{}>", root.local_name()),
            ));
        }

        sheets
            .into_iter()
            .enumerate()
            .map(|(index, sheet)| parse_sheet(sheet, index))
            .collect()
    }
}

fn parse_sheet(sheet: &Element, index: usize) -> Result<Sheet> {
    let topic = sheet.child("topic").ok_or_else(|| {
        Error::parse(
            ContentFormat::Xml,
            format!("sheet {}: missing root topic", index + 1),
        )
    })?;

    if let Some(relationships) = sheet.child("relationships") {
        log::debug!(
            "sheet {}: discarding {} relationship(s)",
            index + 1,
            relationships.children_named("relationship").count()
        );
    }

    Ok(Sheet::new(sheet.child_text("title"), parse_topic(topic)))
}

fn parse_topic(el: &Element) -> Topic {
    let mut topic = Topic::new(el.child_text("title"))
        .with_labels(labels(el))
        .with_markers(markers(el));

    if let Some(note) = el.child("notes").and_then(|notes| notes.child("plain")) {
        topic = topic.with_note(note.text());
    }
    if let Some(url) = el.attribute("href") {
        topic = topic.with_hyperlink(url);
    }

    topic.with_children(child_topics(el).map(parse_topic))
}

fn labels(el: &Element) -> impl Iterator<Item = &str> {
    el.children_named("labels")
        .flat_map(|labels| labels.children_named("label"))
        .map(Element::text)
}

fn markers(el: &Element) -> impl Iterator<Item = &str> {
    let legacy = el
        .children_named("markers")
        .flat_map(|markers| markers.children_named("marker"));
    let refs = el
        .children_named("marker-refs")
        .flat_map(|refs| refs.children_named("marker-ref"));
    legacy
        .chain(refs)
        .filter_map(|marker| marker.first_attribute(&MARKER_ID_ATTRS))
}

/// Attached and detached child topics; callout and summary groups are skipped.
fn child_topics(el: &Element) -> impl Iterator<Item = &Element> {
    el.children_named("children")
        .flat_map(|children| children.children_named("topics"))
        .filter(|topics| {
            let keep = matches!(topics.attribute("type"), None | Some("attached" | "detached"));
            if !keep {
                log::trace!(
                    "discarding {:?} topic group",
                    topics.attribute("type").unwrap_or_default()
                );
            }
            keep
        })
        .flat_map(|topics| topics.children_named("topic"))
}
