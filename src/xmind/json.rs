//! XMind 2020/Zen `content.json` parser.
//!
//! The file is either an array of sheet objects, an object wrapping such an
//! array under `sheets`, or a single sheet object carrying `rootTopic`. Fields
//! the outline does not use (styles, relationships, extensions, ...) are
//! accepted and dropped.

use super::ParseToOutline;
use crate::common::format::ContentFormat;
use crate::common::{Error, Result};
use crate::model::{Sheet, Topic};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Parser for `content.json`.
pub struct JsonParser;

impl ParseToOutline for JsonParser {
    const FORMAT: ContentFormat = ContentFormat::Json;

    fn parse_sheets(data: &[u8]) -> Result<Vec<Sheet>> {
        // Every topic level is three JSON levels deep; lift serde_json's limit of 128.
        let mut deserializer = serde_json::Deserializer::from_slice(data);
        deserializer.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;

        let raw_sheets = match value {
            Value::Array(sheets) => sheets,
            Value::Object(mut map) => {
                if let Some(sheets) = map.remove("sheets") {
                    match sheets {
                        Value::Array(sheets) => sheets,
                        _ => {
                            return Err(Error::parse(Self::FORMAT, "\"sheets\" is not an array"));
                        },
                    }
                } else if map.contains_key("rootTopic") {
                    vec![Value::Object(map)]
                } else {
                    return Err(Error::parse(
                        Self::FORMAT,
                        "unrecognized structure: expected an array of sheets",
                    ));
                }
            },
            _ => {
                return Err(Error::parse(
                    Self::FORMAT,
                    "unrecognized structure: expected an array of sheets",
                ));
            },
        };

        raw_sheets
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let raw = RawSheet::deserialize(serde_stacker::Deserializer::new(value))
                    .map_err(|e| {
                        Error::parse(Self::FORMAT, format!("sheet {}: {}", index + 1, e))
                    })?;
                raw.into_sheet(index)
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct RawSheet {
    #[serde(default)]
    title: Option<Value>,
    #[serde(default, rename = "rootTopic")]
    root_topic: Option<RawTopic>,
    #[serde(default)]
    relationships: Option<Value>,
}

impl RawSheet {
    fn into_sheet(self, index: usize) -> Result<Sheet> {
        let root = self.root_topic.ok_or_else(|| {
            Error::parse(
                ContentFormat::Json,
                format!("sheet {}: missing root topic", index + 1),
            )
        })?;
        if let Some(Value::Array(relationships)) = &self.relationships
            && !relationships.is_empty()
        {
            log::debug!(
                "sheet {}: discarding {} relationship(s)",
                index + 1,
                relationships.len()
            );
        }
        let title = self.title.as_ref().and_then(scalar_text).unwrap_or_default();
        Ok(Sheet::new(title, root.into_topic()))
    }
}

/// A topic as stored in `content.json`.
///
/// Annotation fields are kept as raw values and read leniently: an entry of
/// an unexpected shape is skipped instead of failing the whole document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTopic {
    title: Option<Value>,
    children: Option<RawChildren>,
    notes: Option<Value>,
    labels: Option<Value>,
    markers: Option<Value>,
    #[serde(rename = "marker-refs", alias = "markerRefs")]
    marker_refs: Option<Value>,
    hyperlink: Option<Value>,
    href: Option<Value>,
    boundaries: Option<Value>,
    summaries: Option<Value>,
}

impl RawTopic {
    fn into_topic(self) -> Topic {
        let discarded: usize = [&self.boundaries, &self.summaries]
            .into_iter()
            .flatten()
            .filter_map(Value::as_array)
            .map(Vec::len)
            .sum();
        if discarded > 0 {
            log::trace!("discarding {} boundary/summary item(s)", discarded);
        }

        let markers: Vec<String> = [self.markers, self.marker_refs]
            .iter()
            .flatten()
            .flat_map(marker_ids)
            .collect();

        let title = self.title.as_ref().and_then(scalar_text).unwrap_or_default();
        let mut topic = Topic::new(title)
            .with_labels(self.labels.as_ref().map(label_texts).unwrap_or_default())
            .with_markers(markers);

        if let Some(note) = self.notes.as_ref().and_then(note_text) {
            topic = topic.with_note(note);
        }
        let url = [self.hyperlink, self.href]
            .into_iter()
            .flatten()
            .find_map(|value| value.as_str().map(str::to_owned));
        if let Some(url) = url {
            topic = topic.with_hyperlink(url);
        }

        match self.children {
            Some(children) => topic.with_children(
                children
                    .attached
                    .into_iter()
                    .chain(children.detached)
                    .flatten()
                    .map(RawTopic::into_topic),
            ),
            None => topic,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawChildren {
    attached: Option<Vec<RawTopic>>,
    detached: Option<Vec<RawTopic>>,
}

/// Text of a string, number or boolean; `None` for anything structured.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Plain note text: either a bare string or `{"plain": {"content": ...}}`.
fn note_text(notes: &Value) -> Option<String> {
    match notes {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => match map.get("plain")? {
            Value::String(text) => Some(text.clone()),
            Value::Object(plain) => plain.get("content")?.as_str().map(str::to_owned),
            _ => None,
        },
        _ => None,
    }
}

/// Labels from `[...]` or `{"labels": [...]}`; scalar entries are kept as text.
fn label_texts(labels: &Value) -> Vec<String> {
    let entries = match labels {
        Value::Array(entries) => entries,
        Value::Object(map) => match map.get("labels") {
            Some(Value::Array(entries)) => entries,
            _ => return Vec::new(),
        },
        Value::String(label) => return vec![label.clone()],
        _ => return Vec::new(),
    };
    entries.iter().filter_map(scalar_text).collect()
}

/// Marker ids from a list of strings or `{"markerId"|"id"|"marker-id": ...}` objects.
fn marker_ids(markers: &Value) -> Vec<String> {
    let Value::Array(entries) = markers else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(id) => Some(id.clone()),
            Value::Object(map) => object_marker_id(map),
            _ => None,
        })
        .collect()
}

fn object_marker_id(map: &Map<String, Value>) -> Option<String> {
    ["markerId", "id", "marker-id"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheets(json: &str) -> Vec<Sheet> {
        JsonParser::parse_sheets(json.as_bytes()).unwrap()
    }

    #[test]
    fn test_array_of_sheets() {
        let parsed = sheets(
            r#"[{"title":"S1","rootTopic":{"title":"Root","children":{"attached":[
                {"title":"A"},{"title":"B","children":{"attached":[{"title":"B1"}]}}
            ]}}}]"#,
        );
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title(), "S1");
        let root = parsed[0].root();
        assert_eq!(root.title(), "Root");
        let titles: Vec<_> = root.children().iter().map(Topic::title).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(root.children()[1].children()[0].title(), "B1");
    }

    #[test]
    fn test_wrapped_and_single_sheet_shapes() {
        let wrapped = sheets(r#"{"sheets":[{"rootTopic":{"title":"R"}}]}"#);
        assert_eq!(wrapped[0].root().title(), "R");
        let single = sheets(r#"{"title":"Only","rootTopic":{"title":"R"}}"#);
        assert_eq!(single[0].title(), "Only");
    }

    #[test]
    fn test_annotations() {
        let parsed = sheets(
            r#"[{"rootTopic":{"title":"R","children":{"attached":[{
                "title":"T",
                "notes":{"plain":{"content":"line 1\nline 2"},"realHTML":{"content":"<p/>"}},
                "labels":["l1","l2"],
                "markers":[{"markerId":"priority-1"},"flag-red"],
                "marker-refs":[{"id":"task-done"}],
                "hyperlink":"https://example.com/a_(b)"
            }]}}}]"#,
        );
        let topic = &parsed[0].root().children()[0];
        assert_eq!(topic.note(), Some("line 1\nline 2"));
        assert_eq!(topic.labels(), ["l1", "l2"]);
        assert_eq!(topic.markers(), ["priority-1", "flag-red", "task-done"]);
        assert_eq!(topic.hyperlink(), Some("https://example.com/a_(b)"));
    }

    #[test]
    fn test_alternate_annotation_shapes() {
        let parsed = sheets(
            r#"[{"rootTopic":{"title":"R","notes":"plain note",
                "labels":{"labels":["x"]},"href":"http://h.example"}}]"#,
        );
        let root = parsed[0].root();
        assert_eq!(root.note(), Some("plain note"));
        assert_eq!(root.labels(), ["x"]);
        assert_eq!(root.hyperlink(), Some("http://h.example"));
    }

    #[test]
    fn test_detached_children_follow_attached() {
        let parsed = sheets(
            r#"[{"rootTopic":{"title":"R","children":{
                "detached":[{"title":"floating"}],
                "attached":[{"title":"first"}],
                "callout":[{"title":"ignored"}]}}}]"#,
        );
        let titles: Vec<_> = parsed[0].root().children().iter().map(Topic::title).collect();
        assert_eq!(titles, vec!["first", "floating"]);
    }

    #[test]
    fn test_missing_and_null_titles_default_to_empty() {
        let parsed = sheets(
            r#"[{"rootTopic":{"children":{"attached":[{"title":null},{"labels":["only"]}]}}}]"#,
        );
        let root = parsed[0].root();
        assert_eq!(root.title(), "");
        assert_eq!(root.children()[0].title(), "");
        assert_eq!(root.children()[1].labels(), ["only"]);
    }

    #[test]
    fn test_unknown_fields_and_relationships_are_ignored() {
        let parsed = sheets(
            r#"[{"id":"s","class":"sheet","theme":{"x":1},
                "relationships":[{"end1Id":"a","end2Id":"b"}],
                "rootTopic":{"id":"a","structureClass":"org.xmind.ui.map","title":"R",
                "boundaries":[{"range":"(0,1)"}],"summaries":[{"range":"(0,0)"}]}}]"#,
        );
        assert_eq!(parsed[0].root().title(), "R");
    }

    #[test]
    fn test_empty_array_has_no_sheets() {
        assert!(sheets("[]").is_empty());
    }

    #[test]
    fn test_structural_errors() {
        for input in [r#""text""#, "42", r#"{"foo":1}"#, r#"{"sheets":{}}"#, "{not json"] {
            let err = JsonParser::parse_sheets(input.as_bytes()).unwrap_err();
            assert!(
                matches!(
                    err,
                    Error::Parse {
                        format: ContentFormat::Json,
                        ..
                    }
                ),
                "{input}: {err:?}"
            );
        }
    }

    #[test]
    fn test_unexpected_annotation_shapes_are_skipped() {
        let parsed = sheets(
            r#"[{"title":7,"relationships":"none","rootTopic":{"title":"R","boundaries":{"x":1},
                "labels":[1,"x",null,{"a":1},true],
                "markers":[{"markerId":"flag-red"},3,["nested"],{"other":"y"}],
                "marker-refs":"not-a-list",
                "notes":{"html":"<p/>"},
                "hyperlink":42}}]"#,
        );
        assert_eq!(parsed[0].title(), "7");
        let root = parsed[0].root();
        assert_eq!(root.labels(), ["1", "x", "true"]);
        assert_eq!(root.markers(), ["flag-red"]);
        assert_eq!(root.note(), None);
        assert_eq!(root.hyperlink(), None);
    }

    #[test]
    fn test_notes_fall_back_to_absent() {
        for notes in [r#"5"#, r#"[]"#, r#"{"plain":null}"#, r#"{"plain":{"content":3}}"#] {
            let json = format!(r#"[{{"rootTopic":{{"title":"R","notes":{notes}}}}}]"#);
            assert_eq!(sheets(&json)[0].root().note(), None, "{notes}");
        }
        let bare = sheets(r#"[{"rootTopic":{"title":"R","notes":{"plain":"short"}}}]"#);
        assert_eq!(bare[0].root().note(), Some("short"));
    }

    #[test]
    fn test_nesting_beyond_default_recursion_limit() {
        let depth = 200;
        let mut json = String::from(r#"[{"rootTopic":{"title":"R""#);
        for level in 1..=depth {
            json.push_str(&format!(r#","children":{{"attached":[{{"title":"T{level}""#));
        }
        json.push_str(&"}]}".repeat(depth));
        json.push_str("}}]");

        let parsed = sheets(&json);
        let deepest = parsed[0].root().walk().map(|(d, _)| d).max();
        assert_eq!(deepest, Some(depth));
    }

    #[test]
    fn test_missing_root_topic_is_error() {
        let err = JsonParser::parse_sheets(br#"[{"title":"S"}]"#).unwrap_err();
        assert!(err.to_string().contains("missing root topic"));
    }
}
