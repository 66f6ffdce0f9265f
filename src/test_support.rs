//! Fixtures shared by the unit tests.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// Build an in-memory ZIP archive from `(name, bytes)` entries.
pub(crate) fn build_package(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, data) in entries {
        writer.start_file(*name, options).expect("start entry");
        writer.write_all(data).expect("write entry");
    }
    writer.finish().expect("finish archive").into_inner()
}

/// Two-sheet mind map in XMind 2020/Zen form.
pub(crate) const SAMPLE_JSON: &str = r#"[
  {
    "id": "sheet-1",
    "class": "sheet",
    "title": "Planning",
    "rootTopic": {
      "id": "root",
      "class": "topic",
      "title": "Launch",
      "structureClass": "org.xmind.ui.logic.right",
      "href": "https://example.com/launch_(v2)",
      "labels": ["q3"],
      "notes": {
        "plain": { "content": "Ship the new site" },
        "realHTML": { "content": "<div>Ship the new site</div>" }
      },
      "children": {
        "attached": [
          {
            "id": "design",
            "title": "Design",
            "labels": ["ux"],
            "markers": [{ "markerId": "priority-1" }],
            "notes": { "plain": { "content": "Wireframes first\n\nThen mockups" } },
            "children": {
              "attached": [
                {
                  "id": "wire",
                  "title": "Wireframes",
                  "children": { "attached": [{ "id": "mobile", "title": "Mobile" }] }
                }
              ]
            }
          },
          { "id": "build", "title": "Build", "markers": [{ "markerId": "task-done" }] },
          { "id": "blank", "title": "" }
        ],
        "detached": [
          { "id": "float", "title": "Floating idea", "position": { "x": 300, "y": 20 } }
        ]
      },
      "boundaries": [{ "id": "b1", "range": "(0,1)" }]
    },
    "relationships": [{ "id": "rel", "end1Id": "design", "end2Id": "build" }]
  },
  {
    "id": "sheet-2",
    "rootTopic": { "id": "root-2", "title": "Backlog" }
  }
]"#;

/// The same mind map as [`SAMPLE_JSON`] in XMind 8 form.
pub(crate) const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<xmap-content xmlns="urn:xmind:xmap:xmlns:content:2.0" xmlns:fo="http://www.w3.org/1999/XSL/Format" xmlns:svg="http://www.w3.org/2000/svg" xmlns:xhtml="http://www.w3.org/1999/xhtml" xmlns:xlink="http://www.w3.org/1999/xlink" modified-by="me" timestamp="1700000000000" version="2.0">
  <sheet id="sheet-1" theme="t1">
    <topic id="root" structure-class="org.xmind.ui.logic.right" xlink:href="https://example.com/launch_(v2)">
      <title>Launch</title>
      <labels><label>q3</label></labels>
      <notes>
        <html><xhtml:p>Ship the new site</xhtml:p></html>
        <plain>Ship the new site</plain>
      </notes>
      <children>
        <topics type="attached">
          <topic id="design">
            <title>Design</title>
            <marker-refs><marker-ref marker-id="priority-1"/></marker-refs>
            <labels><label>ux</label></labels>
            <notes><plain>Wireframes first&#10;&#10;Then mockups</plain></notes>
            <children>
              <topics type="attached">
                <topic id="wire">
                  <title>Wireframes</title>
                  <children><topics type="attached"><topic id="mobile"><title>Mobile</title></topic></topics></children>
                </topic>
              </topics>
            </children>
          </topic>
          <topic id="build">
            <title>Build</title>
            <marker-refs><marker-ref marker-id="task-done"/></marker-refs>
          </topic>
          <topic id="blank"><title/></topic>
        </topics>
        <topics type="detached">
          <topic id="float"><position svg:x="300" svg:y="20"/><title>Floating idea</title></topic>
        </topics>
      </children>
      <boundaries><boundary id="b1" range="(0,1)"/></boundaries>
    </topic>
    <title>Planning</title>
    <relationships>
      <relationship end1="design" end2="build" id="rel"/>
    </relationships>
  </sheet>
  <sheet id="sheet-2">
    <topic id="root-2"><title>Backlog</title></topic>
  </sheet>
</xmap-content>"#;
