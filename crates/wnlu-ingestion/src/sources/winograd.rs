//! Winograd Schema Challenge collection reader.
//!
//! Parses the `WSCollection.xml` layout: a root element whose every child
//! is a `<schema>`:
//!
//! ```xml
//! <collection>
//!   <schema>
//!     <text><txt1>…</txt1><pron>…</pron><txt2>…</txt2></text>
//!     <quote>…</quote>
//!     <answers><answer>…</answer><answer>…</answer></answers>
//!     <correctAnswer>A</correctAnswer>
//!   </schema>
//! </collection>
//! ```

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, instrument, warn};
use wnlu_common::{Result, WnluError};

use crate::models::{parse_correct_answer, WinogradSchema};

/// Fields collected while inside one `<schema>` element.
#[derive(Default)]
struct SchemaBuilder {
    premise_a: Option<String>,
    pronoun: Option<String>,
    premise_b: Option<String>,
    answers: Vec<String>,
    correct_raw: Option<String>,
}

impl SchemaBuilder {
    fn assign(&mut self, parent: Option<&str>, name: &str, value: String) {
        match (parent, name) {
            (Some("text"), "txt1")       => self.premise_a = Some(value),
            (Some("text"), "pron")       => self.pronoun = Some(value),
            (Some("text"), "txt2")       => self.premise_b = Some(value),
            (Some("answers"), "answer")  => self.answers.push(value),
            (Some(_), "correctAnswer")   => self.correct_raw = Some(value),
            _ => {}
        }
    }

    fn finish(self, index: usize) -> Result<WinogradSchema> {
        let missing = |tag: &str| WnluError::InvalidInput(format!("schema {index} is missing <{tag}>"));
        let premise_a = self.premise_a.ok_or_else(|| missing("txt1"))?;
        let pronoun = self.pronoun.ok_or_else(|| missing("pron"))?;
        let premise_b = self.premise_b.ok_or_else(|| missing("txt2"))?;

        let correct_answer = match self.correct_raw.as_deref() {
            Some(raw) => {
                let parsed = parse_correct_answer(raw);
                if parsed.is_none() {
                    warn!(schema = index, value = raw, "Unrecognised correctAnswer");
                }
                parsed
            }
            None => {
                warn!(schema = index, "Schema has no correctAnswer");
                None
            }
        };

        Ok(WinogradSchema {
            premise_a,
            pronoun,
            premise_b,
            answers: self.answers,
            correct_answer,
        })
    }
}

/// Read and parse a collection file.
#[instrument]
pub fn load_xml(path: &Path) -> Result<Vec<WinogradSchema>> {
    let xml = std::fs::read_to_string(path)?;
    let schemata = parse_winograd_xml(&xml)?;
    debug!(count = schemata.len(), "Loaded Winograd schemata");
    Ok(schemata)
}

/// Parse collection XML into schemata, in document order.
pub fn parse_winograd_xml(xml: &str) -> Result<Vec<WinogradSchema>> {
    let mut schemata = Vec::new();
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // Open element names from the root down; a schema sits at depth 2.
    let mut path: Vec<String> = Vec::new();
    let mut current: Option<SchemaBuilder> = None;
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                if path.len() == 2 {
                    current = Some(SchemaBuilder::default());
                }
                text.clear();
            }
            Ok(Event::Empty(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if let Some(ref mut b) = current {
                    b.assign(path.last().map(String::as_str), &name, String::new());
                }
            }
            Ok(Event::Text(ref e)) => {
                let chunk = e.unescape().map_err(|err| WnluError::Xml(err.to_string()))?;
                text.push_str(&chunk);
            }
            Ok(Event::CData(ref e)) => {
                text.push_str(&String::from_utf8_lossy(e));
            }
            Ok(Event::End(_)) => {
                let name = path.pop().unwrap_or_default();
                if let Some(ref mut b) = current {
                    b.assign(path.last().map(String::as_str), &name, clean_text(&text));
                }
                if path.len() == 1 {
                    if let Some(b) = current.take() {
                        schemata.push(b.finish(schemata.len())?);
                    }
                }
                text.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(WnluError::Xml(format!(
                    "at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(schemata)
}

fn clean_text(raw: &str) -> String {
    raw.replace('\n', " ").trim().to_string()
}
