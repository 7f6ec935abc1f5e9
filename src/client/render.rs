use std::fmt;

use serde_json::Value;

/// How many entities and topics make it into the report.
const MAX_ITEMS: usize = 5;

/// Projection of a provider response into the fields the UI shows.
///
/// The provider's JSON is otherwise opaque; only `entities[].entityId`,
/// `topics[].label` and the optional `summary`/`language` fields are read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub entities: String,
    pub topics: String,
    pub summary: Option<String>,
    pub language: Option<String>,
}

impl Report {
    /// Build a report from the provider's JSON.
    ///
    /// Takes the first five entity ids and topic labels in provider order,
    /// joined with ", ". A field that is absent, not a list, or empty renders
    /// as the literal "None".
    pub fn from_response(response: &Value) -> Self {
        Report {
            entities: joined_field(response, "entities", "entityId"),
            topics: joined_field(response, "topics", "label"),
            summary: string_field(response, "summary"),
            language: string_field(response, "language"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Entities: {}", self.entities)?;
        writeln!(f, "Topics: {}", self.topics)?;
        if let Some(summary) = &self.summary {
            writeln!(f, "Summary: {}", summary)?;
        }
        if let Some(language) = &self.language {
            writeln!(f, "Language: {}", language)?;
        }
        Ok(())
    }
}

fn joined_field(response: &Value, field: &str, key: &str) -> String {
    let items: Vec<&str> = response
        .get(field)
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|item| item.get(key).and_then(Value::as_str))
                .take(MAX_ITEMS)
                .collect()
        })
        .unwrap_or_default();

    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

fn string_field(response: &Value, field: &str) -> Option<String> {
    response.get(field).and_then(Value::as_str).map(str::to_owned)
}
