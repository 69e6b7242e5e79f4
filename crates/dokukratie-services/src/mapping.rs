//! Field mapping from metadata records to upload payloads.

use dokukratie_core::constants::CRAWLER;
use dokukratie_core::models::record::is_blank;
use dokukratie_core::{MetadataRecord, UploadPayload};
use serde_json::Value;

/// Coarse document type label of a parliamentary record.
///
/// Matches the raw `document_type` value case-sensitively: `minor` before
/// `major`, anything else is a plain "Anfrage".
pub fn classify_document_type(record: &MetadataRecord) -> &'static str {
    match record.get_str("document_type") {
        Some(t) if t.contains("minor") => "Kleine Anfrage",
        Some(t) if t.contains("major") => "Große Anfrage",
        _ => "Anfrage",
    }
}

/// Build the ingest metadata for one record.
///
/// With `ensure_reference_in_name` the record's `reference` is prepended to
/// the display name unless the name already contains it (ignoring case).
pub fn build_payload(record: &MetadataRecord, ensure_reference_in_name: bool) -> UploadPayload {
    let source_url = record
        .get_text("source_url")
        .or_else(|| record.get_text("url"));

    let foreign_id = record
        .get_text("foreign_id")
        .or_else(|| record.get_text("reference"))
        .or_else(|| record.get_text("request_id"))
        .or_else(|| source_url.clone());

    let mut name = record
        .get_text("title")
        .or_else(|| record.get_text("file_name"))
        .or_else(|| source_url.as_deref().and_then(last_segment));

    if ensure_reference_in_name {
        if let (Some(current), Some(reference)) = (name.as_mut(), record.get_text("reference")) {
            if !current.to_lowercase().contains(&reference.to_lowercase()) {
                *current = format!("{} - {}", reference, current);
            }
        }
    }

    UploadPayload {
        crawler: CRAWLER.to_string(),
        foreign_id,
        source_url,
        title: record.get_text("title"),
        name: name.clone(),
        file_name: name,
        author: record.get_text("author"),
        publisher: record.get_text("publisher:name"),
        publisher_url: record.get_text("publisher:url"),
        retrieved_at: record.get_text("retrieved_at"),
        modified_at: record.get_text("modified_at"),
        published_at: record.get_text("published_at"),
        headers: record.get("headers").and_then(Value::as_object).cloned(),
        keywords: ensure_list(record.get("keywords")),
        languages: ensure_list(record.get("languages")),
        countries: ensure_list(record.get("countries")),
        mime_type: record.get_text("mime_type"),
        parent: record.get("parent").cloned(),
    }
}

fn last_segment(url: &str) -> Option<String> {
    url.rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Scalars become one-element lists; blank entries are dropped.
fn ensure_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items: Vec<String> = match value? {
        Value::Array(items) => items
            .iter()
            .filter(|v| !is_blank(v))
            .filter_map(scalar_text)
            .collect(),
        other => scalar_text(other).into_iter().collect(),
    };
    (!items.is_empty()).then_some(items)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
