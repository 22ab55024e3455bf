//! BSON parsing utilities for converting between formats.

use mongodb::bson::{self, Bson, Document};
use serde_json::Value;

/// Parse a filter string into a BSON document.
///
/// Accepts relaxed shell-style JSON (unquoted keys, single quotes) so filters
/// can be typed the way mongosh accepts them. An empty input means "no
/// filter".
pub fn parse_filter_from_relaxed_json(input: &str) -> Result<Option<Document>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = json5::from_str(trimmed).map_err(|e| e.to_string())?;
    let parsed = bson::Bson::try_from(value).map_err(|e| e.to_string())?;
    match parsed {
        Bson::Document(doc) => Ok(Some(doc)),
        _ => Err("Filter must be a JSON object".to_string()),
    }
}

/// Convert a BSON document to a pretty-printed relaxed Extended JSON string.
pub fn document_to_relaxed_extjson_string(doc: &Document) -> String {
    let value = Bson::Document(doc.clone()).into_relaxed_extjson();
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| format!("{doc:?}"))
}

/// Convert a BSON document to a compact relaxed Extended JSON string.
pub fn document_to_relaxed_extjson_compact(doc: &Document) -> String {
    Bson::Document(doc.clone()).into_relaxed_extjson().to_string()
}

#[cfg(test)]
mod tests {
    use mongodb::bson::doc;

    use super::*;

    #[test]
    fn test_parse_empty_filter_is_none() {
        assert_eq!(parse_filter_from_relaxed_json("").unwrap(), None);
        assert_eq!(parse_filter_from_relaxed_json("   \n").unwrap(), None);
    }

    #[test]
    fn test_parse_relaxed_shell_syntax() {
        let parsed = parse_filter_from_relaxed_json("{ status: 'active', age: { $gte: 21 } }")
            .unwrap()
            .unwrap();
        assert_eq!(parsed, doc! { "status": "active", "age": { "$gte": 21 } });
    }

    #[test]
    fn test_parse_strict_json_still_works() {
        let parsed =
            parse_filter_from_relaxed_json(r#"{ "name": "test" }"#).unwrap().unwrap();
        assert_eq!(parsed, doc! { "name": "test" });
    }

    #[test]
    fn test_parse_rejects_non_object_roots() {
        assert!(parse_filter_from_relaxed_json("[1, 2]").is_err());
        assert!(parse_filter_from_relaxed_json("42").is_err());
        assert!(parse_filter_from_relaxed_json("{ broken").is_err());
    }

    #[test]
    fn test_extjson_round_trip_is_readable() {
        let doc = doc! { "status": "active", "count": 3_i64 };
        let pretty = document_to_relaxed_extjson_string(&doc);
        assert!(pretty.contains("\"status\""));
        assert!(pretty.contains("active"));
        let compact = document_to_relaxed_extjson_compact(&doc);
        assert!(!compact.contains('\n'));
    }
}
