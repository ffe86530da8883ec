//! Decoding of place-search responses into a [`SuggestionList`].
//!
//! The search endpoint answers either with a bare JSON array of candidates or
//! with an object wrapping them as `{ "suggestions": [...] }`. Any other shape
//! is rejected. Each candidate must carry a string `display_name`; candidates
//! without one are skipped. `lat`/`lon` may be numbers or numeric strings, and
//! a candidate is resolved only when both parse to finite values.

use serde_json::Value;

use crate::types::{Place, SuggestionList, WeatherError};

pub fn decode_suggestions(body: Value) -> Result<SuggestionList, WeatherError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("suggestions") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(WeatherError::Parse(
                    "Autocomplete response has no suggestions array".to_string(),
                ))
            }
        },
        other => {
            return Err(WeatherError::Parse(format!(
                "Unexpected autocomplete response: {}",
                json_type(&other)
            )))
        }
    };

    Ok(items.iter().filter_map(decode_candidate).collect())
}

fn decode_candidate(item: &Value) -> Option<Place> {
    let label = item.get("display_name")?.as_str()?.trim();
    if label.is_empty() {
        return None;
    }

    let lat = item.get("lat").and_then(coordinate);
    let lon = item.get("lon").and_then(coordinate);

    Some(match (lat, lon) {
        (Some(lat), Some(lon)) => Place::resolved(label, lat, lon),
        _ => Place::unresolved(label),
    })
}

fn coordinate(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let list = decode_suggestions(json!([
            { "display_name": "Berlin, Germany", "lat": 52.52, "lon": 13.405 },
            { "display_name": "Bern, Switzerland" }
        ]))
        .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], Place::resolved("Berlin, Germany", 52.52, 13.405));
        assert_eq!(list[1], Place::unresolved("Bern, Switzerland"));
    }

    #[test]
    fn test_wrapped_object() {
        let list = decode_suggestions(json!({
            "suggestions": [{ "display_name": "Oslo, Norway", "lat": "59.91", "lon": "10.75" }]
        }))
        .unwrap();

        assert_eq!(list.len(), 1);
        assert!(list[0].is_resolved());
        let coords = list[0].coordinates.unwrap();
        assert!((coords.lat - 59.91).abs() < 1e-9);
    }

    #[test]
    fn test_preserves_server_order() {
        let list = decode_suggestions(json!([
            { "display_name": "C" },
            { "display_name": "A" },
            { "display_name": "B" }
        ]))
        .unwrap();
        let labels: Vec<&str> = list.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["C", "A", "B"]);
    }

    #[test]
    fn test_skips_candidates_without_label() {
        let list = decode_suggestions(json!([
            { "lat": 1.0, "lon": 2.0 },
            { "display_name": "" },
            { "display_name": 42 },
            { "display_name": "Rome, Italy" }
        ]))
        .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].label, "Rome, Italy");
    }

    #[test]
    fn test_partial_or_bad_coordinates_are_unresolved() {
        let list = decode_suggestions(json!([
            { "display_name": "Only lat", "lat": 10.0 },
            { "display_name": "Junk", "lat": "north", "lon": "east" }
        ]))
        .unwrap();
        assert!(list.iter().all(|p| !p.is_resolved()));
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(matches!(
            decode_suggestions(json!({ "error": "nope" })),
            Err(WeatherError::Parse(_))
        ));
        assert!(matches!(
            decode_suggestions(json!("Paris")),
            Err(WeatherError::Parse(_))
        ));
    }
}
