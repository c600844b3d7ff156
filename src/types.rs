//! Input and output types for the insight pipeline.

use serde::{Deserialize, Serialize};

/// A calendar event as the caller hands it to the pipeline.
///
/// Immutable input. `start_time` stays a raw string and is parsed on use,
/// so a malformed timestamp can never fail construction; it degrades at
/// formatting time instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDescriptor {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_time: String,
}

/// The generated summary + suggestions pair for one event.
///
/// Both fields are non-empty once the pipeline returns. The summary ends in
/// terminal punctuation and stays within the 200-character bound; the
/// suggestions string joins at most three fragments. The caller persists the
/// pair as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub summary: String,
    pub suggestions: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_descriptor_from_wire_json() {
        let json = r#"{
            "title": "Team Standup",
            "description": "Daily sync",
            "startTime": "2026-02-08T09:00:00-05:00"
        }"#;

        let event: EventDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "Team Standup");
        assert_eq!(event.description, "Daily sync");
        assert_eq!(event.start_time, "2026-02-08T09:00:00-05:00");
    }

    #[test]
    fn test_event_descriptor_description_defaults_empty() {
        let json = r#"{"title": "Dentist", "startTime": "2026-02-08"}"#;

        let event: EventDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(event.description, "");
    }

    #[test]
    fn test_insight_serializes_camel_case() {
        let insight = Insight {
            summary: "A summary.".to_string(),
            suggestions: "A suggestion.".to_string(),
        };

        let json = serde_json::to_value(&insight).unwrap();
        assert!(json.get("summary").is_some());
        assert!(json.get("suggestions").is_some());
    }
}
