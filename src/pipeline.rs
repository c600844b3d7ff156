//! Insight pipeline: remote summary when possible, deterministic always.
//!
//! The public contract is total. If the remote backend produces nothing
//! usable, the deterministic builder fills in, so the caller always gets a
//! complete `Insight` built from the event's own fields.

use crate::classify::Classification;
use crate::compose;
use crate::remote::HuggingFaceClient;
use crate::types::{EventDescriptor, Insight};

/// Both insight fields must exceed this many characters for a remote-backed
/// result to be accepted.
pub const MIN_FIELD_CHARS: usize = 20;

/// Generate an insight for one event.
///
/// Classification happens once here and is threaded through both builders,
/// so the summary and suggestions never disagree about whether the event is
/// a birthday. Pass `None` for `remote` to run fully offline.
pub async fn generate_insight(
    remote: Option<&HuggingFaceClient>,
    event: &EventDescriptor,
) -> Insight {
    let classification = Classification::of(&event.title, &event.description);

    if let Some(client) = remote {
        if let Some(summary) = client.summarize(event, &classification).await {
            let suggestions = compose::suggestions(event, &classification);
            if meets_quality(&summary, &suggestions) {
                return Insight {
                    summary,
                    suggestions,
                };
            }
            log::info!(
                "remote summary for {:?} failed the final quality check, regenerating",
                event.title
            );
        } else {
            log::info!(
                "no usable remote summary for {:?}, using deterministic content",
                event.title
            );
        }
    }

    Insight {
        summary: compose::summary(event, &classification),
        suggestions: compose::suggestions(event, &classification),
    }
}

fn meets_quality(summary: &str, suggestions: &str) -> bool {
    summary.chars().count() > MIN_FIELD_CHARS && suggestions.chars().count() > MIN_FIELD_CHARS
}
