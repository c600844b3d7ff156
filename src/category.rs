//! Keyword-driven event categories for the deterministic content builder.
//!
//! Categories decide which summary sentence and preparation tips an event
//! gets. Matching is first-hit-wins over the lower-cased title, in table
//! order; anything unmatched is `General`.

/// Event categories in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Meeting,
    Interview,
    Presentation,
    Appointment,
    Fitness,
    Social,
    Travel,
    Deadline,
    Meal,
    General,
}

impl EventCategory {
    /// Lower-case label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Meeting => "meeting",
            EventCategory::Interview => "interview",
            EventCategory::Presentation => "presentation",
            EventCategory::Appointment => "appointment",
            EventCategory::Fitness => "fitness",
            EventCategory::Social => "social",
            EventCategory::Travel => "travel",
            EventCategory::Deadline => "deadline",
            EventCategory::Meal => "meal",
            EventCategory::General => "general",
        }
    }
}

/// Category keyword table, scanned in order. `General` carries no keywords;
/// it is the fallback for titles nothing here matches.
pub const CATEGORY_KEYWORDS: &[(EventCategory, &[&str])] = &[
    (EventCategory::Meeting, &["meeting", "call", "zoom"]),
    (EventCategory::Interview, &["interview"]),
    (EventCategory::Presentation, &["presentation", "demo"]),
    (EventCategory::Appointment, &["appointment", "doctor", "dentist"]),
    (EventCategory::Fitness, &["workout", "gym", "exercise"]),
    (EventCategory::Social, &["party", "celebration"]),
    (EventCategory::Travel, &["travel", "flight", "trip"]),
    (EventCategory::Deadline, &["deadline", "due"]),
    (EventCategory::Meal, &["lunch", "dinner", "meal"]),
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Classify an event title into a category. Case-insensitive substring
/// match; the first table row with a hit wins.
pub fn classify_category(title: &str) -> EventCategory {
    let title_lower = title.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if contains_any(&title_lower, keywords) {
            return *category;
        }
    }
    EventCategory::General
}
