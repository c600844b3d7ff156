//! Deterministic summary and suggestion builder.
//!
//! This is the always-available path: pure string assembly from the event's
//! own fields, so every event gets an insight even with no model configured
//! or reachable. Birthdays get dedicated phrasing; everything else goes
//! through the category table.

use chrono::{Local, NaiveDate};

use crate::category::{classify_category, EventCategory};
use crate::classify::Classification;
use crate::timefmt::{
    day_urgency, format_event_date, format_event_time, parse_start_time, DayUrgency,
    UNSPECIFIED_DATE, UNSPECIFIED_TIME,
};
use crate::types::{EventDescriptor, Insight};
use crate::util::truncate_with_ellipsis;

/// Hard ceiling on summary length, shared with the model-backed path.
pub const MAX_SUMMARY_CHARS: usize = 200;

const TIP_TODAY: &str = "This event is today - make sure you're prepared and ready!";
const TIP_TOMORROW: &str = "This event is tomorrow - set a reminder and prepare tonight.";
const TIP_UPCOMING: &str = "Set a reminder 15-30 minutes before the event starts.";

/// Build a full insight for an event without any remote model.
pub fn generate(event: &EventDescriptor) -> Insight {
    let classification = Classification::of(&event.title, &event.description);
    Insight {
        summary: summary(event, &classification),
        suggestions: suggestions(event, &classification),
    }
}

/// One-sentence summary, capped at [`MAX_SUMMARY_CHARS`].
pub fn summary(event: &EventDescriptor, classification: &Classification) -> String {
    let start = parse_start_time(&event.start_time);
    let date_str = start
        .as_ref()
        .map(format_event_date)
        .unwrap_or_else(|| UNSPECIFIED_DATE.to_string());
    let time_str = start
        .as_ref()
        .map(format_event_time)
        .unwrap_or_else(|| UNSPECIFIED_TIME.to_string());

    let text = if classification.is_birthday {
        birthday_summary(event, classification, &date_str, &time_str)
    } else {
        let category = classify_category(&event.title);
        log::debug!("event {:?} categorized as {}", event.title, category.label());
        category_summary(event, category, &date_str, &time_str)
    };

    truncate_with_ellipsis(&text, MAX_SUMMARY_CHARS)
}

fn birthday_summary(
    event: &EventDescriptor,
    classification: &Classification,
    date_str: &str,
    time_str: &str,
) -> String {
    match &classification.person_name {
        Some(name) => format!(
            "{}'s birthday celebration on {} at {} - a special day to show love, bring joy, and create lasting memories together.",
            name, date_str, time_str
        ),
        None => format!(
            "Birthday celebration \"{}\" on {} at {} - a wonderful opportunity to celebrate life, share happiness, and make someone feel truly special.",
            event.title, date_str, time_str
        ),
    }
}

fn category_summary(
    event: &EventDescriptor,
    category: EventCategory,
    date_str: &str,
    time_str: &str,
) -> String {
    let title = &event.title;
    match category {
        EventCategory::Meeting => format!(
            "Professional meeting \"{}\" scheduled for {} at {} - prepare agenda and materials.",
            title, date_str, time_str
        ),
        EventCategory::Interview => format!(
            "Important interview \"{}\" on {} at {} - research company and practice responses.",
            title, date_str, time_str
        ),
        EventCategory::Presentation => format!(
            "Presentation event \"{}\" happening {} at {} - rehearse content and test equipment.",
            title, date_str, time_str
        ),
        EventCategory::Appointment => format!(
            "Healthcare appointment \"{}\" scheduled for {} at {} - bring documents and insurance.",
            title, date_str, time_str
        ),
        EventCategory::Fitness => format!(
            "Fitness activity \"{}\" planned for {} at {} - stay hydrated and bring gear.",
            title, date_str, time_str
        ),
        EventCategory::Social => format!(
            "Social celebration \"{}\" on {} at {} - bring positive energy and enjoy the moment.",
            title, date_str, time_str
        ),
        EventCategory::Travel => format!(
            "Travel event \"{}\" departing {} at {} - check documents and arrive early.",
            title, date_str, time_str
        ),
        EventCategory::Deadline => format!(
            "Important deadline \"{}\" on {} at {} - prioritize completion and quality.",
            title, date_str, time_str
        ),
        EventCategory::Meal => format!(
            "Dining event \"{}\" scheduled for {} at {} - enjoy good food and company.",
            title, date_str, time_str
        ),
        EventCategory::General => format!(
            "Event \"{}\" taking place on {} at {} - allocate time and prepare accordingly.",
            title, date_str, time_str
        ),
    }
}

/// Actionable preparation tips, at most three sentences joined by spaces.
pub fn suggestions(event: &EventDescriptor, classification: &Classification) -> String {
    suggestions_on(event, classification, Local::now().date_naive())
}

/// [`suggestions`] with an injectable "today" for deterministic tests.
pub fn suggestions_on(
    event: &EventDescriptor,
    classification: &Classification,
    today: NaiveDate,
) -> String {
    let event_date = parse_start_time(&event.start_time).map(|dt| dt.date_naive());
    let urgency = day_urgency(event_date, today);

    let mut tips: Vec<String> = Vec::new();
    tips.push(
        match urgency {
            DayUrgency::Today => TIP_TODAY,
            DayUrgency::Tomorrow => TIP_TOMORROW,
            DayUrgency::Upcoming => TIP_UPCOMING,
        }
        .to_string(),
    );

    if classification.is_birthday {
        birthday_tips(&mut tips, classification.person_name.as_deref(), urgency);
    } else {
        let category = classify_category(&event.title);
        category_tips(&mut tips, category);
        if tips.len() < 2 {
            tips.push("Take a moment to mentally prepare and set positive intentions.".to_string());
            tips.push(
                "Add this event to your phone's calendar with notifications enabled.".to_string(),
            );
        }
    }

    tips.truncate(3);
    tips.join(" ")
}

fn birthday_tips(tips: &mut Vec<String>, person_name: Option<&str>, urgency: DayUrgency) {
    match person_name {
        Some(name) => {
            tips.push(format!(
                "Don't forget to get a thoughtful gift for {} - consider their interests and hobbies.",
                name
            ));
            tips.push(format!(
                "Plan something special to make {} feel celebrated - maybe their favorite cake or activity.",
                name
            ));
            tips.push(
                "Reach out to other friends/family to coordinate the celebration and make it memorable."
                    .to_string(),
            );
        }
        None => {
            tips.push(
                "Prepare a thoughtful gift that shows you care about this special person."
                    .to_string(),
            );
            tips.push(
                "Consider bringing a birthday cake, flowers, or planning a surprise element."
                    .to_string(),
            );
            tips.push(
                "Capture the special moments - birthdays are perfect for creating lasting memories."
                    .to_string(),
            );
        }
    }

    // Day-of extras land after the base tips; the final truncation keeps the
    // list at three.
    match urgency {
        DayUrgency::Today => tips.push(
            "It's birthday day! Make sure to wish them well and bring your positive energy."
                .to_string(),
        ),
        DayUrgency::Tomorrow => tips.push(
            "Last chance to get a gift if you haven't already - consider online delivery or local stores."
                .to_string(),
        ),
        DayUrgency::Upcoming => {}
    }
}

fn category_tips(tips: &mut Vec<String>, category: EventCategory) {
    let pair: [&str; 2] = match category {
        EventCategory::Meeting => [
            "Test your audio/video setup and prepare an agenda beforehand.",
            "Review any shared documents or materials in advance.",
        ],
        EventCategory::Interview => [
            "Research the company and prepare answers to common questions.",
            "Plan your outfit and arrive 10 minutes early for best impression.",
        ],
        EventCategory::Presentation => [
            "Practice your presentation and test all technical equipment.",
            "Prepare for potential questions from the audience.",
        ],
        EventCategory::Appointment => [
            "Bring necessary documents, insurance cards, and valid ID.",
            "Prepare a list of questions or concerns to discuss.",
        ],
        EventCategory::Fitness => [
            "Pack your workout clothes, water bottle, and towel.",
            "Have a light snack 30 minutes before if needed.",
        ],
        EventCategory::Social => [
            "Don't forget to bring a gift if appropriate for the occasion.",
            "Charge your phone for photos and create lasting memories.",
        ],
        EventCategory::Travel => [
            "Check in online and verify your travel documents are current.",
            "Pack essentials and arrive at the airport with plenty of time.",
        ],
        EventCategory::Deadline => [
            "Break down remaining tasks and prioritize the most critical ones.",
            "Double-check your work for quality and completeness.",
        ],
        // Meals share the general pair; no meal-specific tips exist.
        EventCategory::Meal | EventCategory::General => [
            "Review the event details and prepare any necessary materials.",
            "Confirm the location and plan your route in advance.",
        ],
    };
    tips.push(pair[0].to_string());
    tips.push(pair[1].to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(title: &str, start_time: &str) -> EventDescriptor {
        EventDescriptor {
            title: title.to_string(),
            description: String::new(),
            start_time: start_time.to_string(),
        }
    }

    fn pinned_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    #[test]
    fn test_generate_is_deterministic() {
        let event = make_event("Dentist Appointment", "2026-09-15T15:00:00Z");
        assert_eq!(generate(&event), generate(&event));
    }

    #[test]
    fn test_category_summary_exact() {
        let event = make_event("Dentist Appointment", "2026-09-15T15:00:00Z");
        let cls = Classification::of(&event.title, &event.description);
        assert_eq!(
            summary(&event, &cls),
            "Healthcare appointment \"Dentist Appointment\" scheduled for Tuesday, September 15 at 3:00 PM - bring documents and insurance."
        );
    }

    #[test]
    fn test_category_suggestions_exact() {
        let event = make_event("Dentist Appointment", "2026-09-15T15:00:00Z");
        let cls = Classification::of(&event.title, &event.description);
        assert_eq!(
            suggestions_on(&event, &cls, pinned_today()),
            format!(
                "{} {} {}",
                TIP_UPCOMING,
                "Bring necessary documents, insurance cards, and valid ID.",
                "Prepare a list of questions or concerns to discuss."
            )
        );
    }

    #[test]
    fn test_birthday_summary_with_name() {
        let event = make_event("John's Birthday", "2026-09-15T18:00:00Z");
        let cls = Classification::of(&event.title, &event.description);
        assert_eq!(
            summary(&event, &cls),
            "John's birthday celebration on Tuesday, September 15 at 6:00 PM - a special day to show love, bring joy, and create lasting memories together."
        );
    }

    #[test]
    fn test_birthday_summary_without_name() {
        let event = make_event("Office celebration", "2026-09-15T18:00:00Z");
        let cls = Classification::of(&event.title, &event.description);
        assert!(cls.is_birthday);
        assert_eq!(cls.person_name, None);
        assert_eq!(
            summary(&event, &cls),
            "Birthday celebration \"Office celebration\" on Tuesday, September 15 at 6:00 PM - a wonderful opportunity to celebrate life, share happiness, and make someone feel truly special."
        );
    }

    #[test]
    fn test_unparseable_start_uses_placeholders() {
        let event = make_event("Errands", "whenever");
        let cls = Classification::of(&event.title, &event.description);
        assert_eq!(
            summary(&event, &cls),
            "Event \"Errands\" taking place on an unspecified date at an unspecified time - allocate time and prepare accordingly."
        );
        let tips = suggestions_on(&event, &cls, pinned_today());
        assert!(tips.starts_with(TIP_UPCOMING));
    }

    #[test]
    fn test_today_and_tomorrow_urgency_tips() {
        let today = pinned_today();
        let event_today = make_event("Team meeting", "2026-09-01T10:00:00Z");
        let event_tomorrow = make_event("Team meeting", "2026-09-02T10:00:00Z");
        let cls = Classification::of("Team meeting", "");

        assert!(suggestions_on(&event_today, &cls, today).starts_with(TIP_TODAY));
        assert!(suggestions_on(&event_tomorrow, &cls, today).starts_with(TIP_TOMORROW));
    }

    #[test]
    fn test_birthday_today_keeps_three_tips() {
        // Urgency tip + two named gift tips survive the cap; the day-of
        // extra falls off the end.
        let event = make_event("John's Birthday", "2026-09-01T18:00:00Z");
        let cls = Classification::of(&event.title, &event.description);
        let tips = suggestions_on(&event, &cls, pinned_today());
        assert_eq!(
            tips,
            format!(
                "{} {} {}",
                TIP_TODAY,
                "Don't forget to get a thoughtful gift for John - consider their interests and hobbies.",
                "Plan something special to make John feel celebrated - maybe their favorite cake or activity."
            )
        );
    }

    #[test]
    fn test_summary_is_capped_with_ellipsis() {
        let long_title = "Quarterly planning ".repeat(20);
        let event = make_event(long_title.trim(), "2026-09-15T15:00:00Z");
        let cls = Classification::of(&event.title, &event.description);
        let text = summary(&event, &cls);
        assert_eq!(text.chars().count(), MAX_SUMMARY_CHARS);
        assert!(text.ends_with("..."));
    }

    #[test]
    fn test_meal_shares_general_tips() {
        let event = make_event("Lunch with Alex", "2026-09-15T12:00:00Z");
        let cls = Classification::of(&event.title, &event.description);
        let tips = suggestions_on(&event, &cls, pinned_today());
        assert!(tips.contains("Review the event details"));
        assert!(tips.contains("Confirm the location"));
    }
}
