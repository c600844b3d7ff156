//! Birthday detection and person-name extraction.
//!
//! Detection scans a keyword table first, then a handful of generalizing
//! patterns, over the lower-cased title + description (first match wins).
//! Extraction walks ordered patterns over the raw title so capitalization
//! survives into the captured name.

use std::sync::OnceLock;

use regex::Regex;

use crate::util::capitalize_first;

/// Literal substrings that mark an event as a birthday/anniversary occasion.
/// Scanned in order against the lower-cased title + description.
pub const BIRTHDAY_KEYWORDS: &[&str] = &[
    // Direct mentions
    "birthday",
    "bday",
    "b-day",
    "born",
    "birth day",
    // Possessive forms
    "'s birthday",
    "'s bday",
    "'s b-day",
    // Celebration phrasings
    "birthday party",
    "birthday celebration",
    "birthday dinner",
    "birthday lunch",
    "birthday cake",
    // Age phrasings
    "turns ",
    "turning ",
    " years old",
    "th birthday",
    "st birthday",
    "nd birthday",
    "rd birthday",
    // Anniversary phrasings
    "anniversary",
    "annual celebration",
    // Generic occasion words
    "celebrate",
    "special day",
    "big day",
    // Family-relation combinations
    "mom birthday",
    "dad birthday",
    "mother birthday",
    "father birthday",
    "sister birthday",
    "brother birthday",
    "grandma birthday",
    "grandpa birthday",
    "wife birthday",
    "husband birthday",
    "friend birthday",
];

// Compile-once detection patterns via OnceLock.

/// Name followed by a birthday word ("mom birthday", "sarah's day").
fn re_name_then_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b\w+('s)?\s+(birthday|bday|day|celebration)\b").unwrap())
}

/// Birthday word followed by a name ("birthday sarah").
fn re_keyword_then_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(birthday|bday)\s+\w+\b").unwrap())
}

/// Age phrasing ("sarah turns 30").
fn re_turns_age() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b\w+\s+turns?\s+\d+").unwrap())
}

/// Age phrasing ("sarah is 30").
fn re_is_age() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b\w+\s+is\s+\d+").unwrap())
}

/// Decide whether an event is a birthday/anniversary occasion.
///
/// Case-insensitive over the concatenated title + description; the first
/// keyword or pattern hit short-circuits. Always returns a boolean, never an
/// error, and the hit order only affects diagnostic logging.
pub fn detect_birthday(title: &str, description: &str) -> bool {
    let text = format!("{} {}", title.to_lowercase(), description.to_lowercase());

    for keyword in BIRTHDAY_KEYWORDS {
        if text.contains(keyword) {
            log::debug!("birthday keyword {:?} matched event {:?}", keyword, title);
            return true;
        }
    }

    let patterns = [
        re_name_then_keyword(),
        re_keyword_then_name(),
        re_turns_age(),
        re_is_age(),
    ];
    for re in patterns {
        if re.is_match(&text) {
            log::debug!("birthday pattern matched event {:?}", title);
            return true;
        }
    }

    false
}

// Compile-once extraction patterns. These run on the raw title.

/// "Name's Birthday"
fn re_possessive_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^([a-zA-Z]+)'s\s+(birthday|bday)").unwrap())
}

/// "Name Birthday"
fn re_leading_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^([a-zA-Z]+)\s+(birthday|bday)").unwrap())
}

/// "Birthday Name"
fn re_trailing_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(birthday|bday)\s+([a-zA-Z]+)$").unwrap())
}

/// "Name turns 30"
fn re_name_turns() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^([a-zA-Z]+)\s+turns?\s+\d+").unwrap())
}

/// A captured token is usable as a person name if it is alphabetic, longer
/// than one letter, and not itself a birthday keyword.
fn valid_name_token(token: &str) -> bool {
    token.len() > 1
        && token.chars().all(|c| c.is_ascii_alphabetic())
        && !token.eq_ignore_ascii_case("birthday")
        && !token.eq_ignore_ascii_case("bday")
}

/// Best-effort extraction of a person's name from a birthday title.
///
/// Tries each pattern in order; within a match, capture groups are scanned
/// in order and the first valid name token wins (the trailing-name pattern
/// captures the keyword first, so the scan is what lets "Birthday Sarah"
/// yield "Sarah"). The result is normalized to a capitalized first letter
/// with the remainder lower-cased. `None` means "unknown, use generic
/// phrasing", never an error.
pub fn extract_person_name(title: &str) -> Option<String> {
    let patterns = [
        re_possessive_name(),
        re_leading_name(),
        re_trailing_name(),
        re_name_turns(),
    ];

    for re in patterns {
        let Some(caps) = re.captures(title) else {
            continue;
        };
        for group in caps.iter().skip(1).flatten() {
            let token = group.as_str();
            if valid_name_token(token) {
                return Some(capitalize_first(token));
            }
        }
    }

    None
}

/// Birthday classification computed once per pipeline run and threaded
/// through both the summary and suggestion builders.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub is_birthday: bool,
    /// Extracted person name; only ever set for birthday events.
    pub person_name: Option<String>,
}

impl Classification {
    pub fn of(title: &str, description: &str) -> Self {
        let is_birthday = detect_birthday(title, description);
        let person_name = if is_birthday {
            extract_person_name(title)
        } else {
            None
        };
        Self {
            is_birthday,
            person_name,
        }
    }
}
