//! Event insights for calendar dashboards.
//!
//! Give the pipeline an event (title, description, start time) and it
//! returns a short summary plus preparation suggestions. A Hugging Face
//! backend can supply the summary prose when a key is configured; the
//! deterministic builder covers everything else, so the pipeline always
//! returns a complete insight no matter what the network or the model does.

pub mod category;
pub mod classify;
pub mod compose;
pub mod pipeline;
pub mod remote;
pub mod timefmt;
pub mod types;
pub mod util;

pub use classify::{detect_birthday, extract_person_name, Classification};
pub use pipeline::generate_insight;
pub use remote::HuggingFaceClient;
pub use types::{EventDescriptor, Insight};
