//! The closed set of topic intents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SitebotError;

/// A topic the assistant can answer without consulting the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicIntent {
    /// Internship program, stipend, practical training.
    Internship,
    /// Course catalog in general.
    Courses,
    /// Python full stack program.
    Python,
    /// Java full stack program.
    Java,
    /// Artificial intelligence and machine learning program.
    AiMl,
    /// Data science and analytics program.
    DataScience,
    /// Contact details.
    Contact,
    /// The organization itself.
    About,
}

impl TopicIntent {
    /// All intents in classification order.
    pub const ALL: [TopicIntent; 8] = [
        TopicIntent::Internship,
        TopicIntent::Courses,
        TopicIntent::Python,
        TopicIntent::Java,
        TopicIntent::AiMl,
        TopicIntent::DataScience,
        TopicIntent::Contact,
        TopicIntent::About,
    ];

    /// Stable snake_case name of the intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicIntent::Internship => "internship",
            TopicIntent::Courses => "courses",
            TopicIntent::Python => "python",
            TopicIntent::Java => "java",
            TopicIntent::AiMl => "ai_ml",
            TopicIntent::DataScience => "data_science",
            TopicIntent::Contact => "contact",
            TopicIntent::About => "about",
        }
    }

    /// Human readable label, e.g. "Data Science".
    pub fn title(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether this intent names a single course program.
    pub fn is_program(&self) -> bool {
        matches!(
            self,
            TopicIntent::Python | TopicIntent::Java | TopicIntent::AiMl | TopicIntent::DataScience
        )
    }
}

impl fmt::Display for TopicIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicIntent {
    type Err = SitebotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopicIntent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == s)
            .ok_or_else(|| SitebotError::other(format!("Unknown intent: {s}")))
    }
}
