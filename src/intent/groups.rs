//! Keyword groups attached to each topic intent.

use serde::{Deserialize, Serialize};

use super::label::TopicIntent;

/// A topic intent with its ordered keyword phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentGroup {
    /// The topic this group votes for.
    pub intent: TopicIntent,
    /// Keyword phrases of one or more words, lowercase.
    pub keywords: Vec<String>,
}

impl IntentGroup {
    /// Create a new group.
    pub fn new(intent: TopicIntent, keywords: &[&str]) -> Self {
        IntentGroup {
            intent,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// The built-in groups, in tie-break order.
    pub fn builtin() -> Vec<IntentGroup> {
        vec![
            IntentGroup::new(
                TopicIntent::Internship,
                &[
                    "internship",
                    "stipend",
                    "work experience",
                    "practical training",
                    "industrial training",
                    "on-job training",
                ],
            ),
            IntentGroup::new(
                TopicIntent::Courses,
                &[
                    "course",
                    "program",
                    "training",
                    "learn",
                    "study",
                    "subject",
                    "curriculum",
                    "syllabus",
                ],
            ),
            IntentGroup::new(
                TopicIntent::Python,
                &["python", "django", "flask", "full stack"],
            ),
            IntentGroup::new(
                TopicIntent::Java,
                &["java", "spring", "hibernate", "j2ee"],
            ),
            IntentGroup::new(
                TopicIntent::AiMl,
                &[
                    "artificial intelligence",
                    "machine learning",
                    "ai",
                    "ml",
                    "neural network",
                    "deep learning",
                ],
            ),
            IntentGroup::new(
                TopicIntent::DataScience,
                &["data science", "data analytics", "big data", "data analysis"],
            ),
            IntentGroup::new(
                TopicIntent::Contact,
                &["contact", "phone", "email", "address", "location", "reach"],
            ),
            IntentGroup::new(
                TopicIntent::About,
                &["about", "company", "brainovision", "who are you", "what is"],
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_groups_follow_intent_order() {
        let groups = IntentGroup::builtin();
        let order: Vec<TopicIntent> = groups.iter().map(|g| g.intent).collect();
        assert_eq!(order, TopicIntent::ALL.to_vec());
        assert!(groups.iter().all(|g| !g.keywords.is_empty()));
    }
}
