//! Training data derived from website content.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::BotConfig;
use crate::corpus::snapshot::{CorpusEntry, CorpusSnapshot, VectorizerOptions};
use crate::error::{Result, SitebotError};
use crate::fetch::page::{PageId, SiteContent};
use crate::training::patterns::*;

/// One corpus tag with its patterns and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentDefinition {
    /// Tag name.
    pub tag: String,
    /// Example user phrasings.
    pub patterns: Vec<String>,
    /// Candidate answers, never empty.
    pub responses: Vec<String>,
}

impl IntentDefinition {
    pub(crate) fn new(tag: &str, patterns: &[&str], responses: Vec<String>) -> Self {
        IntentDefinition {
            tag: tag.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            responses,
        }
    }
}

/// The full training set, serialized as `{"intents": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingData {
    /// Intents in corpus order.
    pub intents: Vec<IntentDefinition>,
}

impl TrainingData {
    /// Derive the training set from fetched site content.
    ///
    /// Topic response sets depend on whether the relevant pages produced
    /// any content; the conversational intents are always added.
    pub fn generate(site: &SiteContent, config: &BotConfig) -> Self {
        let courses_page = site.page(PageId::Courses);
        let internship_text = site
            .combined(&[PageId::Internship, PageId::Home])
            .join(" ")
            .to_lowercase();
        let about_pages = site.combined(&[PageId::About, PageId::Home]);

        let mut intents = vec![
            IntentDefinition::new(
                "courses",
                COURSE_PATTERNS,
                course_responses(!courses_page.is_empty(), config),
            ),
            IntentDefinition::new(
                "internship",
                INTERNSHIP_PATTERNS,
                internship_responses(internship_text.contains("internship"), config),
            ),
            IntentDefinition::new(
                "company_info",
                COMPANY_PATTERNS,
                company_responses(!about_pages.is_empty(), config),
            ),
            IntentDefinition::new("contact", CONTACT_PATTERNS, contact_responses(config)),
            IntentDefinition::new("python_course", PYTHON_PATTERNS, python_responses(config)),
            IntentDefinition::new("java_course", JAVA_PATTERNS, java_responses()),
            IntentDefinition::new("ai_ml_course", AI_ML_PATTERNS, ai_ml_responses(config)),
            IntentDefinition::new(
                "data_science_course",
                DATA_SCIENCE_PATTERNS,
                data_science_responses(),
            ),
        ];
        intents.extend(default_intents(config));

        TrainingData { intents }
    }

    /// Number of intents.
    pub fn intent_count(&self) -> usize {
        self.intents.len()
    }

    /// Total number of patterns.
    pub fn pattern_count(&self) -> usize {
        self.intents.iter().map(|i| i.patterns.len()).sum()
    }

    /// Flatten into corpus entries and response sets.
    pub fn to_corpus(&self) -> Result<(Vec<CorpusEntry>, BTreeMap<String, Vec<String>>)> {
        let mut entries = Vec::with_capacity(self.pattern_count());
        let mut responses = BTreeMap::new();

        for intent in &self.intents {
            if intent.responses.is_empty() {
                return Err(SitebotError::corpus(format!(
                    "intent '{}' has no responses",
                    intent.tag
                )));
            }
            if responses
                .insert(intent.tag.clone(), intent.responses.clone())
                .is_some()
            {
                return Err(SitebotError::corpus(format!(
                    "duplicate intent tag '{}'",
                    intent.tag
                )));
            }
            entries.extend(
                intent
                    .patterns
                    .iter()
                    .map(|pattern| CorpusEntry::new(pattern, intent.tag.as_str())),
            );
        }

        Ok((entries, responses))
    }

    /// Build a corpus snapshot from this training set.
    pub fn build_snapshot(&self, options: VectorizerOptions) -> Result<CorpusSnapshot> {
        let (entries, responses) = self.to_corpus()?;
        CorpusSnapshot::build(entries, responses, options)
    }

    /// Write the training set as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(
            "Training data with {} intents saved to {}",
            self.intent_count(),
            path.display()
        );
        Ok(())
    }

    /// Read a training set from JSON.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn course_responses(found: bool, config: &BotConfig) -> Vec<String> {
    let url = &config.base_url;
    if found {
        vec![
            "Based on our website, here are our current course offerings:".to_string(),
            "I found these courses on our website. Let me summarize the key information for you."
                .to_string(),
            "Our website shows comprehensive training programs. Here's what we offer:".to_string(),
        ]
    } else {
        vec![
            format!(
                "We offer various technical courses including Python Full Stack, Java, AI/ML, and Data Science. Please visit {url}/courses for complete details."
            ),
            format!(
                "Our course catalog includes cutting-edge technology programs. Check {url}/courses for the latest offerings."
            ),
            format!(
                "We provide industry-relevant technical training. Visit our courses page at {url}/courses for detailed information."
            ),
        ]
    }
}

fn internship_responses(found: bool, config: &BotConfig) -> Vec<String> {
    let url = &config.base_url;
    if found {
        vec![
            "According to our website, we provide comprehensive internship programs with hands-on experience.".to_string(),
            "Our internship details are available on the website. We offer practical training with industry exposure.".to_string(),
            format!(
                "Yes, we have internship opportunities as mentioned on our website. Visit {url} for details."
            ),
        ]
    } else {
        vec![
            "We offer 3-month internship programs with stipend for all our courses. This provides real-world industry experience.".to_string(),
            "All our courses include internship opportunities with financial support. Check our website for specific details.".to_string(),
            format!(
                "Yes! We provide internship programs to give you practical experience. Visit {url} for more information."
            ),
        ]
    }
}

fn company_responses(found: bool, config: &BotConfig) -> Vec<String> {
    let org = &config.organization_name;
    if found {
        vec![
            format!(
                "Based on our website: {org} is an educational institute specializing in technology training and career development."
            ),
            "From our about page: We focus on providing quality technical education with industry-relevant curriculum.".to_string(),
            "Our website describes us as a premier training institute offering comprehensive learning programs.".to_string(),
        ]
    } else {
        vec![
            format!(
                "{org} is an educational institute providing technical courses and career-focused training."
            ),
            "We are a technology training institute offering courses, internships, and placement assistance.".to_string(),
            format!("{org} specializes in IT education with practical, industry-oriented programs."),
        ]
    }
}

fn contact_responses(config: &BotConfig) -> Vec<String> {
    let url = &config.base_url;
    vec![
        format!("For complete contact details, please visit our contact page: {url}/contact"),
        format!("You can find all our contact information on our website at {url}/contact"),
        format!(
            "Our website has detailed contact information including phone, email, and address. Visit: {url}/contact"
        ),
    ]
}

fn python_responses(config: &BotConfig) -> Vec<String> {
    vec![
        format!(
            "🐍 **Python Full Stack Development:** Comprehensive training in Python programming, web development, and full-stack technologies. Includes 3-month internship with stipend. Visit {}/courses for details.",
            config.base_url
        ),
        "Our Python Full Stack course covers everything from basics to advanced topics including Django, Flask, and modern web technologies. Check our website for the complete curriculum.".to_string(),
        format!(
            "Python Full Stack program at {} provides hands-on training in both frontend and backend development. Includes real-world projects and internship.",
            config.organization_name
        ),
    ]
}

fn java_responses() -> Vec<String> {
    vec![
        "☕ **Java Full Stack Development:** Master enterprise Java development with Spring Framework, Hibernate, and modern technologies. Includes 3-month paid internship.".to_string(),
        "Our Java Full Stack course focuses on building scalable enterprise applications. Covers Core Java, Advanced Java, and full-stack development.".to_string(),
        "Java Development program provides comprehensive training in Java ecosystem technologies. Perfect for building career in enterprise software development.".to_string(),
    ]
}

fn ai_ml_responses(config: &BotConfig) -> Vec<String> {
    vec![
        "🤖 **Artificial Intelligence & Machine Learning:** Cutting-edge training in AI/ML concepts, neural networks, and intelligent systems. Includes hands-on projects and internship.".to_string(),
        "Our AI & ML course covers machine learning algorithms, deep learning, computer vision, and natural language processing.".to_string(),
        format!(
            "AI/ML program at {} provides practical training in building intelligent applications and systems. Industry-relevant curriculum.",
            config.organization_name
        ),
    ]
}

fn data_science_responses() -> Vec<String> {
    vec![
        "📊 **Data Science & Analytics:** Comprehensive training in data analysis, visualization, machine learning, and big data technologies. Includes real-world projects.".to_string(),
        "Our Data Science course covers statistical analysis, data visualization, machine learning, and business intelligence tools.".to_string(),
        "Data Science program provides end-to-end training in data analysis and predictive modeling. Perfect for analytics career.".to_string(),
    ]
}

fn default_intents(config: &BotConfig) -> Vec<IntentDefinition> {
    let org = &config.organization_name;
    let url = &config.base_url;
    vec![
        IntentDefinition::new(
            "greeting",
            GREETING_PATTERNS,
            vec![
                format!("Hello! Welcome to {org}! I'm your AI assistant. How can I help you today?"),
                format!(
                    "Hi there! Welcome to {org}. I can provide information about our courses, internships, and more!"
                ),
                format!(
                    "Good day! I'm here to help you with information about {org}. What would you like to know?"
                ),
            ],
        ),
        IntentDefinition::new(
            "goodbye",
            GOODBYE_PATTERNS,
            vec![
                format!("Thank you for visiting {org}! Visit our website {url} for more details."),
                format!("Goodbye! Feel free to visit {url} for complete information about our programs."),
                format!("Thank you for your interest in {org}! We hope to see you soon on our website."),
            ],
        ),
        IntentDefinition::new(
            "website",
            WEBSITE_PATTERNS,
            vec![
                format!(
                    "Our official website is {url} where you'll find complete information about all our programs and services."
                ),
                format!(
                    "Visit {url} for detailed information about courses, internships, admissions, and more."
                ),
                format!("You can explore everything about {org} at {url}"),
            ],
        ),
        IntentDefinition::new(
            "thanks",
            THANKS_PATTERNS,
            vec![
                format!("You're welcome! Happy to help with {org} information."),
                "Glad I could assist! Feel free to ask if you need more information.".to_string(),
                format!("You're welcome! Visit {url} for complete details."),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_offline() {
        let config = BotConfig::default();
        let data = TrainingData::generate(&SiteContent::new(), &config);

        let tags: Vec<&str> = data.intents.iter().map(|i| i.tag.as_str()).collect();
        assert_eq!(
            tags,
            vec![
                "courses",
                "internship",
                "company_info",
                "contact",
                "python_course",
                "java_course",
                "ai_ml_course",
                "data_science_course",
                "greeting",
                "goodbye",
                "website",
                "thanks",
            ]
        );
        assert!(data.intents.iter().all(|i| i.responses.len() == 3));
        assert!(data.intents[1].responses[0].contains("3-month"));
    }

    #[test]
    fn test_generate_with_content() {
        let config = BotConfig::default();
        let mut site = SiteContent::new();
        site.insert(PageId::Courses, vec!["Heading: Python".to_string()]);
        site.insert(PageId::Home, vec!["Join our Internship today".to_string()]);

        let data = TrainingData::generate(&site, &config);
        assert!(data.intents[0].responses[0].starts_with("Based on our website"));
        assert!(data.intents[1].responses[0].starts_with("According to our website"));
        // The home page also counts as about content.
        assert!(data.intents[2].responses[0].starts_with("Based on our website"));
    }

    #[test]
    fn test_to_corpus_lowercases_patterns() {
        let data = TrainingData::generate(&SiteContent::new(), &BotConfig::default());
        let (entries, responses) = data.to_corpus().unwrap();

        assert_eq!(entries.len(), data.pattern_count());
        assert_eq!(responses.len(), data.intent_count());
        assert!(entries.iter().any(|e| e.pattern == "good morning" && e.tag == "greeting"));
    }

    #[test]
    fn test_duplicate_tags_rejected() {
        let intent = IntentDefinition::new("x", &["a pattern"], vec!["answer".to_string()]);
        let data = TrainingData {
            intents: vec![intent.clone(), intent],
        };
        assert!(data.to_corpus().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("training.json");
        let data = TrainingData::generate(&SiteContent::new(), &BotConfig::default());

        data.save_json(&path).unwrap();
        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"intents\""));
        assert_eq!(TrainingData::load_json(&path).unwrap(), data);
    }
}
