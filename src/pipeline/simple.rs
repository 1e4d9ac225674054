//! A smaller, self-contained answering engine.
//!
//! [`SimplePipeline`] answers from a fixed knowledge base that is vectorized
//! once at construction. It has no spelling correction and no live fetches:
//! greetings and goodbyes are caught by keyword, mentions of the
//! organization get its introduction, and everything else goes through a
//! TF-IDF match with [`SIMPLE_MATCH_THRESHOLD`](crate::corpus::SIMPLE_MATCH_THRESHOLD)
//! before falling back to a generic phrase.

use std::sync::Arc;

use log::debug;
use rand::seq::IndexedRandom;

use crate::analysis::AnalyzerKind;
use crate::config::BotConfig;
use crate::corpus::matcher::StatisticalMatcher;
use crate::corpus::snapshot::{CorpusSnapshot, VectorizerOptions};
use crate::error::Result;
use crate::intent::contains_phrase;
use crate::training::data::{IntentDefinition, TrainingData};

/// Words that get the greeting.
pub const GREETING_WORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Words that get the goodbye.
pub const GOODBYE_WORDS: &[&str] = &[
    "bye",
    "goodbye",
    "see you",
    "quit",
    "exit",
    "thank you",
    "thanks",
];

/// Keyword-first engine over the built-in knowledge base.
pub struct SimplePipeline {
    config: Arc<BotConfig>,
    knowledge: TrainingData,
    snapshot: CorpusSnapshot,
    matcher: StatisticalMatcher,
    company_keywords: Vec<String>,
    greetings: Vec<String>,
    goodbyes: Vec<String>,
    fallbacks: Vec<String>,
}

impl std::fmt::Debug for SimplePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplePipeline")
            .field("intents", &self.knowledge.intent_count())
            .field("patterns", &self.snapshot.len())
            .field("matcher", &self.matcher)
            .finish()
    }
}

impl SimplePipeline {
    /// Build the engine and vectorize its knowledge base.
    pub fn new(config: Arc<BotConfig>) -> Result<Self> {
        let knowledge = knowledge_base(&config);
        let snapshot = knowledge.build_snapshot(VectorizerOptions {
            analyzer: AnalyzerKind::KeepStopWords,
            max_features: None,
        })?;
        debug!(
            "Simple pipeline indexed {} patterns over {} terms",
            snapshot.len(),
            snapshot.vectorizer().vocabulary_size()
        );

        let company_keywords = company_keywords(&config);
        let org = &config.organization_name;

        Ok(SimplePipeline {
            matcher: StatisticalMatcher::new(config.simple_match_threshold),
            greetings: vec![format!("Hello! Welcome to {org}. How can I help you?")],
            goodbyes: vec![format!("Thank you for contacting {org}.")],
            fallbacks: fallback_responses(&config),
            knowledge,
            snapshot,
            company_keywords,
            config,
        })
    }

    /// The knowledge base this engine answers from.
    pub fn knowledge(&self) -> &TrainingData {
        &self.knowledge
    }

    /// The generic phrases a fallback may pick from.
    pub fn fallback_phrases(&self) -> &[String] {
        &self.fallbacks
    }

    /// The greeting phrases.
    pub fn greetings(&self) -> &[String] {
        &self.greetings
    }

    /// The goodbye phrases.
    pub fn goodbyes(&self) -> &[String] {
        &self.goodbyes
    }

    /// Answer a message.
    pub fn respond(&self, message: &str) -> Result<String> {
        let text = preprocess(message);

        if text.trim().is_empty() {
            return Ok(pick(&self.greetings));
        }
        if GREETING_WORDS.iter().any(|w| contains_phrase(&text, w)) {
            return Ok(pick(&self.greetings));
        }
        if GOODBYE_WORDS.iter().any(|w| contains_phrase(&text, w)) {
            return Ok(pick(&self.goodbyes));
        }
        if self.company_keywords.iter().any(|k| text.contains(k.as_str())) {
            if let Some(intro) = self.knowledge.intents.first() {
                return Ok(pick(&intro.responses));
            }
        }

        if let Some(outcome) = self.matcher.find(&self.snapshot, &text)? {
            debug!("Simple match '{}' ({:.3})", outcome.tag, outcome.score);
            if let Some(response) = outcome.pick_response() {
                return Ok(response.to_string());
            }
        }

        Ok(pick(&self.fallbacks))
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }
}

/// Lowercase and drop everything but word characters and whitespace.
fn preprocess(message: &str) -> String {
    message
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

fn pick(phrases: &[String]) -> String {
    phrases
        .choose(&mut rand::rng())
        .cloned()
        .unwrap_or_default()
}

/// Organization name spellings that trigger the introduction, lowercased,
/// with and without spaces.
fn company_keywords(config: &BotConfig) -> Vec<String> {
    let lowered = config.organization_name.to_lowercase();
    let mut keywords = Vec::new();
    if let Some(first) = lowered.split_whitespace().next() {
        keywords.push(first.to_string());
    }
    let joined: String = lowered.split_whitespace().collect();
    if !keywords.contains(&joined) {
        keywords.push(joined);
    }
    keywords
}

fn fallback_responses(config: &BotConfig) -> Vec<String> {
    let org = &config.organization_name;
    vec![
        format!(
            "I specialize in providing information about {org}' Python Full Stack courses, 3-month internships with stipend, hackathons, and college workshops. How may I assist you with these topics?"
        ),
        "Thank you for your query. I can provide detailed information about our courses, internship programs, and workshop initiatives. Could you please specify what you'd like to know?".to_string(),
        format!(
            "At {org}, we offer Python Full Stack training, technical courses with 3-month internships including stipend, and conduct hackathons and college workshops. How can I help you with these programs?"
        ),
    ]
}

/// The built-in knowledge base. The company introduction comes first.
fn knowledge_base(config: &BotConfig) -> TrainingData {
    let org = &config.organization_name;
    let intents = vec![
        IntentDefinition::new(
            "company_introduction",
            &[
                "what is brainovision",
                "tell me about your company",
                "who are you",
                "what does brainovision do",
                "about your institute",
                "company overview",
            ],
            vec![format!(
                "{org} is an educational institute specializing in cutting-edge technology training. We provide comprehensive courses, hands-on internships, and industry-relevant workshops to equip students with practical skills."
            )],
        ),
        IntentDefinition::new(
            "courses_offered",
            &[
                "what courses do you offer",
                "available programs",
                "training courses",
                "what can i learn",
                "technical courses",
                "python course",
                "full stack development",
            ],
            vec!["We offer **Python Full Stack Development** as our flagship program. Additionally, we provide various technical courses designed to meet current industry demands. All courses include practical projects and hands-on training.".to_string()],
        ),
        IntentDefinition::new(
            "internship_program",
            &[
                "internship opportunities",
                "i want to do the internship",
                "do you provide internship",
                "3 months internship",
                "stipend information",
                "paid internship",
            ],
            vec!["Yes, we provide a **3-month internship program** with all our courses. The internship includes a **stipend** to support our students during their practical training period.".to_string()],
        ),
        IntentDefinition::new(
            "hackathons_workshops",
            &[
                "do you conduct hackathons",
                "workshops availability",
                "technical events",
                "coding competitions",
                "hackathon events",
                "college workshops",
            ],
            vec!["Yes, we regularly conduct **hackathons and workshops** to provide hands-on learning experiences. Our trainers also visit various colleges to conduct technical workshops and training sessions.".to_string()],
        ),
        IntentDefinition::new(
            "college_workshops",
            &[
                "do you go to colleges",
                "college workshop programs",
                "trainers visit colleges",
                "campus training",
                "off-campus workshops",
                "college outreach",
            ],
            vec!["Yes, our trainers and mentors regularly visit different colleges to conduct workshops and training sessions. We believe in reaching out to students across various educational institutions.".to_string()],
        ),
        IntentDefinition::new(
            "course_duration",
            &[
                "course duration",
                "how long is the course",
                "training period",
                "how many months",
                "program length",
                "duration of python course",
            ],
            vec!["Our Python Full Stack course typically runs for several months, followed by a 3-month internship program. The exact duration may vary based on the specific course structure.".to_string()],
        ),
        IntentDefinition::new(
            "admission_process",
            &[
                "how to join",
                "admission process",
                "how to enroll",
                "registration process",
                "how to apply",
                "admission procedure",
            ],
            vec!["For admission inquiries, please contact our administration office. We'll guide you through the enrollment process and provide details about course schedules and fees.".to_string()],
        ),
        IntentDefinition::new(
            "contact_info",
            &[
                "contact information",
                "how to contact you",
                "phone number",
                "email address",
                "location",
                "where are you located",
                "address",
            ],
            vec![format!(
                "For specific contact information, please visit our official website ({}) or reach out through our main communication channels. Our team will be happy to assist you.",
                config.base_url
            )],
        ),
    ];

    TrainingData { intents }
}
