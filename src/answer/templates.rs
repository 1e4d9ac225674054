//! Canned answer texts.
//!
//! Every template embeds the organization constants from [`BotConfig`] so
//! that the same binary can front a different site by configuration alone.

use crate::config::BotConfig;
use crate::intent::TopicIntent;

/// Greeting returned for an empty message.
pub fn welcome(config: &BotConfig) -> String {
    format!(
        "Welcome to {}! 🎓 I'm your smart AI assistant. I can understand your questions even with small spelling mistakes. Ask me about courses, internships, or anything else!",
        config.organization_name
    )
}

/// Reply used when a request fails unexpectedly.
pub fn apology(config: &BotConfig) -> String {
    format!(
        "I apologize for the inconvenience. Please visit our website directly: {}",
        config.base_url
    )
}

/// The pool of generic fallback phrases.
pub fn generic_fallbacks(config: &BotConfig) -> Vec<String> {
    let org = &config.organization_name;
    let url = &config.base_url;
    vec![
        format!(
            "🔍 I want to make sure I understand your question correctly. Could you rephrase it? Meanwhile, you can visit {url} for comprehensive information about {org}."
        ),
        format!(
            "💡 I specialize in providing information about {org}'s courses, internships, and programs. For specific details, please visit our website: {url}"
        ),
        format!(
            "🎯 At {org}, we offer technical courses with internship opportunities. Visit {url} to explore our programs and get accurate information."
        ),
    ]
}

/// Internship answer when the live internship page mentions internships.
pub fn internship_from_website(config: &BotConfig) -> String {
    format!(
        "💼 **Internship Program at {}:**\n\nBased on our website, we offer comprehensive internship programs. Please visit {}/internship for detailed information about:\n• Duration and structure\n• Monthly stipend details\n• Project opportunities\n• Application process",
        config.organization_name, config.base_url
    )
}

/// Internship answer without live content.
pub fn internship_static(config: &BotConfig) -> String {
    format!(
        "💼 **Internship Program:**\n\nAt {}, we provide:\n\n✅ **3-Month Paid Internship**\n• Hands-on industry projects\n• Professional mentorship\n• Monthly stipend\n• Certificate of completion\n• Placement assistance\n\n🎯 **All our courses include internship opportunities**\n\n📋 **Learn more:** {}",
        config.organization_name, config.base_url
    )
}

/// Course list built from live headings.
pub fn courses_from_website(config: &BotConfig, courses: &[String]) -> String {
    let list = courses
        .iter()
        .map(|course| format!("• {course}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "🎯 **Courses at {}:**\n\n{list}\n\n📚 **Complete course details:** {}/courses",
        config.organization_name, config.base_url
    )
}

/// Course catalog without live content.
pub fn courses_static(config: &BotConfig) -> String {
    format!(
        "📚 **Our Course Catalog:**\n\nWe offer industry-relevant programs including:\n• Python Full Stack Development\n• Java Full Stack\n• Artificial Intelligence & ML\n• Data Science & Analytics\n• Cloud Computing\n• DevOps\n\n🔗 **Explore all courses:** {}/courses",
        config.base_url
    )
}

/// Static answer of a single program.
pub fn program(config: &BotConfig, intent: TopicIntent) -> Option<String> {
    let (header, intro, topics) = match intent {
        TopicIntent::Python => (
            "🐍 **Python Full Stack Development:**",
            "Comprehensive training in:",
            "• Python Programming\n• Django & Flask Frameworks\n• Frontend Technologies\n• Database Management\n• REST APIs & Deployment",
        ),
        TopicIntent::Java => (
            "☕ **Java Full Stack Development:**",
            "Master enterprise development with:",
            "• Core & Advanced Java\n• Spring Framework\n• Microservices Architecture\n• Frontend Integration\n• Database Technologies",
        ),
        TopicIntent::AiMl => (
            "🤖 **AI & Machine Learning:**",
            "Cutting-edge training in:",
            "• Machine Learning Algorithms\n• Deep Learning & Neural Networks\n• Computer Vision\n• Natural Language Processing\n• TensorFlow & PyTorch",
        ),
        TopicIntent::DataScience => (
            "📊 **Data Science & Analytics:**",
            "Comprehensive data training:",
            "• Data Analysis & Visualization\n• Statistical Modeling\n• Machine Learning for Data\n• Big Data Technologies\n• Business Intelligence",
        ),
        _ => return None,
    };

    Some(format!(
        "{header}\n\n{intro}\n{topics}\n\n💼 Includes 3-month internship\n💰 Stipend provided\n\n📖 **Details:** {}/courses",
        config.base_url
    ))
}

/// About the organization.
pub fn about(config: &BotConfig) -> String {
    format!(
        "🏢 **About {}:**\n\nWe are a premier technology education institute committed to bridging the gap between academic learning and industry requirements.\n\n🌟 **Our Mission:** To provide quality technical education with hands-on experience.\n\n🔗 **Learn more:** {}/about",
        config.organization_name, config.base_url
    )
}

/// Contact details.
pub fn contact(config: &BotConfig) -> String {
    format!(
        "📞 **Contact {}:**\n\nGet in touch with us for:\n• Course inquiries\n• Admission procedures\n• Partnership opportunities\n• Career guidance\n\n📍 **Visit our contact page:** {}/contact\n\n📧 **Email:** {}\n🌐 **Website:** {}",
        config.organization_name, config.base_url, config.contact_email, config.base_url
    )
}

/// Pointer to the course page for a program the fallback recognized.
pub fn course_information(config: &BotConfig, intent: TopicIntent) -> String {
    format!(
        "🎓 **Course Information:**\n\nI understand you're asking about our {} program. Please visit {}/courses for complete details about this course, including curriculum, duration, and admission process.",
        intent.title(),
        config.base_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internship_templates_mention_stipend() {
        let config = BotConfig::default();
        for text in [internship_static(&config), internship_from_website(&config)] {
            assert!(text.contains("Internship"));
            assert!(text.contains("stipend"));
        }
    }

    #[test]
    fn test_templates_embed_config() {
        let config = BotConfig {
            organization_name: "Acme Academy".to_string(),
            base_url: "https://acme.example".to_string(),
            contact_email: "hello@acme.example".to_string(),
            ..Default::default()
        };

        assert!(about(&config).contains("Acme Academy"));
        assert!(contact(&config).contains("hello@acme.example"));
        assert!(courses_static(&config).contains("https://acme.example/courses"));
        assert!(welcome(&config).starts_with("Welcome to Acme Academy!"));
        assert!(
            generic_fallbacks(&config)
                .iter()
                .all(|f| f.contains("https://acme.example"))
        );
    }

    #[test]
    fn test_program_templates() {
        let config = BotConfig::default();
        for intent in TopicIntent::ALL {
            assert_eq!(program(&config, intent).is_some(), intent.is_program());
        }
        assert!(course_information(&config, TopicIntent::DataScience).contains("Data Science program"));
    }
}
