//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SitebotArgs};
use crate::error::Result;
use crate::pipeline::orchestrator::{AnswerSource, PipelineReply};
use crate::pipeline::service::{ChatReply, ServiceStats};

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub input: String,
    pub normalized: String,
    pub intent: Option<String>,
    pub score: Option<u32>,
    pub answered_by: String,
    pub corpus_score: Option<f64>,
    pub response: String,
}

impl AnalysisReport {
    /// Build a report from a traced pipeline reply.
    pub fn new(input: &str, reply: PipelineReply) -> Self {
        let (answered_by, corpus_score) = match &reply.source {
            AnswerSource::Welcome => ("welcome".to_string(), None),
            AnswerSource::Topic { intent } => (format!("topic:{intent}"), None),
            AnswerSource::Corpus { tag, score } => (format!("corpus:{tag}"), Some(*score)),
            AnswerSource::Fallback => ("fallback".to_string(), None),
        };

        AnalysisReport {
            input: input.to_string(),
            normalized: reply.normalized,
            intent: reply.classification.map(|c| c.intent.to_string()),
            score: reply.classification.map(|c| c.score),
            answered_by,
            corpus_score,
            response: reply.text,
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SitebotArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 && !message.is_empty() {
                println!("{message}");
                println!();
            }
            output_generic_human(&serde_json::to_value(result)?)
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output a chat reply. Human output is the answer text alone.
pub fn output_reply(reply: &ChatReply, args: &SitebotArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", reply.response);
            Ok(())
        }
        OutputFormat::Json => output_json(reply, args),
    }
}

/// Output service statistics.
pub fn output_stats(stats: &ServiceStats, args: &SitebotArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("Corpus Statistics:");
            println!("══════════════════");
            println!("Organization: {}", stats.organization);
            if stats.snapshot_loaded {
                println!("Patterns: {}", stats.patterns);
                println!("Tags: {}", stats.tags);
                println!("Vocabulary size: {}", stats.vocabulary_size);
                if let Some(trained_at) = stats.trained_at {
                    println!("Trained at: {}", trained_at.to_rfc3339());
                }
            } else {
                println!("No trained corpus loaded. Run `sitebot train` first.");
            }
            println!("Built-in knowledge base patterns: {}", stats.simple_patterns);
            Ok(())
        }
        OutputFormat::Json => output_json(stats, args),
    }
}

/// Output an analysis report.
pub fn output_analysis(report: &AnalysisReport, args: &SitebotArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("Input:       {}", report.input);
            println!("Normalized:  {}", report.normalized);
            match (&report.intent, report.score) {
                (Some(intent), Some(score)) => println!("Intent:      {intent} (score {score})"),
                _ => println!("Intent:      none"),
            }
            match report.corpus_score {
                Some(score) => println!("Answered by: {} ({score:.3})", report.answered_by),
                None => println!("Answered by: {}", report.answered_by),
            }
            println!();
            println!("{}", report.response);
            Ok(())
        }
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &SitebotArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::{ClassificationResult, TopicIntent};

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("success".to_string())),
            "success"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(12))),
            "12"
        );
        assert_eq!(format_value(&serde_json::Value::Null), "-");
    }

    #[test]
    fn test_analysis_report() {
        let reply = PipelineReply {
            text: "python answer".to_string(),
            source: AnswerSource::Topic {
                intent: TopicIntent::Python,
            },
            normalized: "python course".to_string(),
            classification: Some(ClassificationResult {
                intent: TopicIntent::Python,
                score: 2,
            }),
        };

        let report = AnalysisReport::new("pythn course", reply);
        assert_eq!(report.answered_by, "topic:python");
        assert_eq!(report.intent.as_deref(), Some("python"));
        assert_eq!(report.score, Some(2));
        assert_eq!(report.corpus_score, None);
    }
}
