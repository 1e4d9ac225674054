//! Command implementations for the sitebot CLI.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::BotConfig;
use crate::error::{Result, SitebotError};
use crate::fetch::fetcher::{PageFetcher, StaticPageFetcher};
use crate::fetch::http::HttpPageFetcher;
use crate::pipeline::service::{ChatRequest, ChatService, Engine, ReplyStatus};

/// Execute a CLI command.
pub fn execute_command(args: SitebotArgs) -> Result<()> {
    match &args.command {
        Command::Ask(ask_args) => ask(ask_args, &args),
        Command::Chat(chat_args) => chat(chat_args, &args),
        Command::Train => train(&args),
        Command::Serve(serve_args) => serve(serve_args, &args),
        Command::Stats => stats(&args),
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
    }
}

/// Load the configuration named on the command line, or the defaults.
pub fn load_config(args: &SitebotArgs) -> Result<BotConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            BotConfig::load_from_file(path)
        }
        None => Ok(BotConfig::default()),
    }
}

/// Build the service the commands run against.
pub fn build_service(args: &SitebotArgs) -> Result<ChatService> {
    let config = load_config(args)?;
    let fetcher: Arc<dyn PageFetcher> = if args.offline {
        Arc::new(StaticPageFetcher::new())
    } else {
        Arc::new(HttpPageFetcher::new(&config)?)
    };
    ChatService::new(config, fetcher)
}

fn ask(ask_args: &AskArgs, cli_args: &SitebotArgs) -> Result<()> {
    let service = build_service(cli_args)?;
    let reply = service.handle_chat_with(ChatRequest::new(ask_args.text()), ask_args.engine.into());
    output_reply(&reply, cli_args)
}

fn chat(chat_args: &ChatArgs, cli_args: &SitebotArgs) -> Result<()> {
    let service = build_service(cli_args)?;
    let engine: Engine = chat_args.engine.into();

    if cli_args.verbosity() > 0 {
        println!("Chatting with {}. Type 'quit' to leave.", service.config().organization_name);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("You: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if matches!(message, "quit" | "exit") {
            break;
        }

        let reply = service.handle_chat_with(ChatRequest::new(message), engine);
        match cli_args.output_format {
            OutputFormat::Human => println!("Bot: {}", reply.response),
            OutputFormat::Json => output_reply(&reply, cli_args)?,
        }
    }
    Ok(())
}

fn train(cli_args: &SitebotArgs) -> Result<()> {
    let service = build_service(cli_args)?;
    let reply = service.retrain();
    output_result("Training finished", &reply, cli_args)?;

    match reply.status {
        ReplyStatus::Success => Ok(()),
        ReplyStatus::Error => Err(SitebotError::other(reply.message)),
    }
}

fn serve(serve_args: &ServeArgs, cli_args: &SitebotArgs) -> Result<()> {
    let service = Arc::new(build_service(cli_args)?);

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = serve_args.threads {
        builder.worker_threads(threads);
    }
    let runtime = builder.build()?;

    // The blocking HTTP client must be dropped outside the runtime.
    runtime.block_on(crate::server::serve(service.clone(), &serve_args.bind))
}

fn stats(cli_args: &SitebotArgs) -> Result<()> {
    let service = build_service(cli_args)?;
    output_stats(&service.stats(), cli_args)
}

fn analyze(analyze_args: &AnalyzeArgs, cli_args: &SitebotArgs) -> Result<()> {
    let service = build_service(cli_args)?;
    let text = analyze_args.text();
    let reply = service.explain(&text)?;
    output_analysis(&AnalysisReport::new(&text, reply), cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_offline_service_uses_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("bot.json");
        let snapshot_path = dir.path().join("snapshot.bin");
        std::fs::write(
            &config_path,
            serde_json::json!({
                "organization_name": "Acme Academy",
                "snapshot_path": snapshot_path,
                "training_data_path": null,
            })
            .to_string(),
        )
        .unwrap();

        let args = SitebotArgs::try_parse_from([
            "sitebot",
            "--offline",
            "--config",
            config_path.to_str().unwrap(),
            "stats",
        ])
        .unwrap();

        let service = build_service(&args).unwrap();
        assert_eq!(service.config().organization_name, "Acme Academy");
        assert!(!service.stats().snapshot_loaded);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = SitebotArgs::try_parse_from([
            "sitebot",
            "--config",
            "/nonexistent/sitebot.json",
            "stats",
        ])
        .unwrap();
        assert!(matches!(load_config(&args), Err(SitebotError::Io(_))));
    }
}
