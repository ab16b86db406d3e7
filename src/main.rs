use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use topic_quiz::ai::is_usable;
use topic_quiz::config::{AiArgs, BankArgs, DEFAULT_ADDRESS};
use topic_quiz::protocol::QuizResponse;
use topic_quiz::server::{self, AppState};
use topic_quiz::{GeminiProvider, QuizAssembler, StaticQuestionBank};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the quiz API over HTTP
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "QUIZ_ADDRESS", default_value = DEFAULT_ADDRESS)]
        address: String,

        #[command(flatten)]
        ai: AiArgs,

        #[command(flatten)]
        bank: BankArgs,
    },
    /// Assemble one quiz and print it as JSON
    Generate {
        /// Topic to quiz on
        #[arg(short, long)]
        topic: String,

        /// Difficulty level (1-5)
        #[arg(short, long, default_value_t = 1)]
        level: i64,

        /// Attempt number, derived from the current day when omitted
        #[arg(short, long)]
        attempt: Option<String>,

        #[command(flatten)]
        ai: AiArgs,

        #[command(flatten)]
        bank: BankArgs,
    },
}

fn build_assembler(
    ai: AiArgs,
    bank: BankArgs,
) -> Result<QuizAssembler, Box<dyn std::error::Error>> {
    let bank = match bank.bank {
        Some(path) => StaticQuestionBank::from_path(&path)?,
        None => StaticQuestionBank::builtin()?,
    };
    tracing::info!(topics = bank.topic_count(), "question bank loaded");

    let config = ai.into_config();
    if !is_usable(config.api_key.as_deref()) {
        tracing::warn!("no usable AI credential, serving built-in questions only");
    }
    let provider = GeminiProvider::new(config)?;
    Ok(QuizAssembler::new(bank).with_generator(Arc::new(provider)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("topic_quiz=debug,tower_http=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Serve { address, ai, bank } => {
            let assembler = build_assembler(ai, bank)?;
            server::run(&address, AppState::new(assembler)).await?;
        }
        Command::Generate {
            topic,
            level,
            attempt,
            ai,
            bank,
        } => {
            let assembler = build_assembler(ai, bank)?;
            let quiz = assembler.get_quiz(&topic, level, attempt.as_deref()).await?;
            if let Some(warning) = &quiz.warning {
                eprintln!("{}", warning);
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&QuizResponse::from(quiz))?
            );
        }
    }

    Ok(())
}
