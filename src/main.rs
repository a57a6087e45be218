use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use learnpath::{
    analyze_gaps, execute_chat, generate_questions, generate_resources, generate_roadmap,
    load_json, measure_understanding, normalize, parse_list, read_text, write_json,
    write_task_markdown, Answers, ChatClient, ChatMessage, LlmConfig, Normalized, Question,
};

#[derive(Parser)]
#[command(name = "learnpath")]
#[command(author, version, about = "Learning roadmap assistant backed by a hosted LLM", long_about = None)]
struct Cli {
    /// Override the model from LEARNPATH_MODEL
    #[arg(long, global = true)]
    model: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean up raw LLM output into parseable JSON
    Normalize {
        /// File with the raw completion (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Get the next reply in the information-gathering chat
    Chat {
        /// Conversation as JSON: [{"role": "...", "content": "..."}]
        #[arg(short, long)]
        conversation: PathBuf,
    },

    /// Build a learning roadmap from the learner's messages
    Roadmap {
        /// Learner messages as a JSON array of strings
        #[arg(short, long)]
        conversation: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate quiz questions for a topic
    Quiz {
        #[arg(long)]
        topic: String,

        /// Comma-separated concepts
        #[arg(long)]
        concepts: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Identify knowledge gaps from answered questions
    Analyze {
        /// Questions as JSON: [{"id": "...", "question": "..."}]
        #[arg(long)]
        questions: PathBuf,

        /// Answers as JSON: {"<question id>": "<answer>"}
        #[arg(long)]
        answers: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Measure understanding shown by a single answer
    Measure {
        #[arg(long)]
        question: String,

        #[arg(long)]
        answer: String,

        #[arg(long, default_value = "")]
        context: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write study resources for knowledge gaps
    Resources {
        /// Comma-separated knowledge gaps
        #[arg(long)]
        gaps: String,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write one markdown file per gap into this directory
        #[arg(long)]
        markdown_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Normalize { input } => normalize_file(input),
        Commands::Chat { conversation } => {
            let client = build_client(cli.model)?;
            let conversation: Vec<ChatMessage> = load_json(&conversation)?;
            let reply = execute_chat(&client, &conversation).await?;
            println!("{}", reply);
            Ok(())
        }
        Commands::Roadmap {
            conversation,
            output,
        } => {
            let client = build_client(cli.model)?;
            let conversation: Vec<String> = load_json(&conversation)?;
            let roadmap = generate_roadmap(&client, &conversation).await?;
            write_json(&roadmap, output.as_deref())
        }
        Commands::Quiz {
            topic,
            concepts,
            output,
        } => {
            let client = build_client(cli.model)?;
            let questions = generate_questions(&client, &topic, &parse_list(&concepts)).await?;
            write_json(&questions, output.as_deref())
        }
        Commands::Analyze {
            questions,
            answers,
            output,
        } => {
            let client = build_client(cli.model)?;
            let questions: Vec<Question> = load_json(&questions)?;
            let answers: Answers = load_json(&answers)?;
            let gaps = analyze_gaps(&client, &questions, &answers).await?;
            write_json(&gaps, output.as_deref())
        }
        Commands::Measure {
            question,
            answer,
            context,
            output,
        } => {
            let client = build_client(cli.model)?;
            let assessment = measure_understanding(&client, &question, &answer, &context).await?;
            write_json(&assessment, output.as_deref())
        }
        Commands::Resources {
            gaps,
            output,
            markdown_dir,
        } => {
            let client = build_client(cli.model)?;
            let tasks = generate_resources(&client, &parse_list(&gaps)).await?;
            if let Some(dir) = markdown_dir {
                let paths = write_task_markdown(&tasks, &dir)?;
                info!("Wrote {} markdown resources to {:?}", paths.len(), dir);
            }
            write_json(&tasks, output.as_deref())
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build_client(model: Option<String>) -> Result<ChatClient> {
    let mut config = LlmConfig::from_env()?;
    if let Some(model) = model {
        config.model = model;
    }
    let client = ChatClient::new(config)?;
    info!("Using model {}", client.model());
    Ok(client)
}

fn normalize_file(input: Option<PathBuf>) -> Result<()> {
    let raw = read_text(input.as_deref()).context("Failed to read completion")?;
    let normalized = normalize(&raw);

    match &normalized {
        Normalized::Clean(_) => info!("Completion parsed cleanly"),
        Normalized::Recovered { feedback, .. } => {
            warn!("Completion unparseable, recovered feedback: {:?}", feedback)
        }
        Normalized::Fallback(_) => warn!("Completion unparseable, using fallback"),
    }

    println!("{}", normalized.as_str());
    Ok(())
}
