use anyhow::Result;
use clap::Parser;
use showcase_ask::env;
use showcase_ask::gemini::{self, DEFAULT_MODEL, DEFAULT_PROMPT};

#[derive(Parser, Debug)]
#[command(name = "showcase-ask")]
#[command(about = "Ask Gemini a single question and print the answer", long_about = None)]
struct Args {
    /// Prompt to send
    #[arg(default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// API key for the generative language API (also read from `.env`)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
}

fn main() -> Result<()> {
    // before logging and parsing, so RUST_LOG and GEMINI_API_KEY may come from .env
    let env_file = env::load_dotenv();
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    match env_file {
        Ok(Some(path)) => log::info!("[ask] loaded {}", path.display()),
        Ok(None) => {}
        Err(e) => log::warn!("[ask] ignoring unreadable .env: {}", e),
    }

    let args = Args::parse();
    let api_key = args.api_key.ok_or(gemini::AskError::MissingKey)?;

    println!("Asking Gemini...");
    let text = gemini::ask(&args.prompt, &api_key, &args.model)?;

    println!("---- GEMINI'S ANSWER: ----");
    println!("{}", text);
    Ok(())
}
