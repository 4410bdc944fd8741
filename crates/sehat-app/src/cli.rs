use clap::Parser;

/// Sehat — a health-guidance chat assistant in the terminal.
#[derive(Parser, Debug)]
#[command(name = "sehat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Response language override (English, Hindi, Marathi, Gujarati,
    /// Rajasthani).
    #[arg(short, long)]
    pub language: Option<String>,

    /// Sampling temperature override (0.0-1.0).
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// OpenRouter API key override for this session.
    #[arg(long)]
    pub api_key: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
