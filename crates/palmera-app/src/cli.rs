use clap::Parser;

/// Palmera — terminal client for the resort booking assistant.
#[derive(Parser, Debug)]
#[command(name = "palmera", version, about)]
pub struct Args {
    /// Backend base URL override (e.g. https://resort.example.com).
    #[arg(short = 'b', long)]
    pub backend: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
