pub mod generate;
pub mod history;
pub mod schema;
pub mod signin;
pub mod signout;
pub mod signup;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "freetime")]
#[command(
    author,
    version,
    about = "Terminal client for the Smart Free Time Utilizer service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file
    #[arg(short, long, global = true, default_value = "freetime.yaml")]
    pub config: PathBuf,

    /// Override the backend base URL
    #[arg(long, global = true, env = "FREETIME_API_URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and remember the session
    Signin(SigninArgs),

    /// Create an account and sign in
    Signup(SignupArgs),

    /// Generate a personalized plan for your free time
    Generate(GenerateArgs),

    /// List prior generations
    History(HistoryArgs),

    /// Forget the stored session
    Signout,

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct SigninArgs {
    /// Account username
    #[arg(short, long)]
    pub username: String,

    /// Account password
    #[arg(short, long)]
    pub password: String,
}

#[derive(Parser, Clone)]
pub struct SignupArgs {
    /// Full name shown in plans
    #[arg(short, long)]
    pub name: String,

    /// Username to sign in with (no spaces)
    #[arg(short, long)]
    pub username: String,

    /// Account password
    #[arg(short, long)]
    pub password: String,
}

#[derive(Parser, Clone)]
pub struct GenerateArgs {
    /// Name to address you by (defaults to the stored session name)
    #[arg(long)]
    pub name: Option<String>,

    /// Age, forwarded to the backend verbatim
    #[arg(long)]
    pub age: Option<u32>,

    /// Your background, e.g. "Engineering Student", "Software Developer",
    /// "Teacher", "Hardware Engineer", "Data Analyst"
    #[arg(short, long)]
    pub domain: String,

    /// What to spend the time on, e.g. "Programming", "Productivity",
    /// "Career Guidance", "Study Tips", "Health & Fitness"
    #[arg(short, long)]
    pub topic: String,

    /// Free time available, e.g. "15 minutes", "30 minutes", "1 hour", "2+ hours"
    #[arg(long = "time", value_name = "TIME")]
    pub time_available: String,

    /// Extra details or preferences
    #[arg(long)]
    pub context: Option<String>,

    /// Print the parsed plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the raw response text without parsing
    #[arg(long)]
    pub raw: bool,
}

#[derive(Parser, Clone)]
pub struct HistoryArgs {
    /// Only show entries whose prompt or response contains this text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Show full response summaries instead of a preview
    #[arg(long)]
    pub full: bool,
}
