use clap::{Parser, Subcommand, Args};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "llm-portal",
    version,
    long_version = LONG_VERSION,
    about = "One calling convention over remote and local LLM providers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send one prompt to a model
    Generate(GenerateArgs),
    /// Grade an answer against a rubric
    Evaluate(EvaluateArgs),
    /// Show which provider and endpoint a model resolves to
    Resolve(ResolveArgs),
    /// List the models in the directory
    Models(ModelsArgs),
    /// Validate a model directory file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Model name as listed in the model directory
    pub model: String,

    /// Prompt text
    pub prompt: String,

    /// System context for the call
    #[arg(short, long)]
    pub context: Option<String>,

    /// Sampling temperature
    #[arg(long, default_value_t = 0.2)]
    pub temp: f32,

    /// Maximum tokens to generate
    #[arg(long, default_value_t = 1000)]
    pub max_tokens: u32,

    /// Model directory YAML (defaults to $LLM_PORTAL_DIRECTORY or configs/model_directory.yaml)
    #[arg(short, long)]
    pub directory: Option<String>,
}

#[derive(Args, Clone)]
pub struct EvaluateArgs {
    /// Model name as listed in the model directory
    pub model: String,

    /// Grading rubric
    #[arg(short, long)]
    pub rubric: String,

    /// Question being graded
    #[arg(short, long)]
    pub question: String,

    /// Reference answer
    #[arg(short, long)]
    pub answer_key: Option<String>,

    /// System message for the grader
    #[arg(short, long, default_value = "You are a strict but fair grader.")]
    pub system: String,

    /// Sampling temperature
    #[arg(long, default_value_t = 0.2)]
    pub temp: f32,

    /// Maximum tokens to generate
    #[arg(long, default_value_t = 1000)]
    pub max_tokens: u32,

    /// Model directory YAML
    #[arg(short, long)]
    pub directory: Option<String>,
}

#[derive(Args, Clone)]
pub struct ResolveArgs {
    /// Model name to resolve
    pub model: String,

    /// Model directory YAML
    #[arg(short, long)]
    pub directory: Option<String>,
}

#[derive(Args, Clone)]
pub struct ModelsArgs {
    /// Model directory YAML
    #[arg(short, long)]
    pub directory: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Model directory file to validate
    pub path: String,
}
