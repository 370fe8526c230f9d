//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled reply text
    Text,
    /// The conversation transcript as JSON
    Json,
}

impl From<OutputFormat> for somdet_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => somdet_domain::OutputFormat::Text,
            OutputFormat::Json => somdet_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for somdet-chat
#[derive(Parser, Debug)]
#[command(name = "somdet-chat")]
#[command(author, version, about = "พี่สมเด็จ - help-desk chat for มหาวิทยาลัยเบงจันทร์")]
#[command(long_about = r#"
Chat with พี่สมเด็จ, the help-desk assistant of มหาวิทยาลัยเบงจันทร์.
Replies come from the Gemini API; the API key is read from the environment
variable named by `gemini.api_key_env` (default: API_KEY) on every request.

Without a question an interactive chat starts. With a question, one reply is
printed and the program exits.

Configuration files are loaded from (in priority order):
1. SOMDET_* environment variables (e.g. SOMDET_GEMINI__MODEL)
2. --config <path>     Explicit config file
3. ./somdet.toml       Project-level config
4. ~/.config/somdet-chat/config.toml   Global config

Example:
  somdet-chat
  somdet-chat "ประวัติมหาวิทยาลัยเป็นอย่างไรบ้างครับ?"
  somdet-chat -m gemini-3-pro-preview -o json "รับสมัครนักศึกษาเมื่อไหร่ครับ"
"#)]
pub struct Cli {
    /// Ask one question and exit (starts the chat when omitted)
    pub question: Option<String>,

    /// Gemini model id (overrides the config file)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format for one-shot replies (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
