//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use sefaria_domain::tool::entities::ArgumentBag;
use serde_json::Value;
use std::path::PathBuf;

/// Output format for the tool catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON Schema, as sent in MCP `tools/list`
    Json,
    /// Human-readable summary
    Text,
}

/// CLI arguments for sefaria-mcp
#[derive(Parser, Debug)]
#[command(name = "sefaria-mcp")]
#[command(author, version, about = "MCP server for the Sefaria library of Jewish texts")]
#[command(long_about = r#"
sefaria-mcp exposes the Sefaria library (texts, translations, commentary
links, search, dictionaries, topics, manuscripts and the daily learning
calendar) as tools over the Model Context Protocol.

Without a subcommand the server speaks MCP on stdin/stdout. Logs go to
stderr.

Configuration files are loaded from (in priority order):
1. SEFARIA_MCP_* environment variables (e.g. SEFARIA_MCP_UPSTREAM__BASE_URL)
2. --config <path>          Explicit config file
3. ./sefaria-mcp.toml       Project-level config
4. ~/.config/sefaria-mcp/config.toml   Global config

Example:
  sefaria-mcp
  sefaria-mcp tools --output text
  sefaria-mcp call get_text --args '{"reference": "Genesis 1:1"}'
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve MCP over stdio (default)
    Serve,

    /// Print the tool catalog
    Tools {
        #[arg(short, long, value_enum, default_value = "json")]
        output: OutputFormat,
    },

    /// Invoke a single tool and print its result
    Call {
        /// Tool name, e.g. get_text
        tool: String,

        /// Arguments as a JSON object
        #[arg(short, long, value_name = "JSON", default_value = "{}")]
        args: String,
    },
}

impl Cli {
    /// The selected command, `serve` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

/// Parse `--args` into an argument bag. `null` means no arguments.
pub fn parse_arguments(raw: &str) -> Result<ArgumentBag, String> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| format!("--args is not valid JSON: {}", e))?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(ArgumentBag::new()),
        other => Err(format!(
            "--args must be a JSON object, got {}",
            json_type_name(&other)
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
