//! CLI entrypoint for sefaria-mcp
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use sefaria_application::{InvokeToolUseCase, ToolRegistry, ToolSchemaPort};
use sefaria_infrastructure::{
    ConfigLoader, FileConfig, HebrewCalendar, HttpLibraryGateway, JsonSchemaToolConverter, Severity,
};
use sefaria_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, SefariaServer, parse_arguments,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting sefaria-mcp");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!(field = %issue.field, "{}", issue.message),
            Severity::Warning => warn!(field = %issue.field, "{}", issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration");
    }

    // === Dependency Injection ===
    let gateway = Arc::new(HttpLibraryGateway::from_config(&config)?);
    let calendar = Arc::new(HebrewCalendar::new());
    let registry = Arc::new(ToolRegistry::library(
        gateway,
        calendar,
        config.search_settings(),
    ));
    info!(base_url = %config.upstream.base_url, "Library gateway ready");

    let invoke = InvokeToolUseCase::new(registry);
    let schema: Arc<dyn ToolSchemaPort> = Arc::new(JsonSchemaToolConverter);

    match cli.command() {
        Command::Serve => {
            SefariaServer::new(invoke, schema)
                .serve_stdio()
                .await
                .map_err(|e| anyhow!("MCP server failed: {}", e.message))?;
        }
        Command::Tools { output } => {
            let spec = invoke.registry().spec();
            let text = match output {
                OutputFormat::Json => {
                    ConsoleFormatter::format_catalog_json(&schema.all_tools_schema(spec))
                }
                OutputFormat::Text => ConsoleFormatter::format_catalog(spec),
            };
            println!("{}", text);
        }
        Command::Call { tool, args } => {
            let arguments = parse_arguments(&args).map_err(anyhow::Error::msg)?;
            let result = invoke.invoke(&tool, arguments).await;
            println!("{}", ConsoleFormatter::format_result(&result));
            if result.is_error() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Logs go to stderr; stdout carries the MCP protocol.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("logging.file has no file name: {}", path.display()))?;
    let directory = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(Some(guard))
}
