mod components;
mod console;

use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use chakra_core::narration::TracingNarrator;
use chakra_core::ChakraConfig;

/// Expand ~ to the user's home directory
fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
            return format!("{}/{}", home.to_string_lossy(), &path[2..]);
        }
    }
    path.to_string()
}

#[derive(Parser, Debug)]
#[command(name = "chakra", version, about = "Sudarshan Chakra — Neural IoT Defense Matrix simulator")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "chakra.toml")]
    config: String,

    /// Log level (overrides config file)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Generate a default config file and exit
    #[arg(long)]
    generate_config: bool,

    /// Dry-run: load config, validate, print report, exit
    #[arg(long)]
    dry_run: bool,

    /// Disable narration output regardless of config
    #[arg(long)]
    no_speech: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Generate Config ──────────────────────────────────────────────
    if cli.generate_config {
        let config = ChakraConfig::default();
        config.save(&cli.config).map_err(|e| anyhow::anyhow!(e))?;
        println!("Default configuration written to {}", cli.config);
        return Ok(());
    }

    // ── Load Config ──────────────────────────────────────────────────
    let mut config = ChakraConfig::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: {}, using defaults", e);
        ChakraConfig::default()
    });
    if cli.no_speech {
        config.general.speech_enabled = false;
    }

    // ── Tracing ──────────────────────────────────────────────────────
    let log_level = cli.log_level.as_deref().unwrap_or(&config.general.log_level);
    let level = match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Sudarshan Chakra v{}", env!("CARGO_PKG_VERSION"));
    info!("Layers enabled: {}/4", config.enabled_layer_count());

    // ── Bootstrap ────────────────────────────────────────────────────
    let stack = components::bootstrap(&config, Arc::new(TracingNarrator));

    // ── Analyst Session ──────────────────────────────────────────────
    let session_file = expand_tilde(&config.general.session_file);
    if let Some(dir) = std::path::Path::new(&session_file).parent() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            warn!(error = %e, "Could not create session directory");
        }
    }
    match stack.session.restore(&session_file) {
        Ok(true) => {
            if let Some(analyst) = stack.session.active_session() {
                info!(name = %analyst.name, "Analyst session restored");
            }
        }
        Ok(false) => {
            stack.session.save_analyst("Admin", "Safety-Hub");
            info!("New analyst session established");
        }
        Err(e) => {
            warn!(error = %e, "Session restore failed, starting fresh");
            stack.session.save_analyst("Admin", "Safety-Hub");
        }
    }

    // ── Dry Run ──────────────────────────────────────────────────────
    if cli.dry_run {
        info!(
            devices = stack.registry.device_count(),
            interlocks = stack.interlocks.as_ref().map_or(0, |t| t.len()),
            "Dry-run complete. Configuration valid."
        );
        return Ok(());
    }

    // ── Operator Console ─────────────────────────────────────────────
    let session = stack.session.clone();
    let mut console = console::Console::new(stack);
    println!("Sudarshan Chakra operator console. Type 'help' for commands.");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("chakra> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let result = console.handle_line(line.trim());
        if !result.output.is_empty() {
            println!("{}", result.output);
        }
        if result.quit {
            break;
        }
    }

    // ── Shutdown ─────────────────────────────────────────────────────
    if let Err(e) = session.persist(&session_file) {
        warn!(error = %e, "Session persist failed");
    }
    let stack = console.stack();
    info!(
        log_lines = stack.oplog.len(),
        alerts = stack.alerts.as_ref().map_or(0, |a| a.len()),
        devices = stack.registry.device_count(),
        "Shutdown complete"
    );

    Ok(())
}
