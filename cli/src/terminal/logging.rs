use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Crates whose events follow the `-v` flags. Everything else stays at `warn`.
const LEDGER_TARGETS: [&str; 3] = ["hotelier_core", "hotelier_common", "hotelier"];

pub struct LedgerFormatter;

/// Short tag naming the part of the ledger an event came from.
pub fn scope_for(target: &str) -> Option<&'static str> {
    match target {
        t if t.starts_with("hotelier_core::hotel") => Some("hotel"),
        t if t.starts_with("hotelier_core::seed") => Some("seed"),
        t if t.starts_with("hotelier::commands::menu") => Some("menu"),
        _ => None,
    }
}

impl<S, N> FormatEvent<S, N> for LedgerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        if let Some(scope) = scope_for(meta.target()) {
            write!(writer, "{} ", format!("{scope}:").bright_black())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Maps the number of `-v` flags to the level of the ledger crates.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Filter directive for the ledger crates at the given verbosity, e.g.
/// `warn,hotelier_core=info,hotelier_common=info,hotelier=info`.
pub fn default_directive(verbosity: u8) -> String {
    let level = level_for(verbosity).as_str().to_lowercase();
    let mut directive = String::from("warn");
    for target in LEDGER_TARGETS {
        directive.push_str(&format!(",{target}={level}"));
    }
    directive
}

/// Installs the global subscriber. Events go to stderr; stdout belongs to the menu.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(LedgerFormatter)
        .init();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
