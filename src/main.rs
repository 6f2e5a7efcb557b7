//! yaml-colors - color YAML keys by indentation depth in the terminal

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use log::{LevelFilter, Log, Metadata, Record};

use yaml_colors::syntax::{is_yaml_document, parse_tab_size};
use yaml_colors::terminal::TerminalPainter;
use yaml_colors::{ColorsError, Config, Result, Session};

/// Tab size when neither the command line nor the config gives one
const DEFAULT_TAB_SIZE: usize = 2;

/// Environment variable overriding the log level
const LOG_ENV: &str = "YAML_COLORS_LOG";

/// Command line options
#[derive(Debug, Default)]
struct Options {
    tab_size: Option<usize>,
    list: bool,
    toggle: bool,
    verbosity: u8,
    files: Vec<String>,
}

/// Plain stderr logger for the `log` facade
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbosity: u8) {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(options) = parse_args(&args)? else {
        return Ok(());
    };

    init_logging(options.verbosity);

    let mut config = Config::load();

    if options.toggle {
        let enabled = config.toggle_enabled();
        config.save()?;
        println!("yaml-colors {}", if enabled { "enabled" } else { "disabled" });
        return Ok(());
    }

    let tab_size = options
        .tab_size
        .or(config.tab_size)
        .unwrap_or(DEFAULT_TAB_SIZE);

    let mut session = Session::create(config.palette());
    session.set_enabled(config.enabled);
    let mut painter = TerminalPainter::new();

    let files = if options.files.is_empty() {
        vec!["-".to_string()]
    } else {
        options.files.clone()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for file in &files {
        colorize(file, &mut session, &mut painter, tab_size, options.list, &mut out)?;
    }

    Ok(())
}

/// Parse arguments. `None` means help or version was printed.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                print_version();
                return Ok(None);
            }
            "--tab-size" | "-t" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ColorsError::Message(format!("{} needs a value", arg)))?;
                options.tab_size = Some(parse_tab_size(value));
            }
            "--list" | "-l" => options.list = true,
            "--toggle" => options.toggle = true,
            "--verbose" | "-v" => options.verbosity = options.verbosity.saturating_add(1),
            "-" => options.files.push(arg.clone()),
            _ if arg.starts_with('-') => {
                return Err(ColorsError::Message(format!("Unknown option: {}", arg)));
            }
            _ => options.files.push(arg.clone()),
        }
    }

    Ok(Some(options))
}

/// Classify one file and print it colored, or list its spans
fn colorize(
    file: &str,
    session: &mut Session,
    painter: &mut TerminalPainter,
    tab_size: usize,
    list: bool,
    out: &mut impl Write,
) -> Result<()> {
    let (text, is_yaml) = if file == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        (text, true)
    } else {
        let path = Path::new(file);
        (fs::read_to_string(path)?, is_yaml_document(None, Some(path)))
    };

    if !is_yaml {
        log::info!("{} is not a YAML file, printing it uncolored", file);
        out.write_all(text.as_bytes())?;
        return Ok(());
    }

    session.reclassify(&text, tab_size);

    if list {
        let mut spans: Vec<_> = session
            .pending()
            .iter()
            .flat_map(|(bucket, spans)| spans.iter().map(move |span| (*span, bucket)))
            .collect();
        spans.sort_by_key(|(span, _)| span.start.offset);
        for (span, bucket) in spans {
            writeln!(
                out,
                "{}:{}:{}-{}:{} {} {}",
                file,
                span.start.line + 1,
                span.start.column + 1,
                span.end.line + 1,
                span.end.column + 1,
                bucket,
                span.text(&text)
            )?;
        }
    }

    session.apply(painter);
    if !list {
        painter.render(&text, out)?;
    }
    Ok(())
}

fn print_usage() {
    println!("yaml-colors {} - color YAML keys by indentation depth", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: yaml-colors [OPTIONS] [FILE...]");
    println!();
    println!("Options:");
    println!("  -t, --tab-size N  Indentation width (default: config tab-size, then {})", DEFAULT_TAB_SIZE);
    println!("  -l, --list        Print each colored span as FILE:LINE:COL-LINE:COL BUCKET TEXT");
    println!("      --toggle      Turn colorizing on or off in the config file");
    println!("  -v, --verbose     More log output (repeat for more); {} overrides", LOG_ENV);
    println!("  -h, --help        Show this help message");
    println!("  -V, --version     Show version information");
    println!();
    println!("With no FILE, or when FILE is -, read standard input as YAML.");
    if let Some(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn print_version() {
    println!("yaml-colors {}", env!("CARGO_PKG_VERSION"));
}
