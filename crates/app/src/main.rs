use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppConfig, AppServices, Clock, JournalService, MindsetSession, QuizService, QuotePicker,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "app=info,services=info,ui=info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidExportDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidExportDir { raw } => write!(f, "invalid --export-dir value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn journal_service(&self) -> Arc<JournalService> {
        self.services.journal()
    }

    fn quote_picker(&self) -> Arc<QuotePicker> {
        self.services.quotes()
    }

    fn export_dir(&self) -> &Path {
        self.services.export_dir()
    }

    fn new_session(&self) -> MindsetSession {
        self.services.new_session()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--export-dir <path>] [--seed <u64>]");
    eprintln!("  cargo run -p app -- quote [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --export-dir .   (the journal is written as growth_journal.csv)");
    eprintln!("  --seed           unset, quotes are drawn from OS entropy");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GROWTH_EXPORT_DIR, GROWTH_QUOTE_SEED, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Quote,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "quote" => Some(Self::Quote),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    export_dir: PathBuf,
    quote_seed: Option<u64>,
}

impl Args {
    /// Parses flags over environment defaults. `env` is injected so parsing
    /// stays testable.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut export_dir = env("GROWTH_EXPORT_DIR")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let mut quote_seed = env("GROWTH_QUOTE_SEED")
            .filter(|value| !value.trim().is_empty())
            .map(parse_seed)
            .transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--export-dir" => {
                    let value = require_value(args, "--export-dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidExportDir { raw: value });
                    }
                    export_dir = PathBuf::from(value);
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    quote_seed = Some(parse_seed(value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            export_dir,
            quote_seed,
        })
    }

    fn into_config(self) -> AppConfig {
        AppConfig {
            export_dir: self.export_dir,
            quote_seed: self.quote_seed,
        }
    }
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand means `ui`.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter(), |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    info!(command = ?cmd, "starting");
    let services = AppServices::new(parsed.into_config(), Clock::default_clock());

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // Keep the window a normal window rather than always-on-top.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Growth Mindset Challenge")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Quote => {
            match services.quotes().pick() {
                Some(quote) => println!("{quote}"),
                None => eprintln!("no quotes available"),
            }
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
