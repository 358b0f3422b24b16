#![forbid(unsafe_code)]

mod commands;
mod config;
mod helpers;
mod render;

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Generator, Shell};
use config::{ConfigError, Overrides, Settings};
use jalmitr_core::{ExitCode, MachineError, ENV_JALMITR_LOG_LEVEL};
use jalmitr_model::{Language, SampleType};
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const CRATE_NAME: &str = "jalmitr-cli";

const JALMITR_HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
Usage: {usage}

Options:
{options}

Commands:
{subcommands}
{after-help}";

#[derive(Parser)]
#[command(name = "jalmitr", version)]
#[command(about = "Water-quality assessment against drinking-water and STP/ETP discharge standards")]
#[command(help_template = JALMITR_HELP_TEMPLATE)]
#[command(
    after_help = "Environment:\n  JALMITR_LOG_LEVEL    Log verbosity override\n  JALMITR_LOG_JSON     Emit logs as JSON\n  JALMITR_PINCODE_CSV  Pincode directory file\n  JALMITR_LANG         Output language (en, hi, hi-en)"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
    #[arg(long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[arg(long, global = true, default_value_t = false)]
    trace: bool,
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_enum)]
    lang: Option<LanguageCli>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one water sample and print the report
    Assess(AssessArgs),
    /// Show district, state and post office for a pincode
    Lookup {
        #[arg(long)]
        pincode: String,
        #[arg(long, value_name = "PATH")]
        pincode_csv: Option<PathBuf>,
    },
    /// List parameters with input ranges and standards
    Catalog {
        #[arg(long, value_parser = parse_sample_type)]
        sample_type: Option<SampleType>,
    },
    /// Print the message dictionary for the active language
    Messages,
    /// Show config file locations and effective settings
    Config,
    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Print version information
    Version,
}

#[derive(clap::Args)]
struct AssessArgs {
    #[arg(long)]
    pincode: String,
    /// `TAP WATER`, `STP/ETP`, or a slug such as `tap-water` or `stp`
    #[arg(long, value_parser = parse_sample_type)]
    sample_type: SampleType,
    /// Measured value, repeatable (e.g. `--value TDS=350`)
    #[arg(long = "value", value_name = "NAME=VALUE")]
    values: Vec<String>,
    /// JSON or TOML table of parameter name to value
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,
    /// Write the report table as CSV
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,
    #[arg(long, value_name = "PATH")]
    pincode_csv: Option<PathBuf>,
}

fn parse_sample_type(raw: &str) -> Result<SampleType, String> {
    SampleType::parse(raw).map_err(|e| e.to_string())
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LanguageCli {
    En,
    Hi,
    #[value(alias = "hi_en")]
    HiEn,
}

impl From<LanguageCli> for Language {
    fn from(value: LanguageCli) -> Self {
        match value {
            LanguageCli::En => Self::En,
            LanguageCli::Hi => Self::Hi,
            LanguageCli::HiEn => Self::HiEn,
        }
    }
}

pub fn main_entry() -> ProcessExitCode {
    let wants_json = std::env::args().any(|arg| arg == "--json");
    match run() {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            emit_error(&err, wants_json);
            ProcessExitCode::from(err.exit_code as u8)
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => {
                return Err(CliError {
                    exit_code: ExitCode::Usage,
                    machine: MachineError::new("usage_error", "invalid command line arguments")
                        .with_detail("error", &err.to_string()),
                });
            }
        },
    };
    let output_mode = OutputMode { json: cli.json };
    let command = cli.command.ok_or_else(|| CliError::usage("missing command; see --help"))?;
    let log_flags = LogFlags {
        quiet: cli.quiet,
        verbose: cli.verbose,
        trace: cli.trace,
    };

    match &command {
        Commands::Completion { shell } => {
            print_completion(*shell);
            return Ok(());
        }
        Commands::Version => return commands::run_version(output_mode),
        _ => {}
    }

    let settings = Settings::resolve(Overrides {
        config: cli.config.as_deref(),
        language: cli.lang.map(Language::from),
    })
    .map_err(CliError::from_config)?;
    init_tracing(log_flags, settings.log_json);
    tracing::debug!(
        sources = ?settings.sources,
        language = settings.language.code(),
        pincode_csv = %settings.pincode_csv.display(),
        "configuration resolved"
    );

    match command {
        Commands::Assess(args) => commands::run_assess(
            commands::AssessRequest {
                pincode: args.pincode,
                sample_type: args.sample_type,
                values: args.values,
                input: args.input,
                export: args.export,
                pincode_csv: args.pincode_csv,
            },
            &settings,
            output_mode,
        ),
        Commands::Lookup {
            pincode,
            pincode_csv,
        } => commands::run_lookup(&pincode, pincode_csv, &settings, output_mode),
        Commands::Catalog { sample_type } => commands::run_catalog(sample_type, output_mode),
        Commands::Messages => commands::run_messages(settings.language, output_mode),
        Commands::Config => commands::run_config(&settings, output_mode),
        Commands::Completion { .. } | Commands::Version => Ok(()),
    }
}

#[derive(Clone, Copy)]
struct LogFlags {
    quiet: bool,
    verbose: u8,
    trace: bool,
}

#[derive(Clone, Copy)]
struct OutputMode {
    json: bool,
}

fn print_completion<G: Generator>(generator: G) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(generator, &mut command, name, &mut std::io::stdout());
}

/// `JALMITR_LOG_LEVEL` wins over the verbosity flags; `warn` keeps human
/// output clean by default.
fn log_directive(flags: LogFlags, env_level: Option<String>) -> String {
    if let Some(level) = env_level.filter(|l| !l.trim().is_empty()) {
        return level.trim().to_string();
    }
    let level = if flags.trace || flags.verbose > 1 {
        "trace"
    } else if flags.verbose == 1 {
        "debug"
    } else if flags.quiet {
        "error"
    } else {
        "warn"
    };
    level.to_string()
}

fn init_tracing(flags: LogFlags, log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(log_directive(
            flags,
            std::env::var(ENV_JALMITR_LOG_LEVEL).ok(),
        ))
    });
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let installed = if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    };
    if let Err(err) = installed {
        eprintln!("failed to install log subscriber: {err}");
    }
}

#[derive(Debug)]
struct CliError {
    exit_code: ExitCode,
    machine: MachineError,
}

impl CliError {
    fn internal(message: String) -> Self {
        Self {
            exit_code: ExitCode::Internal,
            machine: MachineError::new("internal_error", &message),
        }
    }

    fn dependency(code: &str, message: String) -> Self {
        Self {
            exit_code: ExitCode::DependencyFailure,
            machine: MachineError::new(code, &message),
        }
    }

    fn validation(code: &str, message: &str) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            machine: MachineError::new(code, message),
        }
    }

    fn usage(message: &str) -> Self {
        Self {
            exit_code: ExitCode::Usage,
            machine: MachineError::new("usage_error", message),
        }
    }

    fn with_detail(mut self, key: &str, value: &str) -> Self {
        self.machine = self.machine.with_detail(key, value);
        self
    }

    fn from_config(err: ConfigError) -> Self {
        match err {
            ConfigError::Unreadable(m) => Self::dependency("config_unreadable", m),
            ConfigError::Invalid(m) => Self {
                exit_code: ExitCode::Usage,
                machine: MachineError::new("invalid_config", &m),
            },
        }
    }
}

fn emit_error(error: &CliError, machine_json: bool) {
    if machine_json {
        match serde_json::to_string(&error.machine) {
            Ok(payload) => eprintln!("{payload}"),
            Err(_) => eprintln!(
                "{{\"code\":\"internal_error\",\"message\":\"failed to encode structured error\",\"details\":{{}}}}"
            ),
        }
    } else {
        eprintln!("{}", error.machine.message);
    }
}
