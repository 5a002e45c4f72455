mod config;
mod logging;
mod render;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gimei_core::{
    Error as CoreError, Gender, SchemaViolation, Script, TableSummary, Tables, addresses_json_schema,
    names_json_schema, validate_addresses_json, validate_names_json, validate_tables,
};
use gimei_generate::assets::{ADDRESSES_FILE, NAMES_FILE, read_json_asset};
use gimei_generate::{
    GenerationError, Gimei, Randomizer, SeededRandomizer, ThreadRandomizer, embedded_tables,
    load_tables_dir,
};
use thiserror::Error;

use config::{ConfigError, GimeiConfig, OutputFormat, Overrides, Settings, resolve_log_level};
use logging::init_logging;
use render::{render_addresses, render_names};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid tables: {0}")]
    InvalidTables(String),
}

#[derive(Parser, Debug)]
#[command(name = "gimei", version, about = "Random Japanese names and addresses")]
struct Cli {
    /// Path to a TOML config file (defaults to ./gimei.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log filter directive, e.g. `debug` or `gimei_generate=trace`.
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,
    /// Emit logs as JSON.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate names.
    Name(NameArgs),
    /// Generate addresses.
    Address(GenerateArgs),
    /// Load and validate name and address tables.
    Validate(ValidateArgs),
    /// Print the JSON Schema of an asset file.
    Schema(SchemaArgs),
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    /// Number of records to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Script printed by the text format.
    #[arg(long)]
    script: Option<Script>,
    /// Directory holding names.json and addresses.json.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl GenerateArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            data_dir: self.data_dir.clone(),
            seed: self.seed,
            format: self.format,
            script: self.script,
        }
    }
}

#[derive(Args, Debug)]
struct NameArgs {
    /// Gender of the first name; drawn at random when omitted.
    #[arg(long)]
    gender: Option<Gender>,
    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Directory holding names.json and addresses.json; the built-in tables
    /// are checked when omitted.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    #[arg(value_enum)]
    asset: AssetKind,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AssetKind {
    Names,
    Addresses,
}

/// Randomizer chosen from the effective seed.
enum CliRandomizer {
    Thread(ThreadRandomizer),
    Seeded(SeededRandomizer),
}

impl CliRandomizer {
    fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => CliRandomizer::Seeded(SeededRandomizer::new(seed)),
            None => CliRandomizer::Thread(ThreadRandomizer),
        }
    }
}

impl Randomizer for CliRandomizer {
    fn rnd(&self) -> f64 {
        match self {
            CliRandomizer::Thread(randomizer) => randomizer.rnd(),
            CliRandomizer::Seeded(randomizer) => randomizer.rnd(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = GimeiConfig::load(cli.config.as_deref())?;
    let level = resolve_log_level(cli.log_level.as_deref(), &config);
    init_logging(&level, cli.log_json || config.logging.json).map_err(CliError::Logging)?;

    match cli.command {
        Command::Name(args) => run_name(args, &config),
        Command::Address(args) => run_address(args, &config),
        Command::Validate(args) => run_validate(args, &config),
        Command::Schema(args) => run_schema(args),
    }
}

fn run_name(args: NameArgs, config: &GimeiConfig) -> Result<(), CliError> {
    let settings = Settings::resolve(config, args.generate.overrides());
    let gimei = build_generator(&settings)?;
    let names = gimei.names(args.generate.count, args.gender)?;
    tracing::info!(count = names.len(), gender = ?args.gender, "generated names");

    let mut out = io::stdout().lock();
    render_names(&mut out, &names, settings.format, settings.script)
}

fn run_address(args: GenerateArgs, config: &GimeiConfig) -> Result<(), CliError> {
    let settings = Settings::resolve(config, args.overrides());
    let gimei = build_generator(&settings)?;
    let addresses = gimei.addresses(args.count)?;
    tracing::info!(count = addresses.len(), "generated addresses");

    let mut out = io::stdout().lock();
    render_addresses(&mut out, &addresses, settings.format, settings.script)
}

fn run_validate(args: ValidateArgs, config: &GimeiConfig) -> Result<(), CliError> {
    let data_dir = args.data_dir.or_else(|| config.data_dir.clone());
    let tables = match &data_dir {
        Some(dir) => {
            check_documents(dir)?;
            Arc::new(load_tables_dir(dir)?)
        }
        None => embedded_tables()?,
    };

    validate_tables(&tables)?;
    print_summary(&TableSummary::of(&tables));
    Ok(())
}

fn run_schema(args: SchemaArgs) -> Result<(), CliError> {
    let schema = match args.asset {
        AssetKind::Names => names_json_schema(),
        AssetKind::Addresses => addresses_json_schema(),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn build_generator(settings: &Settings) -> Result<Gimei<CliRandomizer>, CliError> {
    let tables: Arc<Tables> = match &settings.data_dir {
        Some(dir) => Arc::new(load_tables_dir(dir)?),
        None => embedded_tables()?,
    };
    tracing::debug!(seed = ?settings.seed, "building generator");
    Ok(Gimei::with_tables(
        tables,
        CliRandomizer::from_seed(settings.seed),
    ))
}

type DocumentCheck = fn(&serde_json::Value) -> gimei_core::Result<Vec<SchemaViolation>>;

/// Checks both asset documents against their JSON Schemas before parsing.
fn check_documents(dir: &Path) -> Result<(), CliError> {
    let checks: [(&str, DocumentCheck); 2] = [
        (NAMES_FILE, validate_names_json),
        (ADDRESSES_FILE, validate_addresses_json),
    ];

    let mut failures = 0;
    for (file, validate) in checks {
        let document = read_json_asset(&dir.join(file))?;
        for violation in validate(&document)? {
            eprintln!("{file} {}: {}", violation.path, violation.message);
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(CliError::InvalidTables(format!(
            "{failures} schema violation(s) in {}",
            dir.display()
        )));
    }
    Ok(())
}

fn print_summary(summary: &TableSummary) {
    println!("names.first_name.male    {}", summary.male);
    println!("names.first_name.female  {}", summary.female);
    println!("names.last_name          {}", summary.last_name);
    println!("addresses.prefecture     {}", summary.prefecture);
    println!("addresses.city           {}", summary.city);
    println!("addresses.town           {}", summary.town);
    println!("name combinations        {}", summary.name_combinations());
    println!("address combinations     {}", summary.address_combinations());
}
