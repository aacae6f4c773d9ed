mod registry;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use estacionamento_core::Error as CoreError;
use estacionamento_generate::{GenerationError, generate_fact_script, seed_reference_data};
use estacionamento_store::{SqliteConnection, audit_store, connect, init_schema, load_script};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use registry::{RunContext, RunReport, init_run_logging, start_run, write_report};
use settings::{Settings, SettingsError, load_settings};
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("store error: {0}")]
    Store(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("store audit failed: {0}")]
    AuditFailed(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "estacionamento",
    version,
    about = "Seeds the parking schema with synthetic data"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    /// Defaults to `run`.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// SQLite connection string.
    #[arg(long, global = true, value_name = "URL")]
    database: Option<String>,
    /// TOML settings file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Seed for the random generator; drawn at random when omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Output directory for run artifacts.
    #[arg(long, global = true, default_value = "runs")]
    run_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Schema, geography scripts, seed, fact script and replay.
    Run(RunArgs),
    /// Create the parking tables.
    InitSchema,
    /// Execute a `;`-separated SQL script.
    LoadScript {
        path: PathBuf,
    },
    /// Insert catalogs, vehicles and lots.
    Seed(SeedArgs),
    /// Write the ticket fact script without replaying it.
    Facts(FactsArgs),
    /// Check counts, plates and references.
    Verify,
}

#[derive(Args, Debug, Default)]
struct SeedArgs {
    #[arg(long)]
    vehicles: Option<u64>,
    #[arg(long)]
    lots: Option<u64>,
}

#[derive(Args, Debug, Default)]
struct FactsArgs {
    /// Ticket facts to generate.
    #[arg(long)]
    count: Option<u64>,
    /// Tuples per INSERT statement.
    #[arg(long)]
    batch_size: Option<usize>,
    /// Fact script path.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    #[command(flatten)]
    seed: SeedArgs,
    #[command(flatten)]
    facts: FactsArgs,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Run(_) => "run",
            Command::InitSchema => "init-schema",
            Command::LoadScript { .. } => "load-script",
            Command::Seed(_) => "seed",
            Command::Facts(_) => "facts",
            Command::Verify => "verify",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Run(RunArgs::default()));

    let mut settings = load_settings(cli.global.config.as_deref())?;
    apply_overrides(&mut settings, &cli.global, &command);
    let seed = settings.seed.unwrap_or_else(rand::random);
    settings.seed = Some(seed);

    let run_id = Uuid::new_v4().to_string();
    let run_ctx = RunContext {
        run_id: run_id.clone(),
        started_at: chrono::Utc::now(),
        command: command.name().to_string(),
        run_dir: cli.global.run_dir,
        settings: settings.clone(),
    };

    let run_paths = start_run(&run_ctx)?;
    init_run_logging(&run_paths.logs_path)?;

    info!(
        event = "run_started",
        run_id = %run_id,
        command = command.name(),
        seed,
        database = %settings.database_url,
        run_dir = %run_paths.root.display()
    );

    let timer = Instant::now();
    let mut report = RunReport {
        run_id: run_id.clone(),
        command: command.name().to_string(),
        seed: Some(seed),
        ..RunReport::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let outcome = execute(command, &settings, &mut rng, &mut report).await;

    report.duration_ms = timer.elapsed().as_millis() as u64;
    match &outcome {
        Ok(()) => report.status = "success".to_string(),
        Err(err) => {
            report.status = "failed".to_string();
            report.error = Some(err.to_string());
        }
    }
    write_report(&run_paths, &report)?;

    match outcome {
        Ok(()) => {
            info!(
                event = "run_finished",
                status = "success",
                duration_ms = report.duration_ms
            );
            println!("process completed successfully");
            Ok(())
        }
        Err(err) => {
            error!(event = "run_finished", status = "failed", error = %err);
            Err(err)
        }
    }
}

fn apply_overrides(settings: &mut Settings, global: &GlobalArgs, command: &Command) {
    if let Some(database) = &global.database {
        settings.database_url = database.clone();
    }
    if global.seed.is_some() {
        settings.seed = global.seed;
    }

    let (seed_args, fact_args) = match command {
        Command::Run(args) => (Some(&args.seed), Some(&args.facts)),
        Command::Seed(args) => (Some(args), None),
        Command::Facts(args) => (None, Some(args)),
        _ => (None, None),
    };

    if let Some(args) = seed_args {
        if let Some(vehicles) = args.vehicles {
            settings.vehicles = vehicles;
        }
        if let Some(lots) = args.lots {
            settings.lots = lots;
        }
    }
    if let Some(args) = fact_args {
        if let Some(count) = args.count {
            settings.fact_count = count;
        }
        if let Some(batch_size) = args.batch_size {
            settings.batch_size = batch_size;
        }
        if let Some(out) = &args.out {
            settings.facts_script = out.clone();
        }
    }
}

async fn execute(
    command: Command,
    settings: &Settings,
    rng: &mut ChaCha8Rng,
    report: &mut RunReport,
) -> Result<(), CliError> {
    let mut conn = connect(&settings.database_url).await?;

    match command {
        Command::Run(_) => run_pipeline(&mut conn, settings, rng, report).await,
        Command::InitSchema => Ok(init_schema(&mut conn).await?),
        Command::LoadScript { path } => {
            report.scripts.push(load_script(&mut conn, &path).await?);
            Ok(())
        }
        Command::Seed(_) => {
            let seeded = seed_reference_data(&mut conn, rng, &settings.seed_options()).await?;
            report.seed_report = Some(seeded);
            Ok(())
        }
        Command::Facts(_) => {
            let facts = generate_fact_script(&mut conn, rng, &settings.fact_options()).await?;
            report.fact_report = Some(facts);
            Ok(())
        }
        Command::Verify => verify(&mut conn, report).await,
    }
}

/// Schema, geography, seed, fact script, replay, audit.
async fn run_pipeline(
    conn: &mut SqliteConnection,
    settings: &Settings,
    rng: &mut ChaCha8Rng,
    report: &mut RunReport,
) -> Result<(), CliError> {
    init_schema(conn).await?;

    report
        .scripts
        .push(load_script(conn, &settings.estado_script).await?);
    report
        .scripts
        .push(load_script(conn, &settings.cidades_script).await?);

    report.seed_report = Some(seed_reference_data(conn, rng, &settings.seed_options()).await?);

    let fact_options = settings.fact_options();
    report.fact_report = Some(generate_fact_script(conn, rng, &fact_options).await?);
    report
        .scripts
        .push(load_script(conn, &fact_options.out_path).await?);

    verify(conn, report).await
}

async fn verify(conn: &mut SqliteConnection, report: &mut RunReport) -> Result<(), CliError> {
    let audit = audit_store(conn).await?;
    let consistent = audit.is_consistent();
    let summary = format!(
        "duplicate plates: {}, invalid plates: {}, orphans: {:?}",
        audit.duplicate_plates,
        audit.invalid_plates.len(),
        audit.orphans
    );
    info!(event = "audit_summary", rows = ?audit.row_counts, consistent);
    report.audit = Some(audit);

    if consistent {
        Ok(())
    } else {
        Err(CliError::AuditFailed(summary))
    }
}
