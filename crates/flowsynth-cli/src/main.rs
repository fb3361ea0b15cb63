mod loader;
mod resolver;

use clap::{Args, Parser, Subcommand};
use flowsynth_build::{
    Collaborators, generate, generator::FactoryRegistry, paths::RuntimePaths,
    schema::InMemorySchemaStore, support::RegistrationContext,
};
use flowsynth_config::{Config, ConfigError};
use flowsynth_descriptor::{Descriptor, DescriptorError};
use resolver::ContributionResolver;
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};
use thiserror::Error as ThisError;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "flowsynth",
    version,
    about = "Synthesize builder-API programs from flow application descriptors"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the program for one descriptor
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Application descriptor (JSON)
    #[arg(value_name = "DESCRIPTOR")]
    descriptor: PathBuf,

    /// Destination of the generated program
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Config file; defaults to flowsynth.toml next to the descriptor
    #[arg(short, long, value_name = "FILE", env = "FLOWSYNTH_CONFIG")]
    config: Option<PathBuf>,
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to load descriptor: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("synthesis failed: {0}")]
    Build(#[from] flowsynth_build::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // outlives every pass in the process
    let mut context = RegistrationContext::new();

    let result = match cli.command {
        Command::Generate(args) => run_generate(&args, &mut context),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");

            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn run_generate(args: &GenerateArgs, context: &mut RegistrationContext) -> Result<(), CliError> {
    let descriptor = Descriptor::from_path(&args.descriptor)?;
    let work_dir = args
        .descriptor
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let config = Config::discover(args.config.as_deref(), work_dir)?;
    let paths = RuntimePaths::resolve(config.runtime_crate.as_deref())?;

    let resolver = ContributionResolver::new(&config);
    let loaders = loader::registry(&config, &descriptor);
    let mut schemas = InMemorySchemaStore::new();
    let mut factories = FactoryRegistry::new();

    generate(
        &descriptor,
        Collaborators {
            resolver: &resolver,
            schemas: &mut schemas,
            loaders: &loaders,
            factories: &mut factories,
            context,
        },
        paths,
        work_dir,
        &args.output,
    )?;

    info!(output = %args.output.display(), "program written");

    Ok(())
}
