//! # Cohort
//!
//! Command-line tool for distributing a student roster into balanced
//! classrooms or into treasure-hunt teams spread across locations.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use cohort_core::allocation::{FixedSizeBucketer, StratifiedAllocator};
use cohort_core::config::{CohortConfig, ConfigManager};
use cohort_core::constants::OutputFormat;
use cohort_core::logging::{init_logging, log_error};
use cohort_core::report::{writer_for, ClassroomReport, TeamReport};
use cohort_core::roster::{load_roster, Roster};
use cohort_core::validation::{parse_classroom_list, validate_positive_count};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "cohort")]
#[command(about = "Distribute a student roster into balanced classrooms or teams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration directory containing cohort-config.yaml (default: config)
    #[arg(long, env = "COHORT_CONFIG_DIR", global = true)]
    config_dir: Option<PathBuf>,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Distribute students into classrooms balanced by gender and branch
    Classrooms(ClassroomArgs),

    /// Form teams of 5-6 and assign them round-robin to locations
    Teams(TeamArgs),
}

#[derive(Args)]
pub struct ClassroomArgs {
    /// Input roster (.csv)
    #[arg(short, long)]
    file: PathBuf,

    /// Number of classes to create (Class_01, Class_02, ...)
    #[arg(long, conflicts_with = "classrooms")]
    classes: Option<usize>,

    /// Comma separated classroom names, e.g. "AIML-CR001,AIML-CR002,BT-217"
    #[arg(long)]
    classrooms: Option<String>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (csv, json)
    #[arg(long)]
    format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct TeamArgs {
    /// Input roster (.csv)
    #[arg(short, long)]
    file: PathBuf,

    /// Team name prefix, e.g. S1-B
    #[arg(short, long)]
    prefix: Option<String>,

    /// Nominal team size (minimum 6)
    #[arg(long)]
    team_size: Option<usize>,

    /// Number of locations
    #[arg(long)]
    locations: Option<usize>,

    /// Shuffle seed for reproducible teams
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (csv, json)
    #[arg(long)]
    format: Option<OutputFormat>,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            log_error("cli", command_name(&cli.command), &format!("{e:#}"), None);
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Classrooms(_) => "classrooms",
        Commands::Teams(_) => "teams",
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let environment = ConfigManager::detect_environment();
    let manager = ConfigManager::load_or_default(cli.config_dir.clone(), &environment)
        .context("Failed to load configuration")?;
    let config = manager.config();

    let level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    init_logging(level, cli.json_logs || config.logging.json);
    debug!(config = %manager.debug_config(), environment = %manager.environment(), "Effective configuration");

    match &cli.command {
        Commands::Classrooms(args) => run_classrooms(config, args),
        Commands::Teams(args) => run_teams(config, args),
    }
}

fn load(file: &Path) -> anyhow::Result<Roster> {
    println!("Checking input file: {}", file.display());
    let roster =
        load_roster(file).with_context(|| format!("Failed to load roster {}", file.display()))?;

    if roster.dropped > 0 {
        println!("Removed {} rows with missing critical data", roster.dropped);
    }

    let profile = roster.profile();
    profile.log();
    println!();
    print!("{}", profile.render());
    Ok(roster)
}

fn run_classrooms(config: &CohortConfig, args: &ClassroomArgs) -> anyhow::Result<()> {
    println!("Student Classroom Distribution");
    println!("{}", "=".repeat(40));

    let names = match (args.classes, &args.classrooms) {
        (Some(count), _) => {
            validate_positive_count(count, "classes")?;
            config.classrooms.destination_names(Some(count))
        }
        (None, Some(list)) => parse_classroom_list(list)?,
        (None, None) => config.classrooms.destination_names(None),
    };
    if names.is_empty() {
        bail!("Specify --classes or --classrooms, or configure classrooms.names");
    }

    // Preconditions are checked before the roster is touched
    let allocator = StratifiedAllocator::new(names)?;
    let roster = load(&args.file)?;

    println!();
    println!("Creating {} classrooms:", allocator.destination_names().len());
    for name in allocator.destination_names() {
        println!("   - {name}");
    }

    let report = ClassroomReport::new(allocator.allocate(&roster.records));

    println!();
    println!("Final Distribution Summary:");
    println!("{}", "-".repeat(50));
    print!("{}", report.render());

    let format = args.format.unwrap_or(config.output.format);
    let directory = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.directory));
    let written = writer_for(format, &directory).write_classrooms(&report)?;

    info!(files = written.len(), directory = %directory.display(), "Classroom report written");
    println!("Process completed! Wrote {} files to '{}'", written.len(), directory.display());
    Ok(())
}

fn run_teams(config: &CohortConfig, args: &TeamArgs) -> anyhow::Result<()> {
    println!("Treasure Hunt Team Generator");
    println!("{}", "=".repeat(40));

    let mut teams_config = config.teams.clone();
    if let Some(team_size) = args.team_size {
        teams_config.team_size = team_size;
    }
    if let Some(count) = args.locations {
        validate_positive_count(count, "locations")?;
        teams_config.location_count = count;
        teams_config.locations.clear();
    }
    if let Some(prefix) = &args.prefix {
        teams_config.team_name_prefix = prefix.clone();
    }
    let seed = args.seed.or(teams_config.seed);

    let bucketer = FixedSizeBucketer::new(teams_config.bucket_options())?;
    let roster = load(&args.file)?;

    let teams = bucketer.bucket_seeded(&roster.records, seed);
    let report = TeamReport::new(teams);

    println!();
    print!("{}", report.render());

    let format = args.format.unwrap_or(config.output.format);
    let directory = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.directory));
    let written = writer_for(format, &directory).write_teams(&report)?;

    info!(
        teams = report.teams.len(),
        seed = ?seed,
        directory = %directory.display(),
        "Team report written"
    );
    println!("Output saved to '{}' ({} files)", directory.display(), written.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_classes_conflict_with_classroom_list() {
        let result = Cli::try_parse_from([
            "cohort",
            "classrooms",
            "--file",
            "students.csv",
            "--classes",
            "3",
            "--classrooms",
            "A,B",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_team_flags_parse() {
        let cli = Cli::try_parse_from([
            "cohort", "teams", "-f", "s1.csv", "-p", "S1-B", "--team-size", "6", "--locations",
            "8", "--seed", "42", "--format", "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Teams(args) => {
                assert_eq!(args.prefix.as_deref(), Some("S1-B"));
                assert_eq!(args.team_size, Some(6));
                assert_eq!(args.locations, Some(8));
                assert_eq!(args.seed, Some(42));
                assert_eq!(args.format, Some(OutputFormat::Json));
            }
            Commands::Classrooms(_) => panic!("expected teams subcommand"),
        }
    }
}
