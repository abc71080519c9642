use clap::{Parser, Subcommand};
use floorplan_cli::{analyze_file, AnalysisJob};
use floorplan_common::ProjectData;
use color_eyre::eyre::Result;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect walls in a single floor plan image
    Analyze {
        /// Path to the floor plan image
        #[arg(short, long)]
        input: PathBuf,
        /// Where to write the walls document (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Analyse every plan listed in a job file
    Batch {
        /// Path to the .toml or .json job file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Write the sample project hierarchy
    Project {
        /// Where to write the project document (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Analyze { input, output } => analyze(input, output.as_deref())?,
        Commands::Batch { config } => batch(config)?,
        Commands::Project { output } => project(output.as_deref())?,
    }

    Ok(())
}

fn analyze(input: &Path, output: Option<&Path>) -> Result<()> {
    let response = analyze_file(input)?;
    info!("Detected {} walls in {:?}", response.walls.len(), input);

    match output {
        Some(path) => {
            response.save_json(path)?;
            info!("Walls saved to: {:?}", path);
        }
        None => println!("{}", response.to_json()?),
    }
    Ok(())
}

fn batch(config_path: &Path) -> Result<()> {
    let job = AnalysisJob::from_file(config_path)?;
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let output_dir = base_dir.join(&job.output_dir);

    // Create output directory if it doesn't exist
    std::fs::create_dir_all(&output_dir)?;

    let mut failed = 0;
    for plan in &job.plans {
        let input = plan.resolved_path(base_dir);
        let output = plan.output_path(&output_dir);
        info!("Analyzing plan '{}' -> {:?}", plan.name, output);

        let result = analyze_file(&input).and_then(|response| {
            response.save_json(&output)?;
            Ok(response.walls.len())
        });

        match result {
            Ok(count) => info!("Plan '{}': {} walls", plan.name, count),
            Err(e) => {
                failed += 1;
                error!("Plan '{}' failed: {}", plan.name, e);
            }
        }
    }

    info!(
        "Batch completed: {} succeeded, {} failed",
        job.plans.len() - failed,
        failed
    );
    Ok(())
}

fn project(output: Option<&Path>) -> Result<()> {
    let json = ProjectData::sample().to_json()?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Project saved to: {:?}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
