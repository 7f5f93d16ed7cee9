use clap::{Parser, Subcommand};
use instant::Instant;
use scanner_alignment::analysis::build_report;
use scanner_alignment::config::load_config_or_default;
use scanner_alignment::fusion::fuse;
use scanner_alignment::logging::{LoggingConfig, SessionSpan};
use scanner_alignment::visualization::{print_origin_table, print_report};
use scanner_alignment::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fuse")]
#[command(about = "Unsupervised multi-scanner 3D beacon map alignment and fusion system")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write structured JSON logs to this directory instead of plain console logging
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fuse a scanner report into one global beacon map
    Fuse {
        /// Path to the scanner report file
        #[arg(short, long)]
        input: PathBuf,

        /// Configuration file (JSON or TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// Override the minimum coincidence count required per merge
        #[arg(short, long)]
        min_overlap: Option<usize>,

        /// Output file for the JSON fusion report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a synthetic scanner report with known ground truth
    Generate {
        /// Output file for the scanner report
        #[arg(short, long)]
        output: PathBuf,

        /// Configuration file (JSON or TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// Number of scanners in the chain
        #[arg(short, long)]
        scanners: Option<usize>,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Fuse a synthetic scene and score recovered origins against ground truth
    Test {
        /// Configuration file (JSON or TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output file for JSON test results
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Either structured tracing with a file appender, or plain env_logger;
    // never both, since each installs a global logger.
    let _guard = if cli.log_dir.is_some() {
        let logging = LoggingConfig {
            global_level: level.to_string(),
            log_directory: cli.log_dir.clone(),
            ..LoggingConfig::default()
        };
        logging
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid logging configuration: {}", e))?;
        scanner_alignment::logging::init_logging(&logging)?
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(match cli.verbose {
                0 => log::LevelFilter::Warn,
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            })
            .init();
        None
    };

    match cli.command {
        Commands::Fuse { input, config, min_overlap, output } => {
            handle_fuse(input, config, min_overlap, output)?;
        }
        Commands::Generate { output, config, scanners, seed } => {
            handle_generate(output, config, scanners, seed)?;
        }
        Commands::Test { config, seed, output } => {
            handle_test(config, seed, output)?;
        }
    }

    Ok(())
}

fn handle_fuse(
    input: PathBuf,
    config_path: Option<String>,
    min_overlap: Option<usize>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut config = load_config_or_default(config_path.as_deref());
    if let Some(min) = min_overlap {
        config.fusion.min_coincidences = min;
    }

    println!("Loading scanner report...");
    let scanners = load_scanners(&input)?;
    println!(
        "Loaded {} scanners, {} beacon observations",
        scanners.len(),
        scanners.iter().map(|s| s.len()).sum::<usize>()
    );

    let start = Instant::now();
    let outcome = fuse(scanners, &config.fusion)?;
    let report = build_report(&outcome, start.elapsed().as_millis() as f32);

    print_report(&report);

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(output_path, json)?;
        println!("Report saved to file.");
    }

    Ok(())
}

fn handle_generate(
    output: PathBuf,
    config_path: Option<String>,
    scanners: Option<usize>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let mut config = load_config_or_default(config_path.as_deref());
    if let Some(count) = scanners {
        config.synthetic.scanners = count;
    }
    if let Some(seed) = seed {
        config.synthetic.seed = seed;
    }
    if let Err(errors) = config.validate() {
        anyhow::bail!("invalid configuration: {}", errors.join("; "));
    }

    let scene = SceneGenerator::from_seed(config.synthetic.seed).generate(&config.synthetic);
    std::fs::write(&output, format_scanners(&scene.scanners))?;

    println!(
        "Generated {} scanners observing {} distinct beacons (seed {})",
        scene.scanners.len(),
        scene.beacon_count,
        config.synthetic.seed
    );
    println!("Scene written to {:?}", output);

    Ok(())
}

fn handle_test(
    config_path: Option<String>,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut config = load_config_or_default(config_path.as_deref());
    if let Some(seed) = seed {
        config.synthetic.seed = seed;
    }
    if let Err(errors) = config.validate() {
        anyhow::bail!("invalid configuration: {}", errors.join("; "));
    }

    let session_id = scanner_alignment::logging::new_correlation_id();
    let session = SessionSpan::new("synthetic_test", session_id);
    let _enter = session.enter();
    session.record_config(serde_json::json!({
        "scanners": config.synthetic.scanners,
        "shared_beacons": config.synthetic.shared_beacons,
        "unique_beacons": config.synthetic.unique_beacons,
        "seed": config.synthetic.seed,
        "min_coincidences": config.fusion.min_coincidences,
    }));

    println!("Generating synthetic scene (seed {})...", config.synthetic.seed);
    let scene = SceneGenerator::from_seed(config.synthetic.seed).generate(&config.synthetic);
    println!(
        "{} scanners, {} distinct beacons",
        scene.scanners.len(),
        scene.beacon_count
    );

    let start = Instant::now();
    let outcome = fuse(scene.scanners.clone(), &config.fusion)?;
    let report = build_report(&outcome, start.elapsed().as_millis() as f32);
    session.record_completion(report.scanners_merged, report.beacon_count);

    // Score recovered origins against the ground truth.
    let mut mismatches = Vec::new();
    for origin in &report.origins {
        let expected = scene.origins[origin.scanner];
        if origin.position != expected {
            mismatches.push((origin.scanner, expected, origin.position));
        }
    }

    println!();
    print_origin_table(&report.origins);
    println!();
    println!("=== Validation Summary ===");
    println!("Beacons recovered: {} (generated {})", report.beacon_count, scene.beacon_count);
    println!("Max scanner distance: {}", report.max_scanner_distance);
    if mismatches.is_empty() {
        println!("All {} scanner origins recovered exactly.", report.origins.len());
    } else {
        for (scanner, expected, got) in &mismatches {
            println!("Scanner {}: expected {}, recovered {}", scanner, expected, got);
        }
    }

    if let Some(output_path) = output {
        let results = serde_json::json!({
            "session_id": session_id,
            "seed": config.synthetic.seed,
            "generated_beacons": scene.beacon_count,
            "report": report,
            "origin_mismatches": mismatches.len(),
        });
        std::fs::write(&output_path, serde_json::to_string_pretty(&results)?)?;
        println!("Results saved to {:?}", output_path);
    }

    if !mismatches.is_empty() {
        anyhow::bail!("{} scanner origins diverged from ground truth", mismatches.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    // No unit tests in main.rs - all tests are in tests/ directory
}
