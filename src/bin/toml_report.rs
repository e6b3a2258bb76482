use clap::Parser;
use housing_report::core::ConfigProvider;
use housing_report::utils::{logger, validation::Validate};
use housing_report::{HousingPipeline, LocalStorage, OutputFormat, ReportEngine, TomlConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Housing report driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "housing-report.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override report format from config
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Dry run - validate the configuration and input path without building the report
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(args.verbose || config.verbose());

    tracing::info!("🚀 Starting TOML-based housing report");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(format) = args.format {
        config.set_output_format(format);
        tracing::info!("🔧 Report format overridden to: {:?}", format);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    // Relative input paths resolve against the directory holding the config file.
    let base_dir = Path::new(&args.config)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    display_config_summary(&config, &base_dir, args.dry_run);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No report will be built");
        perform_dry_run(&config, &base_dir).await;
        return Ok(());
    }

    let storage = LocalStorage::new(base_dir);
    let pipeline = HousingPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(rendered) => {
            tracing::info!("✅ Report completed successfully");
            println!("{}", rendered);
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, base_dir: &Path, dry_run: bool) {
    println!("📋 Configuration Summary:");
    println!("  Input: {}", base_dir.join(config.input_path()).display());
    if let Ok(delimiter) = config.delimiter() {
        println!("  Delimiter: {:?}", delimiter as char);
    }
    println!("  Format: {:?}", config.output_format());

    if dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

async fn perform_dry_run(config: &TomlConfig, base_dir: &Path) {
    let input: PathBuf = base_dir.join(config.input_path());

    println!("🔍 Dry Run Analysis:");
    match tokio::fs::metadata(&input).await {
        Ok(metadata) if metadata.is_file() => {
            println!("  ✅ Input file found ({} bytes)", metadata.len());
        }
        Ok(_) => println!("  ❌ Input path is not a file: {}", input.display()),
        Err(e) => println!("  ❌ Input file not readable: {} ({})", input.display(), e),
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
