// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use nasa_image_report::utils::logging::{
    format_error, format_info, format_step, format_success, format_warning,
};
use nasa_image_report::{Config, ReportPipeline, SizeFilter, Validator};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "nasa_image_report")]
#[command(version)]
#[command(about = "Report large images from the NASA Image and Video Library", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = nasa_image_report::config::DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, resolve image sizes, and write the CSV report
    Report {
        /// Search term (defaults to report.search_term)
        term: Option<String>,

        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[arg(long, value_name = "KB")]
        threshold: Option<u64>,

        #[arg(short, long, value_name = "NUM")]
        workers: Option<usize>,

        #[arg(long, value_name = "NUM")]
        max_pages: Option<usize>,

        #[arg(long)]
        no_progress: bool,
    },

    /// Search and paginate only, printing hit and item counts
    Search {
        /// Search term (defaults to report.search_term)
        term: Option<String>,
    },

    /// Classify a single file size string such as "1.5 MB"
    Classify {
        size: String,

        #[arg(long, value_name = "KB")]
        threshold: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    nasa_image_report::utils::logging::init_logger(cli.color, cli.verbose);

    info!("NASA image size report");
    info!("Loading configuration from: {}", cli.config.display());

    if !cli.config.exists() {
        warn!(
            "Config file {} not found, using defaults and environment",
            cli.config.display()
        );
    }
    let config =
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?;

    let result = match cli.command {
        Commands::Report {
            term,
            output,
            threshold,
            workers,
            max_pages,
            no_progress,
        } => {
            cmd_report(
                config,
                ReportOverrides {
                    term,
                    output,
                    threshold,
                    workers,
                    max_pages,
                },
                !no_progress,
                cli.color,
            )
            .await
        }
        Commands::Search { term } => cmd_search(config, term).await,
        Commands::Classify { size, threshold } => cmd_classify(&config, &size, threshold),
    };

    if let Err(e) = result {
        eprintln!("{}", format_error(&format!("{:#}", e)));
        std::process::exit(1);
    }

    Ok(())
}

struct ReportOverrides {
    term: Option<String>,
    output: Option<PathBuf>,
    threshold: Option<u64>,
    workers: Option<usize>,
    max_pages: Option<usize>,
}

impl ReportOverrides {
    fn apply(self, config: &mut Config) -> Result<()> {
        if let Some(term) = self.term {
            config.report.search_term = term;
        }
        if let Some(output) = self.output {
            config.report.output_path = output;
        }
        if let Some(threshold) = self.threshold {
            config.filter.threshold_kb = threshold;
        }
        if let Some(workers) = self.workers {
            Validator::validate_worker_count(workers)?;
            config.pipeline.parallel_workers = workers;
        }
        if let Some(max_pages) = self.max_pages {
            config.pipeline.max_pages = max_pages;
        }
        config.validate()?;
        Ok(())
    }
}

async fn cmd_report(
    mut config: Config,
    overrides: ReportOverrides,
    show_progress: bool,
    colored: bool,
) -> Result<()> {
    overrides
        .apply(&mut config)
        .context("Invalid report options")?;

    let term = config.report.search_term.clone();
    let output = config.report.output_path.clone();
    let start_time = Instant::now();

    println!("{}", format_step(1, 2, &format!("Searching for \"{}\"", term)));
    let pipeline = ReportPipeline::new(config)
        .context("Failed to create report pipeline")?
        .with_progress(show_progress, colored);

    println!(
        "{}",
        format_step(2, 2, "Collecting pages, resolving image metadata, writing report")
    );
    let stats = pipeline
        .run(&term, &output)
        .await
        .with_context(|| format!("Report for \"{}\" failed", term))?;

    println!(
        "{}",
        format_info(&format!("Total number of items from query: {}", stats.total_hits))
    );
    println!(
        "{}",
        format_info(&format!("Number of items in array: {}", stats.items_collected))
    );
    if stats.assets_skipped > 0 {
        println!(
            "{}",
            format_warning(&format!(
                "{} images skipped (missing or unreadable size)",
                stats.assets_skipped
            ))
        );
    }
    println!(
        "{}",
        format_success(&format!(
            "Finished generating {} ({} rows) in {:.2}s",
            output.display(),
            stats.entries_retained,
            start_time.elapsed().as_secs_f64()
        ))
    );

    Ok(())
}

async fn cmd_search(config: Config, term: Option<String>) -> Result<()> {
    let term = term.unwrap_or_else(|| config.report.search_term.clone());
    let media_type = config.pipeline.media_type.clone();

    let pipeline = ReportPipeline::new(config).context("Failed to create report pipeline")?;
    let summary = pipeline
        .collect(&term)
        .await
        .with_context(|| format!("Search for \"{}\" failed", term))?;

    println!("\nSearch results for: \"{}\"\n", summary.term);
    println!("Total hits:       {}", summary.total_hits);
    println!("Items collected:  {}", summary.items.len());
    println!(
        "{} assets:     {}",
        media_type,
        summary.asset_count(&media_type)
    );

    Ok(())
}

fn cmd_classify(config: &Config, size: &str, threshold: Option<u64>) -> Result<()> {
    let filter = SizeFilter::new(threshold.unwrap_or(config.filter.threshold_kb));

    match filter
        .classify(size)
        .with_context(|| format!("Cannot classify \"{}\"", size))?
    {
        Some(kb) => println!(
            "{}",
            format_success(&format!(
                "{} kB is above {} kB and would be reported",
                kb,
                filter.threshold_kb()
            ))
        ),
        None => println!(
            "{}",
            format_info(&format!(
                "\"{}\" is not above {} kB and would be left out",
                size,
                filter.threshold_kb()
            ))
        ),
    }

    Ok(())
}
