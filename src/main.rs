use clap::{Args, Parser, Subcommand};
use color_eyre::Result;
use std::io;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer as _};

use build_estimator::estimator::Estimator;
use build_estimator::export::{export_csv, export_json, export_text, render_summary, Report};
use build_estimator::linker::{rewrite_links, LinkOptions};
use build_estimator::model::DetailLevel;
use build_estimator::parser::{parse_link_rules_file, parse_project_file, parse_rate_table_file};
use build_estimator::rates::RateTable;
use build_estimator::ui::App;

#[derive(Parser, Debug)]
#[command(name = "build-estimator")]
#[command(about = "Build Estimator - construction cost estimates and blog link rewriting")]
#[command(version)]
struct Cli {
    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate a project from a submitted form
    Estimate(EstimateArgs),
    /// Insert internal links into a blog article
    Link(LinkArgs),
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// Path to the project form (JSON object)
    #[arg(required = true)]
    project: PathBuf,

    /// Rate table overriding the built-in rates
    #[arg(long, value_name = "FILE", env = "ESTIMATOR_RATES")]
    rates: Option<PathBuf>,

    /// Estimation precision
    #[arg(long, default_value_t = DetailLevel::Detailed)]
    detail: DetailLevel,

    /// Export to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Export to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export a text summary (optional output path)
    #[arg(long, value_name = "FILE")]
    text: Option<PathBuf>,

    /// Print the summary instead of opening the interactive view
    #[arg(long)]
    print: bool,
}

#[derive(Args, Debug)]
struct LinkArgs {
    /// Path to the article HTML
    #[arg(required = true)]
    article: PathBuf,

    /// Keyword rules: [{"keyword": "...", "url": "..."}]
    #[arg(long, value_name = "FILE")]
    rules: PathBuf,

    /// Maximum links to insert, 0 for no limit
    #[arg(long, default_value_t = 0)]
    max_links: usize,

    /// URL path of the article itself
    #[arg(long, value_name = "PATH")]
    current_path: Option<String>,

    /// Write the result here instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Command::Estimate(args) => estimate(args),
        Command::Link(args) => link(args),
    }
}

fn init_logging(level: LevelFilter) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_filter(level),
        )
        .init();
}

fn estimate(args: EstimateArgs) -> Result<()> {
    let rates = match &args.rates {
        Some(path) => parse_rate_table_file(path)?,
        None => RateTable::default(),
    };
    let estimator = Estimator::new(rates)?;
    let input = parse_project_file(&args.project)?;
    let result = estimator.estimate(&input, args.detail)?;
    let report = Report::new(&input, &result);

    if let Some(json_path) = &args.json {
        export_json(&report, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if let Some(csv_path) = &args.csv {
        export_csv(&report, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(text_path) = &args.text {
        export_text(&report, text_path)?;
        println!("Exported to text: {}", text_path.display());
    }

    if args.print {
        print!("{}", render_summary(&report));
        return Ok(());
    }

    if args.json.is_some() || args.csv.is_some() || args.text.is_some() {
        return Ok(());
    }

    let app = App::new(input, estimator, args.detail)?;
    let terminal = ratatui::init();
    let outcome = app.run(terminal);
    ratatui::restore();
    outcome
}

fn link(args: LinkArgs) -> Result<()> {
    let rules = parse_link_rules_file(&args.rules)?;
    let html = std::fs::read_to_string(&args.article)?;

    let options = LinkOptions {
        max_links: args.max_links,
        current_path: args.current_path,
    };
    let rewrite = rewrite_links(&html, &rules, &options)?;

    for link in &rewrite.inserted {
        tracing::info!(keyword = %link.keyword, url = %link.url, "linked");
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rewrite.html)?;
            println!(
                "Inserted {} link(s) into {}",
                rewrite.inserted.len(),
                path.display()
            );
        }
        None => print!("{}", rewrite.html),
    }
    Ok(())
}
