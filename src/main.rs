use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};
use deck_tagger::{
    tools::batch::{
        enrich_tags,
        find_untagged,
        refactor_tags,
        BatchOptions,
        BatchReport,
        UntaggedReport,
    },
    TaggerConfig,
};
use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Tags vocabulary cards by matching category rules against their words and glosses
#[derive(Parser, Debug)]
#[command(name = "deck-tagger")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the card documents
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Classify and report without writing any document
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add taxonomy tags to every card document under the data root
    Enrich {
        /// Taxonomy document to load rules from
        #[arg(short, long)]
        taxonomy: Option<PathBuf>,
    },
    /// Re-tag with the built-in legacy table and drop rank tags
    Refactor {
        /// A single deck or a directory (defaults to the data root)
        path: Option<PathBuf>,
    },
    /// List cards that have no tags
    Untagged,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = TaggerConfig::load(args.config.as_deref())?;
    if let Some(root) = args.root {
        config.data_root = root;
    }
    config.dry_run |= args.dry_run;

    match args.command {
        Command::Enrich { taxonomy } => {
            if let Some(taxonomy) = taxonomy {
                config.taxonomy_path = taxonomy;
            }
            println!("Loading rules from {}...", config.taxonomy_path.display());
            let report = enrich_tags(&config)?;
            print_batch_report(&report, config.dry_run);
            print_distribution(&report);
            println!("Done. Total cards enriched across all files: {}", report.total_modified);
        }
        Command::Refactor { path } => {
            let report = refactor_tags(&config, path.as_deref())?;
            print_batch_report(&report, config.dry_run);
            println!("Successfully modified {} cards.", report.total_modified);
            print_distribution(&report);
        }
        Command::Untagged => {
            let report = find_untagged(&BatchOptions::from_config(&config))?;
            print_untagged_report(&report);
        }
    }

    Ok(())
}

fn print_batch_report(report: &BatchReport, dry_run: bool) {
    println!("Scanned {} files.", report.files_scanned);
    let verb = if dry_run { "Would update" } else { "Updated" };
    for document in report.updated_documents() {
        let name = document.path.file_name().unwrap_or_default().to_string_lossy();
        println!("  - {} {} cards in {}", verb, document.cards_modified, name);
    }

    for (path, reason) in &report.skipped_files {
        println!("  ! Skipped {}: {}", path.display(), reason);
    }
}

fn print_distribution(report: &BatchReport) {
    if report.tag_counts.is_empty() {
        return;
    }
    println!("New Tag Distribution:");
    for (tag, count) in report.tag_distribution() {
        println!("  {}: {}", tag, count);
    }
}

fn print_untagged_report(report: &UntaggedReport) {
    for (path, reason) in &report.skipped_files {
        println!("Error reading {}: {}", path.display(), reason);
    }

    if report.total == 0 {
        println!("All cards have at least one tag!");
        return;
    }

    println!("Found {} cards without tags.", report.total);
    println!("\nBreakdown by file:");
    for (file, words) in &report.by_file {
        println!("- {}: {} cards (e.g. {})", file, words.len(), UntaggedReport::examples(words));
    }
}
