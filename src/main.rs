use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagecorpus::analysis::DistanceMatrix;
use pagecorpus::loader::FsLoader;
use pagecorpus::pipeline::{build_collection, export_collection, ExportFormat, PipelineConfig};
use pagecorpus::Collection;

#[derive(Parser, Debug)]
#[command(name = "pagecorpus")]
#[command(version, about = "Page corpus statistics and document similarity", long_about = None)]
struct Cli {
    /// Log parsing and dictionary events
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Collection JSON file
    input: String,

    /// Collection name (default: input file stem)
    #[arg(short, long, env = "PAGECORPUS_COLLECTION")]
    name: Option<String>,

    /// Opacity of document colors
    #[arg(long, env = "PAGECORPUS_ALPHA", default_value_t = 1.0)]
    alpha: f64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print page, region and text statistics of a collection
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the most similar documents for every document
    Similarity {
        #[command(flatten)]
        input: InputArgs,

        /// Only list documents with a comparable neighbour
        #[arg(long)]
        comparable_only: bool,

        /// Number of documents to list
        #[arg(long)]
        top: Option<usize>,
    },

    /// Write collection reports
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory (default: ./<input_name>_report)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format(s) to generate
        #[arg(short, long, value_enum, default_values_t = vec![Format::Json, Format::Markdown])]
        format: Vec<Format>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Format {
    Json,
    Text,
    Markdown,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Text => ExportFormat::Text,
            Format::Markdown => ExportFormat::Markdown,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Summary { input } => show_summary(input),
        Commands::Similarity {
            input,
            comparable_only,
            top,
        } => show_similarity(input, comparable_only, top),
        Commands::Export {
            input,
            output,
            format,
        } => export_reports(input, output, format),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "pagecorpus=debug"
    } else {
        "pagecorpus=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load(input: &InputArgs, output: PathBuf) -> Result<(PipelineConfig, Collection)> {
    let config = PipelineConfig::new(input.input.clone(), output)
        .with_collection_name(input.name.clone())
        .with_alpha(input.alpha);

    let collection = build_collection(&config, &FsLoader::new())
        .with_context(|| format!("Failed to read collection: {}", input.input))?;
    Ok((config, collection))
}

fn show_summary(input: InputArgs) -> Result<()> {
    let (config, collection) = load(&input, PathBuf::new())?;

    println!("Collection: {}", config.collection_name());
    println!("{}", collection);

    Ok(())
}

fn show_similarity(input: InputArgs, comparable_only: bool, top: Option<usize>) -> Result<()> {
    let (_, collection) = load(&input, PathBuf::new())?;
    let matrix = DistanceMatrix::compute(&collection);

    if matrix.is_empty() {
        println!("No documents found");
        return Ok(());
    }

    let limit = top.unwrap_or(matrix.len());
    let mut listed = 0;
    for (row, name) in matrix.names.iter().enumerate() {
        if listed >= limit {
            break;
        }
        match matrix.nearest(row) {
            Some((col, score)) => {
                println!("{} -> {} ({:.4})", name, matrix.names[col], score);
                listed += 1;
            }
            None if !comparable_only => {
                println!("{} -> n/a", name);
                listed += 1;
            }
            None => {}
        }
    }

    Ok(())
}

fn export_reports(input: InputArgs, output: Option<PathBuf>, formats: Vec<Format>) -> Result<()> {
    let output_dir = output.unwrap_or_else(|| {
        let stem = PipelineConfig::new(input.input.clone(), PathBuf::new()).collection_name();
        PathBuf::from(format!("{}_report", stem))
    });

    let (config, collection) = load(&input, output_dir)?;
    let formats: Vec<ExportFormat> = formats.into_iter().map(ExportFormat::from).collect();

    export_collection(&collection, &config.output, &formats)
        .with_context(|| format!("Failed to export to: {}", config.output.display()))?;

    println!("Reports saved to: {}", config.output.display());
    Ok(())
}
