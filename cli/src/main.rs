//! pdfsift CLI - search PDF documents and write a report of the matches

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfsift::render::outcome_to_json;
use pdfsift::{
    Corpus, JsonFormat, LayoutOptions, ParseOptions, PdfParser, SearchOptions, StandardFont,
};

#[derive(Parser)]
#[command(name = "pdfsift")]
#[command(version)]
#[command(about = "Search PDF documents and write a PDF report of matching paragraphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search documents for a term and write a report
    Search {
        /// Term to search for (exact, case-sensitive)
        #[arg(value_name = "TERM")]
        term: String,

        /// PDF files to search, in report order
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Report file
        #[arg(
            short,
            long,
            value_name = "FILE",
            env = "PDFSIFT_OUTPUT",
            default_value = "search_results.pdf"
        )]
        output: PathBuf,

        /// Print the outcome as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Fail if any document cannot be parsed
        #[arg(long)]
        strict: bool,

        /// Search documents one at a time
        #[arg(long)]
        sequential: bool,

        /// Report font
        #[arg(long, value_enum, env = "PDFSIFT_FONT", default_value = "helvetica")]
        font: FontChoice,

        /// Report font size in points
        #[arg(long, default_value = "12")]
        font_size: f32,

        /// Report page size
        #[arg(long, value_enum, default_value = "letter")]
        page_size: PageSize,
    },

    /// List the paragraphs of a document
    Paragraphs {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FontChoice {
    /// Proportional sans-serif
    Helvetica,
    /// Fixed pitch
    Courier,
}

impl From<FontChoice> for StandardFont {
    fn from(choice: FontChoice) -> Self {
        match choice {
            FontChoice::Helvetica => StandardFont::Helvetica,
            FontChoice::Courier => StandardFont::Courier,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageSize {
    /// US Letter
    Letter,
    /// ISO A4
    A4,
}

/// Flags of the `search` command.
struct SearchArgs<'a> {
    term: &'a str,
    files: &'a [PathBuf],
    output: &'a Path,
    json: bool,
    strict: bool,
    sequential: bool,
    font: FontChoice,
    font_size: f32,
    page_size: PageSize,
}

impl SearchArgs<'_> {
    fn options(&self) -> SearchOptions {
        let layout = match self.page_size {
            PageSize::Letter => LayoutOptions::letter(),
            PageSize::A4 => LayoutOptions::a4(),
        }
        .with_font(self.font.into())
        .with_font_size(self.font_size);

        let mut options = SearchOptions::new().with_layout(layout);
        if self.strict {
            options = options.strict();
        }
        if self.sequential {
            options = options.sequential();
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            term,
            files,
            output,
            json,
            strict,
            sequential,
            font,
            font_size,
            page_size,
        } => cmd_search(&SearchArgs {
            term: &term,
            files: &files,
            output: &output,
            json,
            strict,
            sequential,
            font,
            font_size,
            page_size,
        }),
        Commands::Paragraphs { input, json } => cmd_paragraphs(&input, json),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_search(args: &SearchArgs<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.options();

    let pb = ProgressBar::new(args.files.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    let mut corpus = Corpus::new();
    for path in args.files {
        pb.set_message(format!("Reading {}...", path.display()));
        let bytes = fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        corpus.push(display_name(path), bytes);
        pb.inc(1);
    }

    pb.set_message("Searching...");
    let outcome = pdfsift::search_with_options(corpus.entries(), args.term, &options)?;
    pb.inc(1);
    pb.finish_and_clear();
    log::info!("{} hits in {} documents", outcome.hit_count(), corpus.len());

    if let Some(ref report) = outcome.report {
        fs::write(args.output, report)?;
    }

    if args.json {
        println!(
            "{}",
            outcome_to_json(args.term, &outcome, JsonFormat::Pretty)?
        );
        return Ok(());
    }

    for failure in &outcome.failures {
        eprintln!(
            "{} {}: {}",
            "Skipped".yellow().bold(),
            failure.name,
            failure.error
        );
    }

    if outcome.hits.is_empty() {
        println!("{} \"{}\"", "No matches for".yellow(), args.term);
        return Ok(());
    }

    println!("{}", "Search Results".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for hit in &outcome.hits {
        println!(
            "{} {} {}",
            hit.document_name.bold(),
            format!("#{}", hit.paragraph_index + 1).dimmed(),
            hit.paragraph_text
        );
    }

    println!(
        "\n{} {} hits, report saved to {}",
        "Done!".green().bold(),
        outcome.hit_count(),
        args.output.display()
    );

    Ok(())
}

fn cmd_paragraphs(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let options = ParseOptions::new().lenient();
    let paragraphs =
        pdfsift::extract_paragraphs_with_options(&display_name(input), &data, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&paragraphs)?);
        return Ok(());
    }

    for paragraph in &paragraphs {
        if paragraph.is_blank() {
            continue;
        }
        println!(
            "{} {}",
            format!("[{}]", paragraph.index).dimmed(),
            paragraph.text
        );
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let parser = PdfParser::open_with_options(input, ParseOptions::new().lenient())?;
    let info = parser.info();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), info.pdf_version);
    println!("{}: {}", "Pages".bold(), info.page_count);
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if info.encrypted { "Yes" } else { "No" }
    );

    if let Some(ref title) = info.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = info.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = info.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref creator) = info.creator {
        println!("{}: {}", "Creator".bold(), creator);
    }
    if let Some(ref producer) = info.producer {
        println!("{}: {}", "Producer".bold(), producer);
    }
    if let Some(ref created) = info.created {
        println!("{}: {}", "Created".bold(), created);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let pages = parser.pages()?;
    let paragraphs = pdfsift::extract::segment_pages(&display_name(input), &pages);
    let words: usize = paragraphs
        .iter()
        .map(|p| p.text.split_whitespace().count())
        .sum();

    println!("{}: {}", "Paragraphs".bold(), paragraphs.len());
    println!("{}: {}", "Words".bold(), words);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfsift".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF corpus search and report tool");
    println!();
    println!("Library: pdfsift {}", pdfsift::VERSION);
    println!("License: MIT");
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
