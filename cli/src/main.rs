//! pagecite CLI - page-indexed PDF conversion and cited retrieval

use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use pagecite::convert::{collect_inputs, convert_batch_with};
use pagecite::rules::ThresholdInput;
use pagecite::search::{PageMatch, SearchLimits};
use pagecite::{
    split_pages, ConvertOptions, Converter, CorpusLayout, EarnedCredits, PageSearch,
    PatternOptions, PdftotextExtractor, RenderOptions, Service, TextExtractor,
};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "pagecite")]
#[command(version)]
#[command(about = "Convert PDFs to page-indexed Markdown and answer cited queries", long_about = None)]
struct Cli {
    /// Corpus root (docs/, knowledge/, references/)
    #[arg(long, global = true, env = "PAGECITE_CORPUS_DIR", default_value = ".")]
    corpus: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a directory of PDFs to page-indexed Markdown
    Convert {
        /// Directory containing PDFs (default: <corpus>/docs)
        #[arg(long, value_name = "DIR")]
        input_dir: Option<PathBuf>,

        /// Directory for Markdown output (default: <corpus>/knowledge/raw-md)
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Glob for PDF selection inside the input directory
        #[arg(long, default_value = "*.pdf")]
        glob: String,

        /// Keep the extractor's Unicode form instead of composing to NFC
        #[arg(long)]
        no_nfc: bool,

        /// Assemble pages on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Find keyword or regex matches in a PDF with page citations
    Find {
        /// Path to the PDF
        #[arg(long, value_name = "FILE")]
        pdf: PathBuf,

        /// Keyword or regex pattern
        #[arg(long)]
        query: String,

        /// Interpret the query as a regex
        #[arg(long)]
        regex: bool,

        /// Use case-sensitive search
        #[arg(long)]
        case_sensitive: bool,

        /// Maximum number of hits to return
        #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
        max_hits: i64,

        /// Characters of context around each match
        #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
        context: i64,

        /// Print JSON output
        #[arg(long)]
        json: bool,
    },

    /// Classify a question into a workflow category
    Classify {
        /// Question text
        question: String,
    },

    /// Search cited evidence lines for a question
    Evidence {
        /// Question text
        question: String,

        /// Category label (classified from the question if omitted)
        #[arg(long)]
        category: Option<String>,

        /// Maximum number of hits
        #[arg(long, default_value_t = 12, allow_negative_numbers = true)]
        max_hits: i64,
    },

    /// Classify, search and outline an answer in one step
    Brief {
        /// Question text
        question: String,

        /// Maximum number of evidence hits
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        max_hits: i64,
    },

    /// Evaluate graduation credits against the credit requirement table
    Graduation(GraduationArgs),

    /// List academic calendar events
    Calendar {
        /// Keyword to match in period or event
        #[arg(long, default_value = "")]
        keyword: String,

        /// Month (1-12)
        #[arg(long, allow_negative_numbers = true)]
        month: Option<i64>,

        /// Maximum number of events
        #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
        limit: i64,
    },

    /// Compare GPA and credits against scholarship minimums
    Scholarship {
        #[arg(long)]
        gpa: Option<f64>,

        #[arg(long)]
        earned_credits: Option<i64>,

        #[arg(long)]
        min_gpa: Option<f64>,

        #[arg(long)]
        min_credits: Option<i64>,
    },

    /// List the corpus source files
    Sources,

    /// Show version information
    Version,
}

#[derive(Args)]
struct GraduationArgs {
    /// College name (full or partial)
    #[arg(long)]
    college: String,

    /// Department name (full or partial)
    #[arg(long, default_value = "")]
    department: String,

    /// 단일전공자, 부전공자, 복수전공자(주전공) or 복수전공자(복수전공)
    #[arg(long)]
    major_type: String,

    #[arg(long, allow_negative_numbers = true)]
    liberal_required: i64,

    #[arg(long, allow_negative_numbers = true)]
    liberal_elective: i64,

    #[arg(long, allow_negative_numbers = true)]
    major_basic: i64,

    #[arg(long, allow_negative_numbers = true)]
    major: i64,

    #[arg(long, allow_negative_numbers = true)]
    total: i64,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let layout = CorpusLayout::new(&cli.corpus);

    let result = match cli.command {
        Commands::Convert {
            input_dir,
            output_dir,
            glob,
            no_nfc,
            sequential,
        } => cmd_convert(
            &input_dir.unwrap_or_else(|| layout.docs_dir.clone()),
            &output_dir.unwrap_or_else(|| layout.raw_dir.clone()),
            &glob,
            no_nfc,
            sequential,
        ),
        Commands::Find {
            pdf,
            query,
            regex,
            case_sensitive,
            max_hits,
            context,
            json,
        } => cmd_find(
            &pdf,
            &query,
            PatternOptions::new()
                .with_regex(regex)
                .with_case_sensitive(case_sensitive),
            max_hits,
            context,
            json,
        ),
        Commands::Classify { question } => {
            print_json(&Service::new(layout).classify_request(&question))
        }
        Commands::Evidence {
            question,
            category,
            max_hits,
        } => Service::new(layout)
            .search_evidence(&question, category.as_deref(), max_hits)
            .map_err(Into::into)
            .and_then(|response| print_json(&response)),
        Commands::Brief { question, max_hits } => Service::new(layout)
            .rule_brief(&question, max_hits)
            .map_err(Into::into)
            .and_then(|brief| print_json(&brief)),
        Commands::Graduation(args) => cmd_graduation(&Service::new(layout), args),
        Commands::Calendar {
            keyword,
            month,
            limit,
        } => Service::new(layout)
            .calendar_events(&keyword, month, limit)
            .map_err(Into::into)
            .and_then(|response| print_json(&response)),
        Commands::Scholarship {
            gpa,
            earned_credits,
            min_gpa,
            min_credits,
        } => print_json(&Service::new(layout).check_scholarship(&ThresholdInput {
            gpa,
            earned_credits,
            min_gpa,
            min_credits,
        })),
        Commands::Sources => print_json(&Service::new(layout).list_sources()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_convert(
    input_dir: &Path,
    output_dir: &Path,
    glob: &str,
    no_nfc: bool,
    sequential: bool,
) -> CmdResult {
    let inputs = collect_inputs(input_dir, glob)?;

    let render = RenderOptions::new().with_parallel(!sequential);
    let options = ConvertOptions::new()
        .with_render_options(render)
        .with_unicode_nfc(!no_nfc);
    let converter = Converter::new(PdftotextExtractor::from_env(), options);

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = convert_batch_with(&converter, &inputs, output_dir, |item| {
        let name = item
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        // A hidden bar drops println output, so write around the bar instead.
        pb.suspend(|| match &item.outcome {
            Ok(output) => println!("{} {} -> {}", "[OK]".green(), name, output.display()),
            Err(e) => eprintln!("{} {}: {}", "[ERROR]".red(), name, e),
        });
        pb.set_message(name);
        pb.inc(1);
    });
    pb.finish_and_clear();

    if report.is_success() {
        println!("{} all PDFs converted", "[DONE]".green().bold());
        Ok(())
    } else {
        eprintln!(
            "{} completed with {} failure(s)",
            "[DONE]".yellow().bold(),
            report.failure_count()
        );
        process::exit(1);
    }
}

#[derive(Serialize)]
struct FindPayload<'a> {
    pdf: String,
    query: &'a str,
    total_pages: usize,
    hit_count: usize,
    hits: Vec<PageMatch>,
}

fn cmd_find(
    pdf: &Path,
    query: &str,
    options: PatternOptions,
    max_hits: i64,
    context: i64,
    json: bool,
) -> CmdResult {
    if !pdf.exists() {
        return Err(format!("PDF not found: {}", pdf.display()).into());
    }
    let limits = SearchLimits::new(max_hits, context)?;
    let search = PageSearch::new(query, options)?;

    let text = PdftotextExtractor::from_env().extract(pdf)?;
    let pages = split_pages(&text);
    let hits = search.search(&pages, limits);

    let payload = FindPayload {
        pdf: pdf.display().to_string(),
        query,
        total_pages: pages.len(),
        hit_count: hits.len(),
        hits,
    };

    if json {
        return print_json(&payload);
    }

    println!("{}: {}", "PDF".bold(), payload.pdf);
    println!("{}: {}", "Query".bold(), payload.query);
    println!("{}: {}", "Pages".bold(), payload.total_pages);
    println!("{}: {}", "Hits".bold(), payload.hit_count);
    if payload.hits.is_empty() {
        println!("{}", "No matches found.".yellow());
        return Ok(());
    }
    for hit in &payload.hits {
        println!(
            "- {} {}: {}",
            format!("p.{}", hit.page).cyan(),
            format!("line {}", hit.line).dimmed(),
            hit.snippet
        );
    }
    Ok(())
}

fn cmd_graduation(service: &Service, args: GraduationArgs) -> CmdResult {
    let earned = EarnedCredits {
        liberal_required: args.liberal_required,
        liberal_elective: args.liberal_elective,
        major_basic: args.major_basic,
        major: args.major,
        total: args.total,
    };
    let report =
        service.evaluate_graduation(&args.college, &args.department, &args.major_type, &earned)?;
    print_json(&report)
}

fn cmd_version() {
    println!("{} {}", "pagecite".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page-indexed PDF conversion and cited retrieval");
}
