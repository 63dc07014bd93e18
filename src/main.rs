use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::warn;

use faqforge::{emit, extract, model::FaqData, workbook, ANSWER_MARKER};

#[derive(Parser)]
#[command(name = "faqforge", about = "Helpdesk FAQ workbook to JSON / widget / SQL converter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List workbook sheets and preview their leading rows
    Sheets {
        /// Workbook path (.xlsx)
        workbook: PathBuf,
        /// Rows to preview per sheet
        #[arg(short = 'n', long, default_value = "5")]
        rows: usize,
    },
    /// Extract FAQ sections from one sheet into JSON
    Parse {
        /// Workbook path (.xlsx)
        workbook: PathBuf,
        /// Sheet name (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,
        /// Output JSON path
        #[arg(short, long, default_value = "faq_sections.json")]
        output: PathBuf,
        /// Header-row marker literal in the answer column
        #[arg(long, default_value = ANSWER_MARKER)]
        marker: String,
    },
    /// Generate the QuickQuestions widget source from extracted JSON
    Component {
        /// Input JSON path
        #[arg(short, long, default_value = "faq_sections.json")]
        input: PathBuf,
        /// Output component path
        #[arg(short, long, default_value = "QuickQuestions.jsx")]
        output: PathBuf,
    },
    /// Generate knowledge-base INSERT statements from extracted JSON
    Sql {
        /// Input JSON path
        #[arg(short, long, default_value = "faq_sections.json")]
        input: PathBuf,
        /// Output SQL path (a *_safe variant is written alongside)
        #[arg(short, long, default_value = "insert_faq_knowledge.sql")]
        output: PathBuf,
    },
    /// Parse + component + sql in one pipeline
    Run {
        /// Workbook path (.xlsx)
        workbook: PathBuf,
        /// Sheet name (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,
        /// Directory for all generated artifacts
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
        /// Header-row marker literal in the answer column
        #[arg(long, default_value = ANSWER_MARKER)]
        marker: String,
    },
    /// Show section/record counts for an extracted JSON file
    Stats {
        /// Input JSON path
        #[arg(short, long, default_value = "faq_sections.json")]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sheets { workbook, rows } => {
            let sheets = workbook::list_sheets(&workbook)?;
            for info in &sheets {
                println!("Sheet: {} ({} rows x {} cols)", info.name, info.rows, info.cols);
                let grid = workbook::load_grid(&workbook, Some(&info.name))?;
                for row in grid.rows().take(rows) {
                    let cells: Vec<String> = row
                        .iter()
                        .map(|c| truncate(c.as_deref().unwrap_or("-"), 40))
                        .collect();
                    println!("  {}", cells.join(" | "));
                }
                println!();
            }
            println!("{} sheets", sheets.len());
            Ok(())
        }
        Commands::Parse { workbook, sheet, output, marker } => {
            let grid = workbook::load_grid(&workbook, sheet.as_deref())?;
            let faq = extract::extract(&grid, &marker);
            print_summary(&faq);
            emit::json::save(&output, &faq)?;
            println!("\nSaved {}", output.display());
            Ok(())
        }
        Commands::Component { input, output } => {
            let faq = emit::json::load(&input)?;
            emit::component::write(&output, &faq)?;
            println!(
                "Generated {} ({} categories, {} questions)",
                output.display(),
                faq.len(),
                faq.total_entries(),
            );
            Ok(())
        }
        Commands::Sql { input, output } => {
            let faq = emit::json::load(&input)?;
            let source = file_label(&input);
            let sql = emit::sql::write(&output, &faq, &source)?;
            print_sql_summary(&output, &faq, &sql);
            Ok(())
        }
        Commands::Run { workbook, sheet, out_dir, marker } => {
            std::fs::create_dir_all(&out_dir)?;

            // Phase 1: extract
            println!("Pipeline: parsing {}...", workbook.display());
            let grid = workbook::load_grid(&workbook, sheet.as_deref())?;
            let faq = extract::extract(&grid, &marker);
            print_summary(&faq);
            let json_path = out_dir.join("faq_sections.json");
            emit::json::save(&json_path, &faq)?;
            println!("\nSaved {}", json_path.display());

            // Phase 2: generate artifacts
            let jsx_path = out_dir.join("QuickQuestions.jsx");
            emit::component::write(&jsx_path, &faq)?;
            println!("Generated {}", jsx_path.display());

            let sql_path = out_dir.join("insert_faq_knowledge.sql");
            let source = file_label(&workbook);
            let sql = emit::sql::write(&sql_path, &faq, &source)?;
            print_sql_summary(&sql_path, &faq, &sql);
            Ok(())
        }
        Commands::Stats { input } => {
            let faq = emit::json::load(&input)?;
            let answered: usize = faq
                .iter()
                .map(|(_, entries)| {
                    entries.iter().filter(|e| !e.answer.trim().is_empty()).count()
                })
                .sum();
            println!("Sections:  {}", faq.len());
            println!("Questions: {}", faq.total_entries());
            println!("Answered:  {}", answered);
            for (name, entries) in faq.iter() {
                println!("  {}: {} questions", name, entries.len());
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn print_summary(faq: &FaqData) {
    if faq.is_empty() {
        warn!("No FAQ sections extracted - check the sheet layout and header marker");
        return;
    }
    println!("\nSummary:");
    for (name, entries) in faq.iter() {
        println!("  {}: {} questions", name, entries.len());
    }
    println!("  Total: {} questions", faq.total_entries());
}

fn print_sql_summary(path: &Path, faq: &FaqData, sql: &emit::sql::SqlOutput) {
    println!("SQL script generated: {}", path.display());
    println!("Safe SQL script (no deletes): {}", emit::sql::safe_path(path).display());
    println!("Total statements: {} ({} skipped, no answer)", sql.inserts, sql.skipped);
    for (name, entries) in faq.iter() {
        let answered = entries.iter().filter(|e| !e.answer.trim().is_empty()).count();
        println!("  {}: {} questions with answers", name, answered);
    }
}

/// File name for header comments, falling back to the full path text.
fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
