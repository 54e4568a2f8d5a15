//! gaceta CLI - gazette legal-act extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use gaceta::{analyze_file, render, DocumentRecord, DocumentType, IssueAnalysis, JsonFormat};

#[derive(Parser)]
#[command(name = "gaceta")]
#[command(version)]
#[command(about = "Extract structured legal acts from gazette PDFs", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one gazette issue
    Analyze {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Analyze every PDF in a directory and write a combined result file
    Batch {
        /// Directory containing gazette PDFs
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "resultados")]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,
    },

    /// Show a summary of one gazette issue
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Tabular CSV, one row per act
    Csv,
    /// JSON array of records
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Analyze {
            input,
            output,
            format,
            compact,
        }) => cmd_analyze(&input, output.as_deref(), format, compact),
        Some(Commands::Batch {
            input,
            output,
            format,
        }) => cmd_batch(&input, &output, format),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            if let Some(input) = cli.input {
                cmd_analyze(&input, None, cli.format, false)
            } else {
                println!("{}", "Usage: gaceta <FILE>".yellow());
                println!("       gaceta --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn serialize(
    records: &[DocumentRecord],
    format: OutputFormat,
    compact: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let out = match format {
        OutputFormat::Csv => render::to_csv(records)?,
        OutputFormat::Json => {
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            render::to_json(records, json_format)?
        }
    };
    Ok(out)
}

fn cmd_analyze(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let analysis = analyze_file(input)?;
    let rendered = serialize(&analysis.documentos, format, compact)?;

    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            println!(
                "{} {} documentos -> {}",
                "OK".green().bold(),
                analysis.document_count(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut files: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    log::debug!("found {} pdf files in {}", files.len(), input.display());

    if files.is_empty() {
        println!(
            "{}",
            format!("No PDF files found in {}", input.display()).yellow()
        );
        return Ok(());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // One worker per issue; each issue's record ordering is preserved and
    // file order is restored by the ordered collect.
    let results: Vec<(PathBuf, gaceta::Result<IssueAnalysis>)> = files
        .par_iter()
        .map(|path| {
            let result = analyze_file(path);
            pb.inc(1);
            (path.clone(), result)
        })
        .collect();
    pb.finish_and_clear();

    let mut records: Vec<DocumentRecord> = Vec::new();
    let mut failures = 0usize;
    for (path, result) in results {
        match result {
            Ok(analysis) => {
                println!(
                    "  {} {} ({} documentos)",
                    "OK".green(),
                    path.display(),
                    analysis.document_count()
                );
                records.extend(analysis.documentos);
            }
            Err(e) => {
                failures += 1;
                eprintln!("  {} {}: {}", "FAIL".red(), path.display(), e);
            }
        }
    }

    fs::create_dir_all(output)?;
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let extension = match format {
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
    };
    let rendered = serialize(&records, format, false)?;
    let out_file = output.join(format!("resultados_{}.{}", timestamp, extension));
    fs::write(&out_file, rendered)?;

    println!(
        "{} {} registros de {} archivos ({} fallidos) -> {}",
        "Done".green().bold(),
        records.len(),
        files.len(),
        failures,
        out_file.display()
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let analysis = analyze_file(input)?;

    println!("{}", input.display().to_string().bold());
    println!(
        "  Fecha de publicación: {}",
        if analysis.fecha_publicacion.is_empty() {
            "desconocida".to_string()
        } else {
            analysis.fecha_publicacion.clone()
        }
    );
    println!("  Documentos: {}", analysis.document_count());

    let kinds = [
        DocumentType::Decreto,
        DocumentType::ResolucionEjecutiva,
        DocumentType::Resolucion,
        DocumentType::CircularExternaConjunta,
        DocumentType::Acuerdo,
        DocumentType::Otro,
    ];
    for kind in kinds {
        let count = analysis
            .documentos
            .iter()
            .filter(|d| d.tipo_documento == kind)
            .count();
        if count > 0 {
            println!("    {}: {}", kind, count);
        }
    }

    Ok(())
}
