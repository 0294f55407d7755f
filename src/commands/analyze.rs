//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Collects the input report(s)
//! 2. Parses every report in one run
//! 3. Ranks critical paths and classifies their worst stages
//! 4. Prints and writes the results

use crate::analyzer::{calculate_delay_distribution, PathAnalysis, PathAnalyzer};
use crate::output::{build_report, format_elapsed, render_results, write_report, write_results};
use crate::parser::{NodeRegistry, ReportParser, TimingPath};
use crate::utils::config::{DEFAULT_TOP_K, MAX_TOP_K, REPORT_EXTENSION};
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Single timing report (takes precedence over `input_dir`)
    pub input_file: Option<PathBuf>,

    /// Directory scanned for `.rpt` reports
    pub input_dir: Option<PathBuf>,

    /// Optional text output file
    pub output_text: Option<PathBuf>,

    /// Optional JSON report file
    pub output_json: Option<PathBuf>,

    /// Number of critical paths to report
    pub top_k: usize,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input_file: None,
            input_dir: None,
            output_text: None,
            output_json: None,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Everything one analysis run produced
#[derive(Debug)]
pub struct AnalysisRun {
    /// Nodes resolved across all parsed reports
    pub nodes: NodeRegistry,

    /// Ranked critical paths
    pub analyses: Vec<PathAnalysis>,

    /// Reports that were parsed, in parse order
    pub sources: Vec<PathBuf>,

    /// Paths parsed across all reports
    pub parsed_paths: usize,

    /// Report lines skipped as malformed
    pub diagnostics: usize,
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    match (&args.input_file, &args.input_dir) {
        (None, None) => bail!("Input file or directory must be specified"),
        (Some(file), _) if !file.is_file() => {
            bail!("Input file does not exist: {}", file.display())
        }
        (None, Some(dir)) if !dir.is_dir() => {
            bail!("Input directory does not exist: {}", dir.display())
        }
        _ => {}
    }

    if args.top_k > MAX_TOP_K {
        bail!("top_k is too large (max {})", MAX_TOP_K);
    }

    Ok(())
}

/// Collect `.rpt` files in a directory (not recursive), sorted by name
pub fn collect_report_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_report = path.extension().is_some_and(|ext| ext == REPORT_EXTENSION);
        if path.is_file() && is_report {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Parse the inputs and rank their critical paths
///
/// **Public** - the analysis half of execute_analyze, without printing
pub fn run_analysis(args: &AnalyzeArgs) -> Result<AnalysisRun> {
    let sources = match (&args.input_file, &args.input_dir) {
        (Some(file), _) => vec![file.clone()],
        (None, Some(dir)) => {
            info!("Processing timing reports in: {}", dir.display());
            let files = collect_report_files(dir)?;
            if files.is_empty() {
                bail!("No .{} files found in {}", REPORT_EXTENSION, dir.display());
            }
            files
        }
        (None, None) => bail!("Input file or directory must be specified"),
    };

    info!("Step 1/3: Parsing {} report(s)...", sources.len());
    let mut parser = ReportParser::new();
    let mut paths: Vec<TimingPath> = Vec::new();
    let mut diagnostics = 0;

    for source in &sources {
        let report = parser
            .parse_file(source)
            .with_context(|| format!("Failed to parse {}", source.display()))?;

        debug!(
            "{}: {} paths, {} skipped lines",
            source.display(),
            report.paths.len(),
            report.diagnostics.len()
        );

        diagnostics += report.diagnostics.len();
        paths.extend(report.paths);
    }

    if paths.is_empty() {
        warn!("No timing paths found");
    }

    let distribution = calculate_delay_distribution(&paths);
    info!("Delay distribution: {}", distribution.summary());

    info!("Step 2/3: Ranking top {} critical paths...", args.top_k);
    let nodes = parser.into_nodes();
    let analyses = PathAnalyzer::new(&nodes).find_critical_paths(&paths, args.top_k);

    Ok(AnalysisRun {
        nodes,
        analyses,
        sources,
        parsed_paths: paths.len(),
        diagnostics,
    })
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid arguments
/// * Unreadable reports
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    validate_args(&args)?;

    let run = run_analysis(&args)?;

    info!("Step 3/3: Writing results...");
    let rendered = render_results(&run.analyses, &run.nodes);
    print!("{}", rendered);

    if let Some(text_path) = &args.output_text {
        write_results(&rendered, text_path).context("Failed to write results")?;
        println!("Results written to {}", text_path.display());
    }

    if let Some(json_path) = &args.output_json {
        let sources = run
            .sources
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        let report = build_report(
            &run.analyses,
            &run.nodes,
            sources,
            run.parsed_paths,
            run.diagnostics,
        );
        write_report(&report, json_path).context("Failed to write JSON report")?;
        info!("✓ JSON report written to: {}", json_path.display());
    }

    info!("Analysis completed in {}", format_elapsed(start_time.elapsed()));

    Ok(())
}
