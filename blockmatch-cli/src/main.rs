use blockmatch::{
    downscale_half, load_gray_grid, match_templates, match_templates_par, Candidate, GridView,
    IntensityGrid, Metric,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "BlockMatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum MetricConfig {
    Sad,
    Ssd,
}

impl From<MetricConfig> for Metric {
    fn from(value: MetricConfig) -> Self {
        match value {
            MetricConfig::Sad => Metric::Sad,
            MetricConfig::Ssd => Metric::Ssd,
        }
    }
}

/// Downscale applied to the subject and every template before matching.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PrescaleConfig {
    None,
    Half,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    subject_path: String,
    template_paths: Vec<String>,
    output_path: Option<String>,
    topk: usize,
    metric: MetricConfig,
    prescale: PrescaleConfig,
    parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subject_path: String::new(),
            template_paths: Vec::new(),
            output_path: None,
            topk: 20,
            metric: MetricConfig::Sad,
            prescale: PrescaleConfig::Half,
            parallel: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct CandidateRecord {
    x: usize,
    y: usize,
    score: u64,
}

impl From<Candidate> for CandidateRecord {
    fn from(value: Candidate) -> Self {
        Self {
            x: value.x,
            y: value.y,
            score: value.score,
        }
    }
}

#[derive(Debug, Serialize)]
struct TemplateReport {
    template_path: String,
    best: Option<CandidateRecord>,
    topk: Vec<CandidateRecord>,
}

#[derive(Debug, Serialize)]
struct Output {
    subject_path: String,
    reports: Vec<TemplateReport>,
}

fn prescale(
    grid: IntensityGrid,
    mode: &PrescaleConfig,
) -> Result<IntensityGrid, blockmatch::BlockMatchError> {
    match mode {
        PrescaleConfig::None => Ok(grid),
        PrescaleConfig::Half => downscale_half(grid.view()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("blockmatch=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.subject_path.is_empty() {
        return Err("subject_path must be set in the config".into());
    }
    if config.template_paths.is_empty() {
        return Err("template_paths must list at least one template".into());
    }
    if config.topk == 0 {
        return Err("topk must be at least 1".into());
    }

    let subject = prescale(load_gray_grid(&config.subject_path)?, &config.prescale)?;
    let mut templates = Vec::with_capacity(config.template_paths.len());
    for path in &config.template_paths {
        templates.push(prescale(load_gray_grid(path)?, &config.prescale)?);
    }
    tracing::info!(
        subject_width = subject.width(),
        subject_height = subject.height(),
        templates = templates.len(),
        "inputs loaded"
    );

    let subject_view = subject.view();
    let template_views: Vec<GridView<'_>> = templates.iter().map(IntensityGrid::view).collect();
    let metric = Metric::from(config.metric);
    let ranked = if config.parallel {
        match_templates_par(subject_view, &template_views, config.topk, metric)?
    } else {
        match_templates(subject_view, &template_views, config.topk, metric)?
    };

    let reports = config
        .template_paths
        .iter()
        .zip(ranked)
        .map(|(path, candidates)| {
            let best = candidates.first().copied().map(CandidateRecord::from);
            let topk = candidates.into_iter().map(CandidateRecord::from).collect();
            TemplateReport {
                template_path: path.clone(),
                best,
                topk,
            }
        })
        .collect();
    let output = Output {
        subject_path: config.subject_path,
        reports,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
