//! Histogram command implementation
//!
//! Draws a large batch in parallel, buckets the rounded values into integer
//! bins and renders them as text bars or JSON.

use serde::Serialize;
use tracing::info;

use sampler_core::sampler::{par_sample, SampleRequest};
use sampler_core::stats::{Histogram, SampleSummary};

use super::DistributionArgs;
use crate::config::AppConfig;
use crate::{CliError, Result};

#[derive(Debug, Serialize)]
struct Report {
    seed: u64,
    summary: SampleSummary,
    histogram: Histogram,
}

/// Run the histogram command
pub fn run(
    config: &AppConfig,
    args: &DistributionArgs,
    count: usize,
    format: &str,
    width: usize,
) -> Result<()> {
    if !matches!(format, "table" | "json") {
        return Err(CliError::InvalidArgument(format!(
            "Unknown format: {}. Supported: json, table",
            format
        )));
    }
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "count must be greater than zero".to_string(),
        ));
    }

    info!("Drawing {} samples...", count);
    info!("  Skew policy: {}", config.sampler.skew_policy);

    let request = args.to_params().resolve()?;
    let seed = args.rng().seed();
    let samples = par_sample(&request, config.sampler, count, seed)?;

    let summary = SampleSummary::from_samples(&samples)
        .ok_or_else(|| CliError::InvalidArgument("no samples drawn".to_string()))?;
    let (lo, hi) = chart_range(&request, &summary);
    let histogram = Histogram::from_samples(&samples, lo, hi)?;

    match format {
        "json" => {
            let report = Report {
                seed,
                summary,
                histogram,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => print!("{}", render_table(&summary, &histogram, width)),
    }

    info!("Histogram complete");
    Ok(())
}

/// Bounds of the chart: the request bounds when bounded, otherwise the
/// observed extremes.
fn chart_range(request: &SampleRequest, summary: &SampleSummary) -> (f64, f64) {
    match request {
        SampleRequest::Bounded(params) => (params.min(), params.max()),
        SampleRequest::Unbounded(_) if summary.max > summary.min => (summary.min, summary.max),
        SampleRequest::Unbounded(_) => (summary.min, summary.min + 1.0),
    }
}

fn render_table(summary: &SampleSummary, histogram: &Histogram, width: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "count = {}  mean = {:.4}  std_dev = {:.4}  min = {:.4}  max = {:.4}\n",
        summary.count, summary.mean, summary.std_dev, summary.min, summary.max
    ));

    let peak = histogram.peak().max(1);
    let label_width = histogram
        .bins()
        .map(|(label, _)| label.to_string().len())
        .max()
        .unwrap_or(1);

    for (label, count) in histogram.bins() {
        let bar = ((count as f64 / peak as f64) * width as f64).round() as usize;
        out.push_str(&format!(
            "{:>lw$} | {:<bw$} {}\n",
            label,
            "#".repeat(bar),
            count,
            lw = label_width,
            bw = width
        ));
    }

    if histogram.outliers() > 0 {
        out.push_str(&format!("outliers: {}\n", histogram.outliers()));
    }
    out
}
