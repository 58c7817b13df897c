//! Sample command implementation
//!
//! Prints draws from the unified entry point, one per line.

use std::io::{ErrorKind, Write};

use sampler_core::rng::UniformSource;
use sampler_core::sampler::SampleRequest;
use sampler_core::GaussianSampler;
use tracing::{debug, info};

use super::DistributionArgs;
use crate::config::AppConfig;
use crate::{CliError, Result};

/// Run the sample command
pub fn run(config: &AppConfig, args: &DistributionArgs, count: usize) -> Result<()> {
    info!("Sampling {} value(s)...", count);
    info!("  Skew policy: {}", config.sampler.skew_policy);

    let request = args.to_params().resolve()?;
    let mut sampler = GaussianSampler::with_config(args.rng(), config.sampler);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    finish(write_samples(&mut out, &mut sampler, &request, count))?;

    info!("Sampling complete");
    Ok(())
}

fn write_samples<W: Write, S: UniformSource>(
    out: &mut W,
    sampler: &mut GaussianSampler<S>,
    request: &SampleRequest,
    count: usize,
) -> Result<()> {
    for _ in 0..count {
        writeln!(out, "{}", sampler.sample_request(request)?)?;
    }
    out.flush()?;
    Ok(())
}

/// A reader closing the pipe early (`gauss sample | head`) ends the run normally.
fn finish(result: Result<()>) -> Result<()> {
    match result {
        Err(CliError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("Output closed by reader, stopping");
            Ok(())
        }
        other => other,
    }
}
