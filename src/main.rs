use std::process::ExitCode;

use anyhow::Context;
use log::info;

use bmp_filters::cli::{self, USAGE};
use bmp_filters::codec;
use bmp_filters::filters::RandomSeeds;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            if err.downcast_ref::<cli::CliError>().is_some() {
                eprintln!("\n{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> anyhow::Result<()> {
    let invocation = cli::parse(args).context("invalid arguments")?;

    let image = codec::read_file(&invocation.input)
        .with_context(|| format!("reading {}", invocation.input.display()))?;
    info!(
        "loaded {}x{} image, applying {} filter(s)",
        image.width(),
        image.height(),
        invocation.pipeline.filters().len()
    );

    let mut seeds = RandomSeeds(rand::rng());
    let image = invocation.pipeline.apply(image, &mut seeds);

    codec::write_file(&invocation.output, &image)
        .with_context(|| format!("writing {}", invocation.output.display()))?;
    info!("wrote {}", invocation.output.display());
    Ok(())
}
