use anyhow::Context;
use clap::Parser;
use pfas_exposure::render::{self, OutputFormat};
use pfas_exposure::utils::{logger, validation::Validate};
use pfas_exposure::{CliConfig, ExposureEngine, ExposureError, LiabilityReport, ProfileFile};
use std::io::Write;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config) {
        match e.downcast_ref::<ExposureError>() {
            Some(err) => {
                tracing::error!("❌ {} (exit code {})", err, err.exit_code());
                eprintln!("{}", err.user_friendly_message());
                eprintln!("{}", err.recovery_suggestion());
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run(config: CliConfig) -> anyhow::Result<()> {
    config.validate()?;
    let format = config.output_format();

    let reports = if let Some(path) = config.profile.clone() {
        tracing::info!("📁 Loading profiles from: {}", path);
        let file = ProfileFile::from_file(&path)?.with_overrides(config.option_overrides());
        file.validate()?;
        ExposureEngine::new(file).run()?
    } else {
        ExposureEngine::new(config).run()?
    };

    emit(&reports, format)
}

fn emit(reports: &[LiabilityReport], format: OutputFormat) -> anyhow::Result<()> {
    let mut output = render::render(reports, format)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }

    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("failed to write report to stdout")?;
    Ok(())
}
