mod cli;

use cli::Args;
use ledger_license_export::application::factories::{PresenterFactory, PresenterType};
use ledger_license_export::config::{discover_config, load_config_from_path, Settings};
use ledger_license_export::prelude::*;
use std::path::Path;
use std::process;
use std::time::Duration;

/// Base delay between retries; grows linearly with the attempt number
const RETRY_DELAY_MS: u64 = 500;

fn main() {
    let args = Args::parse_args();

    let exit_code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(Path::new(path))?,
        None => discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };
    let settings = Settings::resolve(args.overrides(), config);
    settings.validate()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(download_agreement(settings, args.no_export))
}

async fn download_agreement(settings: Settings, no_export: bool) -> Result<ExitCode> {
    // Create adapters (Dependency Injection)
    let transport = HttpAssetTransport::with_timeout(settings.timeout)?;
    let progress_reporter = ConsoleProgressReporter::new();
    let store = SessionArtifactStore::new();

    let view = AssetView::new(
        settings.endpoint.clone(),
        QueryAssetUseCase::new(
            transport,
            progress_reporter,
            EnvelopeDecoder::with_prefixes(settings.envelope_prefixes.clone()),
        ),
        ExportArtifactUseCase::new(store.clone()),
    );

    view.activate().await;

    let mut attempt: u32 = 0;
    while matches!(view.state(), FetchState::Error(_)) && attempt < settings.retries {
        attempt += 1;
        render(&view.affordance());
        eprintln!("🔁 Retrying ({}/{})...", attempt, settings.retries);
        tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS * u64::from(attempt))).await;
        view.retry().await;
    }

    let affordance = view.affordance();
    render(&affordance);

    let exit_code = match view.state() {
        FetchState::Error(message) => {
            view.unmount();
            anyhow::bail!("Failed to fetch the license agreement: {}", message);
        }
        FetchState::Success(None) => ExitCode::AgreementUnavailable,
        FetchState::Success(Some(_)) if no_export => ExitCode::Success,
        FetchState::Success(Some(_)) => {
            let artifact = view.export_artifact()?;
            let content = store.read(artifact.uri());
            let presenter =
                PresenterFactory::create(PresenterType::for_output_dir(settings.output_dir));
            presenter.present(&artifact, content.as_ref())?;
            ExitCode::Success
        }
        FetchState::Idle | FetchState::Loading => {
            anyhow::bail!("The license agreement fetch did not complete")
        }
    };

    view.unmount();
    Ok(exit_code)
}

fn render(affordance: &DownloadAffordance) {
    match affordance {
        DownloadAffordance::Retry { message } => {
            eprintln!("[{}] {}", affordance.caption(), message)
        }
        DownloadAffordance::Download { .. } => {
            eprintln!("[Download: {}]", affordance.caption())
        }
        _ => eprintln!("[{}]", affordance.caption()),
    }
}
