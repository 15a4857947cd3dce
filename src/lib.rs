pub mod args;
pub mod config;
pub mod error;
pub mod lister;
pub mod logging;
pub mod output;
pub mod prompt;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use time::OffsetDateTime;

use args::InputMode;
use config::AppConfig;
pub use error::AppError;
use lister::extractors::analyze_error;
use lister::{ExtractorOrchestrator, ListingExtractor};

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub path: PathBuf,
}

/// List videos for an already resolved input mode and write the snapshot.
///
/// No file is created when the listing has no usable videos. `now` is
/// called only right before writing.
pub async fn execute<E, R, W, C>(
    mode: InputMode,
    extractor: &E,
    out_dir: &Path,
    input: &mut R,
    output: &mut W,
    now: C,
) -> Result<Summary, AppError>
where
    E: ListingExtractor + ?Sized,
    R: BufRead,
    W: Write,
    C: FnOnce() -> OffsetDateTime,
{
    let request = match mode {
        InputMode::Direct(request) => request,
        InputMode::Interactive => prompt::prompt_request(input, output)?,
    };

    let records = lister::fetch(extractor, &request).await?;
    if records.is_empty() {
        return Err(AppError::NoVideos);
    }

    let path = output::write_output(&records, out_dir, now())?;
    Ok(Summary {
        count: records.len(),
        path,
    })
}

/// Process entry: reads argv, env, and the terminal; maps the outcome to an exit code.
pub async fn run() -> ExitCode {
    run_with_config(std::env::args().collect(), AppConfig::from_env).await
}

/// Like [`run`] with explicit arguments. `load_config` is only called once
/// the arguments are valid, so a usage error touches nothing else.
pub async fn run_with_config<F>(args: Vec<String>, load_config: F) -> ExitCode
where
    F: FnOnce() -> AppConfig,
{
    let mode = match args::resolve(&args) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", failure_report(&e));
            return ExitCode::FAILURE;
        }
    };

    let config = load_config();
    let out_dir = match config.resolve_output_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{}", AppError::Io(e));
            return ExitCode::FAILURE;
        }
    };

    let extractor = ExtractorOrchestrator::new(config.extractor.clone());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let result = execute(
        mode,
        &extractor,
        &out_dir,
        &mut input,
        &mut stdout,
        output::local_timestamp,
    )
    .await;

    match result {
        Ok(summary) => {
            println!(
                "Saved the first {} videos to: {}",
                summary.count,
                summary.path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", failure_report(&e));
            ExitCode::FAILURE
        }
    }
}

/// Error stream text for a failed run. Extraction failures are diagnosed
/// from the extractor's own output.
pub fn failure_report(err: &AppError) -> String {
    match err {
        AppError::Extraction(e) => format!(
            "Error: {}\n\n{}",
            e,
            analyze_error(&e.diagnostic_text()).report()
        ),
        other => other.to_string(),
    }
}
