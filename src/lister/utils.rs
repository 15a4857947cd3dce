// Helpers shared by the extractor implementations

use std::process::Stdio;
use std::time::Instant;

use tokio::io::AsyncReadExt;
use tokio::process::Command as TokioCommand;
use tokio::time::{timeout, Duration};

use super::errors::ListError;
use super::extractors::ExtractorConfig;
use super::models::{ListingRequest, RawListing};

/// Run command with timeout, killing the child when it expires
pub async fn run_output_with_timeout(
    program: &str,
    args: &[String],
    timeout_secs: u64,
) -> Result<std::process::Output, ListError> {
    let started = Instant::now();
    let mut child = TokioCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ListError::ToolNotFound(program.to_string()),
            _ => ListError::ExecutionError(format!("Failed to start {}: {}", program, e)),
        })?;

    let mut stdout_pipe = child.stdout.take().ok_or_else(|| {
        ListError::ExecutionError(format!("Failed to capture stdout from {}", program))
    })?;
    let mut stderr_pipe = child.stderr.take().ok_or_else(|| {
        ListError::ExecutionError(format!("Failed to capture stderr from {}", program))
    })?;

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stdout_pipe.read_to_end(&mut buf).await?;
        Ok::<Vec<u8>, std::io::Error>(buf)
    });
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stderr_pipe.read_to_end(&mut buf).await?;
        Ok::<Vec<u8>, std::io::Error>(buf)
    });

    match timeout(Duration::from_secs(timeout_secs), child.wait()).await {
        Ok(status_res) => {
            let status = status_res.map_err(|e| {
                ListError::ExecutionError(format!("Failed to wait for {}: {}", program, e))
            })?;
            let stdout = join_pipe(stdout_task, "stdout").await?;
            let stderr = join_pipe(stderr_task, "stderr").await?;
            tracing::debug!(
                program,
                status = %status,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "extractor finished"
            );
            Ok(std::process::Output {
                status,
                stdout,
                stderr,
            })
        }
        Err(_) => {
            let _ = child.kill().await;
            stdout_task.abort();
            stderr_task.abort();
            tracing::warn!(program, timeout_secs, "extractor timed out, killed");
            Err(ListError::NetworkTimeout(None))
        }
    }
}

async fn join_pipe(
    task: tokio::task::JoinHandle<std::io::Result<Vec<u8>>>,
    name: &str,
) -> Result<Vec<u8>, ListError> {
    task.await
        .map_err(|e| ListError::ExecutionError(format!("{} task failed: {}", name, e)))?
        .map_err(|e| ListError::ExecutionError(format!("Failed to read {}: {}", name, e)))
}

/// yt-dlp flags for a flat, bounded, quiet listing of `request`
pub fn listing_args(request: &ListingRequest, config: &ExtractorConfig) -> Vec<String> {
    let mut args = vec![
        "--flat-playlist".to_string(),
        "--dump-single-json".to_string(),
        "--skip-download".to_string(),
        "--playlist-end".to_string(),
        request.max_count().to_string(),
        "--quiet".to_string(),
        "--no-warnings".to_string(),
        "--ignore-errors".to_string(),
        "--socket-timeout".to_string(),
        config.socket_timeout_seconds().to_string(),
    ];

    // Cookies
    if let Some(path) = &config.cookies_path {
        args.push("--cookies".to_string());
        args.push(path.clone());
    } else if let Some(browser) = &config.cookies_from_browser {
        args.push("--cookies-from-browser".to_string());
        args.push(browser.clone());
    }

    // Proxy
    if let Some(proxy) = &config.proxy {
        args.push("--proxy".to_string());
        args.push(proxy.clone());
    }

    // Keep the URL out of option parsing
    args.push("--".to_string());
    args.push(request.source_url().to_string());
    args
}

/// Turn a finished extractor process into a listing.
///
/// With `--ignore-errors` yt-dlp may exit non-zero yet still print the
/// listing; only an empty stdout on failure counts as a failed extraction.
pub fn interpret_output(
    extractor: &str,
    output: &std::process::Output,
) -> Result<Option<RawListing>, ListError> {
    let has_stdout = output.stdout.iter().any(|b| !b.is_ascii_whitespace());

    if !output.status.success() && !has_stdout {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(extractor, stderr = %stderr.trim(), "extraction failed");
        return Err(ListError::from(stderr.to_string()));
    }

    if !output.status.success() {
        tracing::warn!(
            extractor,
            status = %output.status,
            "extractor reported per-item errors; using partial listing"
        );
    }

    parse_listing(&output.stdout)
}

/// Parse `--dump-single-json` output; a literal `null` means no listing.
pub fn parse_listing(stdout: &[u8]) -> Result<Option<RawListing>, ListError> {
    if stdout.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<RawListing>>(stdout)
        .map_err(|e| ListError::ParseError(format!("Invalid JSON: {}", e)))
}
