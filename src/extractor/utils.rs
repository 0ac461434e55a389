// Process helpers shared by the extractor backends

use std::path::PathBuf;
use std::process::{Command as StdCommand, Output, Stdio};

use tokio::io::AsyncReadExt;
use tokio::process::Command as TokioCommand;
use tokio::time::{timeout, Duration};
use tracing::{debug, error, info, warn};

use super::diagnostics::diagnose_error;
use super::errors::ExtractError;
use super::models::MetadataNode;
use super::traits::ExtractorConfig;

/// Run one metadata dump and turn the outcome into a tree or a classified error.
///
/// `prefix_args` go before the engine options (e.g. `-m yt_dlp`).
pub async fn run_engine(
    extractor: &str,
    program: &str,
    prefix_args: &[&str],
    url: &str,
    config: &ExtractorConfig,
) -> Result<MetadataNode, ExtractError> {
    let mut args: Vec<String> = prefix_args.iter().map(|a| a.to_string()).collect();
    args.extend(config.engine_args(url));
    debug!(extractor, "running {} {}", program, args.join(" "));

    let output = run_output_with_timeout(program, &args, config.timeout_seconds as u64)
        .await
        .inspect_err(|e| error!(extractor, url, "engine did not run: {}", e))?;

    if !output.status.success() {
        let err = ExtractError::from_engine_output(program, &output);
        match &err {
            ExtractError::ExtractionFailed(message) => {
                let reason = diagnose_error(message);
                warn!(extractor, url, ?reason, "extraction failed: {}", message);
            }
            other => error!(extractor, url, "engine crashed: {}", other),
        }
        return Err(err);
    }

    let node = parse_metadata(&output.stdout)
        .inspect_err(|e| error!(extractor, url, "{}", e))?;
    info!(extractor, url, entries = node.entry_count(), "metadata extracted");
    Ok(node)
}

/// Parse the engine's single JSON document
pub fn parse_metadata(stdout: &[u8]) -> Result<MetadataNode, ExtractError> {
    serde_json::from_slice(stdout)
        .map_err(|e| ExtractError::UnexpectedFailure(format!("Invalid JSON from engine: {}", e)))
}

/// Run a command to completion, killing it after `timeout_secs`.
///
/// stdout and stderr are drained concurrently so a chatty engine can't block
/// on a full pipe while we wait for it to exit.
pub async fn run_output_with_timeout(
    program: &str,
    args: &[String],
    timeout_secs: u64,
) -> Result<Output, ExtractError> {
    let mut child = TokioCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| ExtractError::UnexpectedFailure(format!("Failed to start {}: {}", program, e)))?;

    let mut stdout_pipe = child.stdout.take().ok_or_else(|| {
        ExtractError::UnexpectedFailure(format!("Failed to capture stdout from {}", program))
    })?;
    let mut stderr_pipe = child.stderr.take().ok_or_else(|| {
        ExtractError::UnexpectedFailure(format!("Failed to capture stderr from {}", program))
    })?;

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stdout_pipe.read_to_end(&mut buf).await.map(|_| buf)
    });
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stderr_pipe.read_to_end(&mut buf).await.map(|_| buf)
    });

    match timeout(Duration::from_secs(timeout_secs), child.wait()).await {
        Ok(status) => {
            let status = status.map_err(|e| {
                ExtractError::UnexpectedFailure(format!("Failed to wait for {}: {}", program, e))
            })?;
            let stdout = join_pipe(stdout_task, "stdout").await?;
            let stderr = join_pipe(stderr_task, "stderr").await?;
            Ok(Output { status, stdout, stderr })
        }
        Err(_) => {
            warn!(program, timeout_secs, "engine run exceeded its time budget, killing it");
            let _ = child.kill().await;
            stdout_task.abort();
            stderr_task.abort();
            Err(ExtractError::UnexpectedFailure(format!(
                "{} timed out after {}s",
                program, timeout_secs
            )))
        }
    }
}

async fn join_pipe(
    task: tokio::task::JoinHandle<std::io::Result<Vec<u8>>>,
    name: &str,
) -> Result<Vec<u8>, ExtractError> {
    task.await
        .map_err(|e| ExtractError::UnexpectedFailure(format!("{} reader failed: {}", name, e)))?
        .map_err(|e| ExtractError::UnexpectedFailure(format!("Failed to read {}: {}", name, e)))
}

/// Whether `program args...` runs and exits successfully
pub fn probe(program: &str, args: &[&str]) -> bool {
    match StdCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(status) => status.success(),
        Err(_) => false,
    }
}

/// Locate the yt-dlp binary
pub fn find_ytdlp() -> String {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("/opt/homebrew/bin/yt-dlp"), // Homebrew on Apple Silicon
        PathBuf::from("/usr/local/bin/yt-dlp"),    // Homebrew on Intel Mac
        PathBuf::from("/usr/bin/yt-dlp"),          // System installation
    ];

    // pip install --user
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".local/bin/yt-dlp"));
    }

    candidates
        .into_iter()
        .find(|path| path.exists())
        .and_then(|path| path.to_str().map(str::to_string))
        .unwrap_or_else(|| "yt-dlp".to_string())
}

/// Locate a Python interpreter
pub fn find_python() -> String {
    let candidates = ["python3", "/opt/homebrew/bin/python3", "/usr/local/bin/python3"];

    candidates
        .into_iter()
        .find(|cmd| probe(cmd, &["--version"]))
        .unwrap_or("python3")
        .to_string()
}
