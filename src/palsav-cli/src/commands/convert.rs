//! Convert command: decoded save tree in, structured JSON out.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info};

use crate::cli::ConvertArgs;
use crate::config::Config;

/// Push request timeout
const PUSH_TIMEOUT: Duration = Duration::from_secs(10);

/// Handle the `convert` command
pub fn handle(args: &ConvertArgs) -> Result<()> {
    let start = Instant::now();

    let bytes = fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let save = palsav::WorldSave::from_json(&bytes)
        .with_context(|| format!("{} is corrupted", args.file.display()))?;

    // Wall-clock anchor for last-online timestamps
    let anchor = file_mtime_secs(&args.file)?;
    let summary = save.structure_world(anchor);
    info!("Players: {}", summary.players.len());
    info!("Guilds: {}", summary.guilds.len());

    let config = Config::load()?;
    let request = args.request.clone().or(config.request_url);

    match request {
        Some(base) => {
            let token = args.token.clone().or(config.token).unwrap_or_default();
            push_world(&base, &token, &summary);
        }
        None => {
            let output = enforce_json_suffix(&args.output);
            let body = serde_json::to_vec_pretty(&summary)
                .context("Failed to serialize structured output")?;
            fs::write(&output, body)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Wrote {}", output.display());
        }
    }

    if args.clear {
        clear_input(&args.file)?;
    }

    info!("Done in {:.3}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// Seconds since the epoch of the input file's mtime.
fn file_mtime_secs(path: &Path) -> Result<i64> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("Failed to stat {}", path.display()))?;
    Ok(modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0))
}

/// Append `.json` unless the path already ends with it.
fn enforce_json_suffix(path: &Path) -> PathBuf {
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        return path.to_path_buf();
    }
    let mut with_suffix = path.as_os_str().to_os_string();
    with_suffix.push(".json");
    PathBuf::from(with_suffix)
}

/// Push players and guilds to the remote API.
///
/// Both endpoints take write requests; a failed push is logged but does not
/// abort the run or the other push.
fn push_world(base: &str, token: &str, summary: &palsav::WorldSummary) {
    let agent = ureq::AgentBuilder::new().timeout(PUSH_TIMEOUT).build();

    info!(
        "Pushing {} players to {}/player",
        summary.players.len(),
        base.trim_end_matches('/')
    );
    push_one(&agent, base, "player", token, &summary.players);

    info!(
        "Pushing {} guilds to {}/guild",
        summary.guilds.len(),
        base.trim_end_matches('/')
    );
    push_one(&agent, base, "guild", token, &summary.guilds);
}

fn push_one(agent: &ureq::Agent, base: &str, path: &str, token: &str, body: &impl Serialize) {
    let url = format!("{}/{}", base.trim_end_matches('/'), path);
    let result = agent
        .post(&url)
        .set("Authorization", &format!("Bearer {}", token))
        .send_json(body);

    match result {
        Ok(_) => {}
        Err(ureq::Error::Status(code, response)) => {
            let text = response.into_string().unwrap_or_default();
            error!("Push to {} failed with status {}: {}", url, code, text);
        }
        Err(err) => {
            error!("Push to {} failed: {}", url, err);
        }
    }
}

/// Delete the input file; a file that is already gone is not an error.
fn clear_input(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => {
            Err(err).with_context(|| format!("Failed to delete {}", path.display()))
        }
    }
}
