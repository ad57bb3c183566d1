use std::path::PathBuf;
use std::time::Duration;

use clap::ArgMatches;
use tracing::{error, info, warn};

use scribe_config::ScribeConfig;
use scribe_core::forge::{self, ForgeBackend, GitHubBackend};
use scribe_core::scheduler::SessionConfig;
use scribe_core::{PersistedState, Tracker, notify, state};
use scribe_paths::ScribePaths;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let result = match matches.subcommand() {
        Some(("run", sub)) => handle_run(sub),
        Some(("interval", sub)) => handle_interval(sub),
        _ => Ok(()),
    };

    if let Err(e) = &result {
        eprintln!("scribe: {}", e);
        error!(event = "cli.command_failed", error = %e);
    }
    result
}

/// Map a menu choice to its duration in minutes.
fn interval_minutes(choice: &str) -> Option<u64> {
    match choice {
        "5m" => Some(5),
        "15m" => Some(15),
        "30m" => Some(30),
        "1h" => Some(60),
        _ => None,
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via
/// stderr and a structured log event.
fn load_config_with_warning() -> ScribeConfig {
    match ScribeConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.scribe/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            ScribeConfig::default()
        }
    }
}

/// Fetch the cached credential, acquiring and persisting one on first run.
///
/// Authentication failure is fatal to starting a session.
fn resolve_token(
    paths: &ScribePaths,
    state: &mut PersistedState,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(token) = state.github_access_token.clone() {
        return Ok(token);
    }

    let token = GitHubBackend.auth_token().map_err(|e| {
        format!("GitHub authentication is required to start tracking: {}", e)
    })?;
    state.github_access_token = Some(token.clone());
    state::save_state(&paths.state_file(), state)?;
    println!("GitHub authentication successful.");
    Ok(token)
}

/// Fetch the cached log-repository URL, creating the remote repository on
/// first run. Runs at most once per installation.
fn resolve_repo_url(
    paths: &ScribePaths,
    state: &mut PersistedState,
    token: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(url) = state.repo_url.clone() {
        return Ok(url);
    }

    let url = GitHubBackend
        .create_repository(
            token,
            forge::LOG_REPO_NAME,
            forge::LOG_REPO_DESCRIPTION,
            forge::LOG_REPO_PRIVATE,
        )
        .map_err(|e| format!("Failed to initialize repository for tracking: {}", e))?;
    state.repo_url = Some(url.clone());
    state::save_state(&paths.state_file(), state)?;
    info!(event = "cli.run.repo_created", url = %url);
    Ok(url)
}

fn handle_run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let paths = ScribePaths::resolve()?;
    let mut state = state::load_state(&paths.state_file())?;

    let token = resolve_token(&paths, &mut state)?;
    let repo_url = resolve_repo_url(&paths, &mut state, &token)?;

    // Interval precedence: CLI flag > persisted state > config file > default.
    let interval = matches
        .get_one::<String>("interval")
        .and_then(|choice| interval_minutes(choice))
        .map(|minutes| Duration::from_secs(minutes * 60))
        .or_else(|| state.interval())
        .unwrap_or_else(|| config.tracker.interval());

    let workspace_root = if let Some(dir) = matches.get_one::<String>("workspace") {
        PathBuf::from(dir)
    } else if let Some(root) = config.tracker.workspace_root.clone() {
        root
    } else {
        std::env::current_dir()?
    };

    let mut tracker = Tracker::new(paths);
    tracker.start(SessionConfig {
        interval,
        workspace_root,
        repo_url,
        token,
    })?;

    notify::send_notification("Code tracking started successfully.");
    println!(
        "Code tracking started (interval: {}m). Press Ctrl-C to stop.",
        interval.as_secs() / 60
    );

    wait_for_shutdown_signal()?;

    tracker.stop();
    notify::send_notification("Activity tracker stopped.");
    println!("Activity tracker stopped.");
    Ok(())
}

fn handle_interval(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let choice = matches
        .get_one::<String>("duration")
        .ok_or("interval duration is required")?;
    let minutes = interval_minutes(choice).ok_or("unsupported interval duration")?;

    let paths = ScribePaths::resolve()?;
    let mut state = state::load_state(&paths.state_file())?;
    state.tracker_interval_secs = Some(minutes * 60);
    state::save_state(&paths.state_file(), &state)?;

    info!(event = "cli.interval.updated", minutes = minutes);
    println!("Tracking interval set to {}.", choice);
    Ok(())
}

/// Block until SIGTERM or SIGINT/Ctrl-C arrives.
fn wait_for_shutdown_signal() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            let mut sigterm =
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

            tokio::select! {
                _ = ctrl_c => {
                    info!(event = "cli.run.signal_received", signal = "SIGINT");
                }
                _ = sigterm.recv() => {
                    info!(event = "cli.run.signal_received", signal = "SIGTERM");
                }
            }
        }

        #[cfg(not(unix))]
        {
            ctrl_c.await.ok();
            info!(event = "cli.run.signal_received", signal = "SIGINT");
        }

        Ok::<(), std::io::Error>(())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_minutes_covers_the_menu() {
        assert_eq!(interval_minutes("5m"), Some(5));
        assert_eq!(interval_minutes("15m"), Some(15));
        assert_eq!(interval_minutes("30m"), Some(30));
        assert_eq!(interval_minutes("1h"), Some(60));
    }

    #[test]
    fn test_interval_minutes_rejects_unknown_choices() {
        assert_eq!(interval_minutes("2h"), None);
        assert_eq!(interval_minutes(""), None);
    }
}
