use clap::{Arg, ArgAction, Command};

/// The fixed menu of tracking durations offered by the CLI.
pub const INTERVAL_CHOICES: [&str; 4] = ["5m", "15m", "30m", "1h"];

pub fn build_cli() -> Command {
    Command::new("scribe")
        .about("Tracks file-edit activity and syncs interval logs to a remote repository")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit info-level JSON logs to stderr"),
        )
        .subcommand(run_command())
        .subcommand(interval_command())
}

fn run_command() -> Command {
    Command::new("run")
        .about("Start tracking in the foreground (Ctrl-C stops)")
        .arg(
            Arg::new("workspace")
                .long("workspace")
                .short('w')
                .help("Workspace directory to track (default: current directory)"),
        )
        .arg(
            Arg::new("interval")
                .long("interval")
                .short('i')
                .value_parser(INTERVAL_CHOICES)
                .help("Tracking interval for this session (overrides persisted value)"),
        )
}

fn interval_command() -> Command {
    Command::new("interval")
        .about("Persist a new tracking interval for future sessions")
        .arg(
            Arg::new("duration")
                .help("Interval duration")
                .required(true)
                .index(1)
                .value_parser(INTERVAL_CHOICES),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_structure_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_run_accepts_workspace_and_interval() {
        let matches = build_cli()
            .try_get_matches_from(["scribe", "run", "--workspace", "/ws", "--interval", "30m"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "run");
        assert_eq!(sub.get_one::<String>("workspace").unwrap(), "/ws");
        assert_eq!(sub.get_one::<String>("interval").unwrap(), "30m");
    }

    #[test]
    fn test_interval_rejects_values_outside_the_menu() {
        let result = build_cli().try_get_matches_from(["scribe", "interval", "7m"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_interval_requires_a_duration() {
        let result = build_cli().try_get_matches_from(["scribe", "interval"]);
        assert!(result.is_err());
    }
}
