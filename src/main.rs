use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use foreman_backup::cli::{handle_backup_command, handle_show_command, handle_types_command, ShowArgs};
use foreman_backup::config::settings::{
    DEFAULT_HOST, DEFAULT_PASSWORD, DEFAULT_PORT, DEFAULT_USERNAME,
};
use foreman_backup::config::{BackupPaths, ForemanSettings};

#[derive(Parser)]
#[command(
    name = "foreman-backup",
    version,
    about = "Export the configuration of a Foreman server as YAML files",
    long_about = "foreman-backup snapshots the configuration objects of a Foreman \
                  server into a directory tree with one YAML file per object, \
                  grouped by resource type. Run it into a git checkout to keep a \
                  diffable history of the server's configuration."
)]
struct Cli {
    /// Foreman host
    #[arg(short = 'f', long = "foreman", env = "FOREMAN_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Foreman HTTPS port
    #[arg(short, long, env = "FOREMAN_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// API user
    #[arg(short, long, env = "FOREMAN_USERNAME", default_value = DEFAULT_USERNAME)]
    username: String,

    /// API password
    #[arg(
        short = 's',
        long = "secret",
        env = "FOREMAN_PASSWORD",
        default_value = DEFAULT_PASSWORD,
        hide_env_values = true,
        hide_default_value = true
    )]
    secret: String,

    /// Backup root directory
    #[arg(short, long, env = "FOREMAN_BACKUP_DIR", default_value = ".")]
    output: PathBuf,

    /// Verify the server's TLS certificate
    #[arg(long, env = "FOREMAN_VERIFY_TLS")]
    verify_tls: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Back up every resource type (the default)
    Backup,

    /// Print one object, looked up by name, as YAML
    Show(ShowArgs),

    /// List the resource types a backup exports
    Types,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let settings = ForemanSettings::new(cli.host, cli.port, cli.username, cli.secret)
        .with_verify_tls(cli.verify_tls);
    let paths = BackupPaths::new(cli.output);

    match cli.command {
        None | Some(Commands::Backup) => handle_backup_command(&settings, &paths)?,
        Some(Commands::Show(args)) => handle_show_command(&settings, &args)?,
        Some(Commands::Types) => handle_types_command(&paths),
    }

    Ok(())
}

/// Initialize tracing with the requested verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    // Parsing reads FOREMAN_* from the test process environment, so these
    // tests only assert defaults for variables the test runner leaves unset.
    fn env_is_clear() -> bool {
        [
            "FOREMAN_HOST",
            "FOREMAN_PORT",
            "FOREMAN_USERNAME",
            "FOREMAN_PASSWORD",
            "FOREMAN_BACKUP_DIR",
            "FOREMAN_VERIFY_TLS",
        ]
        .iter()
        .all(|var| std::env::var_os(var).is_none())
    }

    #[test]
    fn test_defaults_without_subcommand() {
        let cli = Cli::try_parse_from(["foreman-backup"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);

        if env_is_clear() {
            assert_eq!(cli.host, "127.0.0.1");
            assert_eq!(cli.port, 443);
            assert_eq!(cli.username, "foreman");
            assert_eq!(cli.secret, "changeme");
            assert_eq!(cli.output, PathBuf::from("."));
            assert!(!cli.verify_tls);
        }
    }

    #[test]
    fn test_flags_fall_back_to_environment() {
        let cmd = Cli::command();
        let env_of = |id: &str| {
            cmd.get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(OsStr::to_os_string)
        };

        for (id, var) in [
            ("host", "FOREMAN_HOST"),
            ("port", "FOREMAN_PORT"),
            ("username", "FOREMAN_USERNAME"),
            ("secret", "FOREMAN_PASSWORD"),
            ("output", "FOREMAN_BACKUP_DIR"),
            ("verify_tls", "FOREMAN_VERIFY_TLS"),
        ] {
            assert_eq!(env_of(id), Some(var.into()), "{} reads {}", id, var);
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_connection_flags() {
        let cli = Cli::try_parse_from([
            "foreman-backup",
            "-f",
            "foreman.example.com",
            "-p",
            "8443",
            "-u",
            "admin",
            "-s",
            "secret",
        ])
        .unwrap();
        assert_eq!(cli.host, "foreman.example.com");
        assert_eq!(cli.port, 8443);
        assert_eq!(cli.username, "admin");
        assert_eq!(cli.secret, "secret");
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "foreman-backup",
            "--foreman",
            "h",
            "--port",
            "443",
            "--username",
            "u",
            "--secret",
            "s",
            "--output",
            "/srv/backup",
        ])
        .unwrap();
        assert_eq!(cli.host, "h");
        assert_eq!(cli.output, PathBuf::from("/srv/backup"));
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["foreman-backup", "-p", "https"]).is_err());
    }

    #[test]
    fn test_show_subcommand() {
        let cli = Cli::try_parse_from(["foreman-backup", "show", "domains", "example.com"]).unwrap();
        match cli.command {
            Some(Commands::Show(args)) => {
                assert_eq!(args.resource_type.as_str(), "domains");
                assert_eq!(args.name, "example.com");
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_show_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["foreman-backup", "show", "puppetclasses", "x"]).is_err());
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["foreman-backup", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["foreman-backup", "-v", "-q"]).is_err());
    }
}
