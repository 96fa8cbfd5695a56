use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            format!("v{VERSION}")
        } else {
            format!("v{VERSION}\ndev: {GIT_HASH} {GIT_COMMIT_DATE}")
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "datastar-demo", bin_name = "datastar-demo", version = get_version())]
#[command(about = "Generate the datastar-attrs demo page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ./datastar-demo.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Write the demo page to disk
    #[command(alias = "gen")]
    Generate {
        /// Output path, overriding the configured one
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// List modifiers and directives
    Catalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_with_out() {
        let cli =
            Cli::try_parse_from(["datastar-demo", "generate", "--out", "site/x.html"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Generate {
                out: Some(PathBuf::from("site/x.html"))
            })
        );
    }

    #[test]
    fn gen_is_an_alias() {
        let cli = Cli::try_parse_from(["datastar-demo", "gen"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Generate { out: None }));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["datastar-demo", "catalog", "-v", "--config", "a.toml"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Catalog));
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["datastar-demo"]).unwrap();
        assert!(cli.command.is_none());
    }
}
