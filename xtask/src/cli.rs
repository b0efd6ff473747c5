use clap::{Args, Parser, Subcommand};

/// Binary built by default.
pub const BIN: &str = "count-tokens";

#[derive(Debug, Parser)]
#[command(name = "xtask")]
#[command(about = "Run project tasks using rust instead of scripts")]
pub struct App {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Builds one of the project binaries
    Build(BuildArgs),
    /// Runs the workspace tests
    Test(TestArgs),
    /// Builds a release binary and copies it into the given path
    Install(InstallArgs),
    /// Tags a release and uploads the binary to GitHub
    Github(GithubArgs),
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Name of the binary to build.
    #[arg(short, long, default_value = BIN)]
    pub name: String,
    /// Build with the release profile.
    #[arg(short, long, default_value_t = false)]
    pub release: bool,
}

#[derive(Debug, Args)]
pub struct TestArgs {
    /// Only run the tests whose name contains this filter.
    pub filter: Option<String>,
}

#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Name of the binary to install.
    #[arg(short, long, default_value = BIN)]
    pub name: String,
    /// Destination of the binary.
    #[arg(short, long)]
    pub path: String,
}

#[derive(Debug, Args)]
pub struct GithubArgs {
    /// Name of the binary to release.
    #[arg(short, long, default_value = BIN)]
    pub name: String,
}
