//! A tool to score the quality of open-source packages.
//!
//! # Overview
//!
//! `pkg-score` is a batch scoring tool that helps you assess whether
//! open-source packages are suitable as dependencies for your project. Given
//! a file of package URLs, it resolves each one to its source repository,
//! collects quality signals from GitHub, and produces a weighted net score
//! per package.
//!
//! # Usage
//!
//! ```bash
//! pkg-score urls.txt results.ndjson
//! ```
//!
//! # Input Format
//!
//! Plain text, one URL per line. Two URL shapes are accepted:
//!
//! - GitHub repository URLs: `https://github.com/expressjs/express`
//! - npm package pages: `https://www.npmjs.com/package/express`
//!
//! npm packages are resolved to the GitHub repository declared in their
//! registry metadata. Blank lines are skipped; any other line content aborts
//! the run.
//!
//! # Output Format
//!
//! Newline-delimited JSON, one record per input URL, in input order. Each
//! record carries the net score plus the five metric scores, each with the
//! wall-clock latency of its computation:
//!
//! ```json
//! {"URL":"https://github.com/expressjs/express","NetScore":0.74,"NetScore_Latency":0.0,...}
//! ```
//!
//! All numeric values are rounded to 3 decimal places. The same lines are
//! mirrored to stdout as they are written.
//!
//! # Metrics
//!
//! - **BusFactor**: contributor-concentration risk
//! - **ResponsiveMaintainer**: issue turnaround speed
//! - **RampUp**: onboarding friction, judged from readme coverage
//! - **Correctness**: CI configuration, test suite, recent activity
//! - **License**: compatibility of the declared license
//!
//! The five metrics are weighted equally into the net score.
//!
//! # GitHub Integration
//!
//! Unauthenticated GitHub API access is heavily rate limited. Provide a
//! token to raise the limit:
//!
//! ```bash
//! export GITHUB_TOKEN=ghp_xxxxxxxxxxxxxxxxxxxx
//! pkg-score urls.txt results.ndjson
//! ```
//!
//! # Exit Codes
//!
//! - `0`: every input URL was evaluated and written
//! - non-zero: bad arguments, missing input file, or any per-URL failure.
//!   The batch is fail-fast: the first failure stops processing, and records
//!   already written remain in the output file.

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use pkg_score::host::Host;
use pkg_score::pipeline::Pipeline;
use pkg_score::resolve::{Resolver, npm};
use pkg_score::{Result, batch, hosting};
use std::io::{Write, stdout};
use std::path::PathBuf;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "pkg-score", version, about)]
#[command(styles = CLAP_STYLES)]
struct Args {
    /// File containing one package URL per line
    input: PathBuf,

    /// File where NDJSON evaluation records are written
    output: PathBuf,

    /// GitHub API token used for authenticated requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = hosting::GITHUB_API_BASE, hide = true)]
    github_api: String,

    /// Base URL of the npm registry
    #[arg(long, default_value = npm::NPM_REGISTRY_BASE, hide = true)]
    npm_registry: String,
}

/// Default host that writes to the real stdout.
#[derive(Debug, Clone, Default)]
struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let args = Args::parse();

    let client = hosting::Client::new(args.github_token.as_deref(), &args.github_api)?;
    let registry = npm::Registry::new(&args.npm_registry)?;
    let pipeline = Pipeline::new(Resolver::new(registry), client);

    batch::run(&mut RealHost, &pipeline, &args.input, &args.output).await
}
