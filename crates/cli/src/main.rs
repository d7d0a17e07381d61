#![forbid(unsafe_code)]

use clap::Parser;
use classifier::ContactFilter;
use config::Config;
use pitchcat::{cli::Cli, commands};
use tracing::{debug, trace};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // NOTE: The verbosity flag takes precedence over the environment variable
    // for log control. For example, `PITCHCAT_LOG=warn pitchcat -vvv report`
    // will still log at the trace level. The environment variable
    // (`PITCHCAT_LOG`) can only set the log level per crate, not override the
    // verbosity flag.
    let env_filter = EnvFilter::builder()
        .with_env_var("PITCHCAT_LOG")
        .from_env()?
        .add_directive(cli.verbosity.log_level_filter().as_str().parse()?);

    // stdout carries the report, logs go to stderr
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .init();

    // load config
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        _ => {
            let mut candidates = glob::glob("/etc/pitchcat/config.d/*.toml")?
                .filter_map(Result::ok)
                .collect::<Vec<_>>();
            candidates.insert(0, "/etc/pitchcat/config.toml".into());
            trace!(?candidates, "config file candidates");
            Config::load_multiple(candidates)?
        }
    };
    if let Some(width) = cli.rule_width {
        config.report.rule_width = width;
    }
    debug!(?config, ?cli);

    let mut filter = ContactFilter::try_new(&config)?;
    debug!(thresholds = ?filter.thresholds(), "contact filter ready");
    let pitches = commands::read_pitches(cli.command.input())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &mut filter, &pitches, &mut out)
}
