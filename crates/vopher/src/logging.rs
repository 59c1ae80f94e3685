use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "VOPHER_LOG";

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr subscriber.
///
/// `-v` flags take precedence; without them `VOPHER_LOG` is honoured and the
/// level defaults to `warn`.
pub fn setup_logging(verbose: u8) -> anyhow::Result<()> {
    let level = level_filter(verbose);
    let builder = EnvFilter::builder().with_default_directive(level.into());

    let env_filter = if verbose > 0 {
        builder.parse("")?
    } else {
        builder.with_env_var(LOG_ENV).from_env()?
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(level >= LevelFilter::DEBUG)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}
