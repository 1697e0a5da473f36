use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

/// Installs the global subscriber; an unparsable filter falls back to `info`.
pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_new(&args.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if args.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
