//! Process-level setup for the CLI.

/// Initialize logging with tracing_subscriber.
///
/// `log::` macro calls are bridged into the subscriber, so module code
/// stays on the `log` facade.
pub fn init_logging(verbose: bool) {
    let crate_level = if verbose {
        "seolupp=debug"
    } else {
        "seolupp=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(crate_level.parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .compact()
        .with_target(false)
        .with_ansi(true)
        .init();
}
