use std::io;
use tracing_subscriber::fmt::{
    self,
    format::{DefaultFields, Format},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "berlin_clock=debug,info"
    } else {
        "berlin_clock=info"
    }
}

// Logs go to stderr so stdout carries only the rendered clock.
fn stderr_layer<S>() -> fmt::Layer<S, DefaultFields, Format, fn() -> io::Stderr> {
    fmt::layer()
        .with_writer(io::stderr as fn() -> io::Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// Installs the global subscriber: compact lines, or JSON when `json` is set.
pub fn init_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(stderr_layer().json()).init();
    } else {
        registry.with(stderr_layer().compact()).init();
    }
}
