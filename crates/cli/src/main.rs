mod commands;

use anyhow::Result;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, reload};

use crate::commands::{App, FilterHandle};

fn main() -> Result<()> {
    let filter = init_tracing();
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let mut app = App::new(filter);
    let code = optchain::run(&mut app, &argv)?;
    std::process::exit(code);
}

/// Install the stderr subscriber.
///
/// The returned handle lets `--verbose` raise the level later. It is `None`
/// when `RUST_LOG` is set, since an explicit filter always wins.
fn init_tracing() -> Option<FilterHandle> {
    let from_env = EnvFilter::try_from_default_env().ok();
    let pinned = from_env.is_some();
    let initial = from_env.unwrap_or_else(|| EnvFilter::new("info"));
    let (filter, handle) = reload::Layer::new(initial);

    let output = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();
    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .init();

    (!pinned).then_some(handle)
}
