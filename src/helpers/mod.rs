pub mod fzf_invoker;

use self::fzf_invoker::FzfInvoker;
use anyhow::Result;
use anyhow::bail;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Wrapper around the `termenu` picker that keeps the UX consistent across the
/// binary.
pub fn choose_one<T: std::fmt::Display + Clone>(title: &str, items: Vec<T>) -> Result<T> {
    let picker = FzfInvoker::new(title.to_string(), items);
    match picker.invoke()? {
        Some(choice) => Ok(choice),
        None => bail!("No selection made"),
    }
}

/// Install the fmt subscriber; `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
}
