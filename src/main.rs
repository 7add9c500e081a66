//! Text front-end binary.
//!
//! Protocol replies go to stdout; tracing output goes to stderr and is
//! filtered with `RUST_LOG`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use plum_xiangqi::protocol::text_protocol::run_stdio_loop;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("plum_xiangqi=info".parse()?))
        .init();

    tracing::info!("plum_xiangqi starting");
    run_stdio_loop()?;
    tracing::info!("plum_xiangqi shutdown");
    Ok(())
}
