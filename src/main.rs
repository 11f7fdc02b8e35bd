use std::{
    fmt,
    io::{self, IsTerminal as _, Write as _},
    process::ExitCode,
};

use clap::Parser;
use nth_primes::{Error, Verification, VerificationReport};
use tracing::{debug, error, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// Cross-check the two n-th prime algorithms over a range of prime indices.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The first prime index to check (the 1st prime is 2).
    #[arg(long, default_value_t = 1)]
    from: u32,

    /// The last prime index to check, inclusive.
    #[arg(long, default_value_t = 4)]
    to: u32,
}

/// Adapter from [`io::Write`] to [`fmt::Write`], keeping the underlying I/O error.
struct IoWriter<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

/// Verifies the range given in `args`, writing the results to `out`.
fn run(args: &Args, out: impl io::Write) -> Result<VerificationReport, Error> {
    let verification = Verification::new(args.from, args.to)?;

    let mut out = IoWriter {
        inner: out,
        error: None,
    };
    let result = verification.run(&mut out);
    let flushed = out.inner.flush();
    if let Some(err) = out.error.as_ref().or(flushed.as_ref().err()) {
        debug!("Writing the results failed: {err}");
    }

    let report = result?;
    flushed.map_err(|_| Error::Output)?;
    Ok(report)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    match run(&args, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
