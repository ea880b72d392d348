use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use logcheck::{build_options, open_input, report, Args, CheckError, LineComparator};

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let opts = build_options(&args)?;
    debug!("options: {opts:?}");

    // Both handles are dropped when the comparator returns, on every path.
    let expected = open_input(&args.expected)?;
    let actual = open_input(&args.actual)?;

    let outcome = LineComparator::new(expected, actual)
        .strict_eol(opts.strict_eol)
        .run();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match outcome {
        Ok(summary) => {
            info!("{} lines matched, sha256 {}", summary.lines, summary.digest);
            report::write_success(&mut out).context("Failed to write to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(CheckError::ContentMismatch(m)) | Err(CheckError::LineLengthMismatch(m)) => {
            report::write_mismatch(&mut out, &m, &opts.marker)
                .context("Failed to write to stdout")?;
            out.flush()?;
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
