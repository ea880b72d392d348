use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::marker::{MarkerPlacement, MarkerStyle};
use crate::utils::parse_marker;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Expected (reference) log
    pub expected: PathBuf,

    /// Actual log to validate
    pub actual: PathBuf,

    /// Glyph pointing at the mismatch column
    #[arg(short, long, default_value = "v", value_parser = parse_marker)]
    pub marker: char,

    /// Print the cursor line above or below each text line
    #[arg(short = 'p', long, value_enum, default_value_t = MarkerPlacement::Above)]
    pub marker_position: MarkerPlacement,

    /// Compare a carriage return before the newline as line content
    #[arg(short = 'E', long)]
    pub strict_eol: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Debug)]
pub struct Options {
    pub marker: MarkerStyle,
    pub strict_eol: bool,
}

pub fn build_options(args: &Args) -> Result<Options> {
    Ok(Options {
        marker: MarkerStyle {
            glyph: args.marker,
            placement: args.marker_position,
        },
        strict_eol: args.strict_eol,
    })
}
