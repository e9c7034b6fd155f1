//! Command-line argument definitions for the Placard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input document and output file, the
//! configuration file, the viewport, an optional pointer position for the
//! hover state, and logging verbosity.

use std::str::FromStr;

use clap::Parser;

/// Command-line arguments for the Placard diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON document
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Viewport width; defaults to `canvas.width` from the configuration
    #[arg(long)]
    pub width: Option<f32>,

    /// Viewport height; defaults to the configured height for the diagram kind
    #[arg(long)]
    pub height: Option<f32>,

    /// Pointer position as `X,Y`; the element under it is rendered hovered
    #[arg(long, value_parser = parse_pointer)]
    pub pointer: Option<Pointer>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// A pointer position given on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl FromStr for Pointer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `X,Y`, got `{s}`"))?;
        let coordinate = |value: &str| {
            value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| format!("`{}` is not a number", value.trim()))
        };
        Ok(Self {
            x: coordinate(x)?,
            y: coordinate(y)?,
        })
    }
}

fn parse_pointer(s: &str) -> Result<Pointer, String> {
    s.parse()
}
