use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::{debug, info};

use strokepath::{Endpoints, Point, SmoothingMode, StrokeAssets, extract_endpoints, stroke_endpoints, synthesize_path};

#[derive(Parser)]
#[command(name = "kanji-strokes", about = "Stroke endpoints and traced paths for KanjiVG stroke data")]
struct Cli {
    #[command(subcommand)]
    command: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Start and end point of every stroke of a character
    Endpoints {
	/// The character, e.g. 一
	symbol: String,

	/// Directory holding <kvg id>.svg files
	#[arg(long, default_value_os_t = StrokeAssets::default().root)]
	assets: PathBuf,

	/// Print JSON instead of text
	#[arg(long)]
	json: bool,
    },

    /// Start and end point of literal path data
    Extract {
	/// Path data, e.g. "M82.02,12.38c0.6,1.12,0.71,2.48,0.62,3.15"
	#[arg(allow_hyphen_values = true)]
	data: String,

	/// Print JSON instead of text
	#[arg(long)]
	json: bool,
    },

    /// Path data connecting sampled points
    Synth {
	/// linear or quadratic
	#[arg(short, long, default_value_t = SmoothingMode::Linear)]
	mode: SmoothingMode,

	/// Samples as x,y pairs
	#[arg(required = true, allow_hyphen_values = true)]
	points: Vec<Sample>,
    },
}

#[derive(Debug, Clone, Copy)]
struct Sample(Point);

#[derive(Debug)]
struct ParseSampleError(String);

impl std::fmt::Display for ParseSampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
	write!(f, "invalid sample {:?}, expected x,y", self.0)
    }
}

impl Error for ParseSampleError {}

impl FromStr for Sample {
    type Err = ParseSampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
	let err = || ParseSampleError(String::from(s));

	let mut coords = s.split(',').map(|c| c.trim().parse::<f64>());
	match (coords.next(), coords.next(), coords.next()) {
	    (Some(Ok(x)), Some(Ok(y)), None) if x.is_finite() && y.is_finite() => Ok(Sample(Point::new(x, y))),
	    _ => Err(err()),
	}
    }
}

fn describe(endpoints: &Endpoints) -> String {
    format!("({}, {}) -> ({}, {})",
	    endpoints.start.x, endpoints.start.y,
	    endpoints.end.x, endpoints.end.y)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
	Action::Endpoints { symbol, assets, json } => {
	    let assets = StrokeAssets::new(assets);
	    let strokes = assets.load_symbol(&symbol)?;
	    info!("{} has {} strokes", symbol, strokes.len());

	    let endpoints = stroke_endpoints(&strokes)?;

	    if json {
		println!("{}", serde_json::to_string_pretty(&endpoints)?);
	    } else {
		for (i, (stroke, ends)) in strokes.iter().zip(&endpoints).enumerate() {
		    let name = stroke.label(i);
		    println!("{}\t{}", name, describe(ends));
		}
	    }
	},
	Action::Extract { data, json } => {
	    let endpoints = extract_endpoints(&data)?;

	    if json {
		println!("{}", serde_json::to_string_pretty(&endpoints)?);
	    } else {
		println!("{}", describe(&endpoints));
	    }
	},
	Action::Synth { mode, points } => {
	    let points: Vec<Point> = points.into_iter().map(|Sample(p)| p).collect();
	    debug!("synthesizing {} samples, {} smoothing", points.len(), mode);

	    println!("{}", synthesize_path(&points, mode));
	},
    }

    Ok(())
}
