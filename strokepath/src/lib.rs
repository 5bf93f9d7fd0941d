//! Stroke path geometry: start and end points of path data, and path data
//! synthesized from sampled pointer traces.

mod types;
mod token;
mod endpoints;
mod synth;
mod asset;
mod error;

pub use types::{Command, Endpoints, ParseSmoothingModeError, Point, Position, SmoothingMode};
pub use token::{Token, is_command_letter, parse_number, tokenize};
pub use endpoints::{PenState, extract_endpoints};
pub use synth::synthesize_path;
pub use asset::{Stroke, StrokeAssets, kvg_id, stroke_endpoints, strokes_from_svg};
pub use error::{AssetError, PathError};
