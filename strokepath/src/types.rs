use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

pub type X = f64;
pub type Y = f64;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: X,
    pub y: Y,
}

impl Point {
    pub fn new(x: X, y: Y) -> Self {
	Point { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
	Point {
	    x: (self.x + other.x) / 2.0,
	    y: (self.y + other.y) / 2.0,
	}
    }

    pub fn offset(self, dx: X, dy: Y) -> Point {
	Point {
	    x: self.x + dx,
	    y: self.y + dy,
	}
    }
}

impl From<(X, Y)> for Point {
    fn from((x, y): (X, Y)) -> Self {
	Point { x, y }
    }
}

///The first move-to position of a path and the pen position after its last command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Absolute,
    Relative,
}

///The drawing commands the endpoint extractor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move,
    Line,
    CubicCurve,
    HorizontalLine,
    VerticalLine,
    Close,
}

impl Command {
    ///Maps a command letter to its command, uppercase letters being absolute
    pub fn from_letter(letter: char) -> Option<(Command, Position)> {
	let command = match letter.to_ascii_uppercase() {
	    'M' => Command::Move,
	    'L' => Command::Line,
	    'C' => Command::CubicCurve,
	    'H' => Command::HorizontalLine,
	    'V' => Command::VerticalLine,
	    'Z' => Command::Close,
	    _ => return None,
	};

	let position = if letter.is_ascii_uppercase() {
	    Position::Absolute
	} else {
	    Position::Relative
	};

	Some((command, position))
    }

    pub fn letter(self, position: Position) -> char {
	let letter = match self {
	    Command::Move => 'M',
	    Command::Line => 'L',
	    Command::CubicCurve => 'C',
	    Command::HorizontalLine => 'H',
	    Command::VerticalLine => 'V',
	    Command::Close => 'Z',
	};

	match position {
	    Position::Absolute => letter,
	    Position::Relative => letter.to_ascii_lowercase(),
	}
    }

    ///Number of numeric arguments consumed by one application of this command
    pub fn arity(self) -> usize {
	match self {
	    Command::Move | Command::Line => 2,
	    Command::CubicCurve => 6,
	    Command::HorizontalLine | Command::VerticalLine => 1,
	    Command::Close => 0,
	}
    }
}

///How the synthesizer connects the interior samples of a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothingMode {
    Linear,
    Quadratic,
}

impl Default for SmoothingMode {
    fn default() -> Self {
	SmoothingMode::Linear
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSmoothingModeError(String);

impl fmt::Display for ParseSmoothingModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "invalid smoothing mode: {} (expected linear or quadratic)", self.0)
    }
}

impl std::error::Error for ParseSmoothingModeError {}

impl FromStr for SmoothingMode {
    type Err = ParseSmoothingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
	Ok(match s.trim().to_lowercase().as_str() {
	    "linear" => Self::Linear,
	    "quadratic" => Self::Quadratic,
	    _ => return Err(ParseSmoothingModeError(String::from(s))),
	})
    }
}

impl fmt::Display for SmoothingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	match self {
	    SmoothingMode::Linear => write!(f, "linear"),
	    SmoothingMode::Quadratic => write!(f, "quadratic"),
	}
    }
}
