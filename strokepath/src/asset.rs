use std::io;
use std::path::PathBuf;

use log::{debug, warn};
use svg::node::element::tag;
use svg::parser::{Event, Parser};

use crate::endpoints::extract_endpoints;
use crate::error::{AssetError, PathError};
use crate::types::Endpoints;

///Identifier of a character's stroke asset: its code point as 5-digit lowercase hex
pub fn kvg_id(symbol: &str) -> Result<String, AssetError> {
    match symbol.chars().next() {
	Some(c) if c != '\0' => Ok(format!("{:05x}", c as u32)),
	_ => Err(AssetError::InvalidSymbol(String::from(symbol))),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub id: Option<String>,
    pub data: String,
}

impl Stroke {
    pub fn endpoints(&self) -> Result<Endpoints, PathError> {
	extract_endpoints(&self.data)
    }

    pub fn label(&self, index: usize) -> String {
	self.id.clone().unwrap_or_else(|| format!("#{}", index + 1))
    }
}

///Endpoints of every stroke, failing on the first malformed one
pub fn stroke_endpoints(strokes: &[Stroke]) -> Result<Vec<Endpoints>, AssetError> {
    strokes.iter()
	.enumerate()
	.map(|(index, stroke)| stroke.endpoints().map_err(|source| AssetError::Path {
	    stroke: stroke.label(index),
	    source,
	}))
	.collect()
}

fn collect_strokes(events: Parser<'_>) -> Vec<Stroke> {
    let mut strokes = Vec::new();

    for event in events {
	if let Event::Tag(tag::Path, _, attributes) = event {
	    let id = attributes.get("id").map(|id| id.to_string());

	    match attributes.get("d") {
		Some(data) => strokes.push(Stroke { id, data: data.to_string() }),
		None => warn!("skipping path without data: {:?}", id),
	    }
	}
    }

    strokes
}

///Every `<path>` in some SVG markup, in document order
pub fn strokes_from_svg(content: &str) -> Result<Vec<Stroke>, AssetError> {
    let events = svg::read(content)?;

    Ok(collect_strokes(events))
}

///A directory of stroke assets named `<kvg id>.svg`
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeAssets {
    pub root: PathBuf,
}

impl Default for StrokeAssets {
    fn default() -> Self {
	StrokeAssets {
	    root: PathBuf::from("static/assets/kanjivg"),
	}
    }
}

impl StrokeAssets {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
	StrokeAssets { root: root.into() }
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
	self.root.join(format!("{}.svg", id))
    }

    pub fn load(&self, id: &str) -> Result<Vec<Stroke>, AssetError> {
	let path = self.path_for(id);
	debug!("loading stroke asset {}", path.display());

	let mut content = String::new();
	let events = svg::open(&path, &mut content).map_err(|err| match err.kind() {
	    io::ErrorKind::NotFound => AssetError::NotFound(String::from(id)),
	    _ => AssetError::Io(err),
	})?;

	let strokes = collect_strokes(events);
	debug!("{} strokes in {}", strokes.len(), path.display());

	Ok(strokes)
    }

    pub fn load_symbol(&self, symbol: &str) -> Result<Vec<Stroke>, AssetError> {
	self.load(&kvg_id(symbol)?)
    }
}
