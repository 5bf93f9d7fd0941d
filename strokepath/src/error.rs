use thiserror::Error;

/// Reasons a path description yields no endpoints.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PathError {
    #[error("path data is empty")]
    Empty,

    #[error("path must begin with a command, found {found:?}")]
    MissingInitialCommand { found: String },

    #[error("incomplete {command} command: expected {expected} arguments, found {found}")]
    IncompleteCommand {
	command: char,
	expected: usize,
	found: usize,
    },

    #[error("unsupported command: {0}")]
    UnsupportedCommand(char),

    /// Final check that a move was replayed. Paths that do not open with a
    /// move already fail with `MissingInitialCommand`, so replay never
    /// reaches this.
    #[error("no move-to command found; cannot determine start point")]
    NoStartPoint,

    #[error("invalid number token: {0:?}")]
    InvalidNumericToken(String),

    #[error("unrecognized character {character:?} at offset {offset}")]
    UnrecognizedCharacter { character: char, offset: usize },

    #[error("unexpected argument after {command} command")]
    UnexpectedArgument { command: char },
}

/// Errors raised while locating or reading stroke assets.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AssetError {
    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),

    #[error("stroke asset not found: {0}.svg")]
    NotFound(String),

    #[error("failed to read stroke asset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stroke {stroke}: {source}")]
    Path {
	stroke: String,
	#[source]
	source: PathError,
    },
}
