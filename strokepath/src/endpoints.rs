use crate::error::PathError;
use crate::token::{Token, tokenize};
use crate::types::{Command, Endpoints, Point, Position};

///Pen position tracked while replaying a path.
///Control points of curves are consumed but never tracked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PenState {
    pub pen: Point,
    pub subpath_start: Point,
    pub first_move: Option<Point>,
}

impl PenState {
    ///Applies one command. `args` must hold exactly `command.arity()` numbers.
    pub fn step(self, command: Command, position: Position, args: &[f64]) -> PenState {
	debug_assert_eq!(args.len(), command.arity());

	let to = |x, y| match position {
	    Position::Absolute => Point::new(x, y),
	    Position::Relative => self.pen.offset(x, y),
	};
	let along = |current: f64, value: f64| match position {
	    Position::Absolute => value,
	    Position::Relative => current + value,
	};

	match command {
	    Command::Move => {
		let pen = to(args[0], args[1]);

		PenState {
		    pen,
		    subpath_start: pen,
		    first_move: self.first_move.or(Some(pen)),
		}
	    },
	    Command::Line => PenState { pen: to(args[0], args[1]), ..self },
	    Command::CubicCurve => PenState { pen: to(args[4], args[5]), ..self },
	    Command::HorizontalLine => PenState {
		pen: Point::new(along(self.pen.x, args[0]), self.pen.y),
		..self
	    },
	    Command::VerticalLine => PenState {
		pen: Point::new(self.pen.x, along(self.pen.y, args[0])),
		..self
	    },
	    Command::Close => PenState { pen: self.subpath_start, ..self },
	}
    }
}

///Returns the first move-to point and the final pen position of some path data.
///
///Supports `M m L l C c H h V v Z z` and must open with `M` or `m`. Bare numbers
///repeat the previous command, and bare pairs after a move are lines.
pub fn extract_endpoints(data: &str) -> Result<Endpoints, PathError> {
    let tokens = tokenize(data)?;

    let mut state = PenState::default();
    let mut active: Option<(Command, Position)> = None;
    let mut args = [0.0; 6];
    let mut i = 0;

    while i < tokens.len() {
	let (command, position) = match tokens[i] {
	    Token::Command(letter) => {
		i += 1;
		let (command, position) = Command::from_letter(letter)
		    .ok_or(PathError::UnsupportedCommand(letter))?;

		// path data opens with a move
		if active.is_none() && command != Command::Move {
		    return Err(PathError::MissingInitialCommand { found: letter.to_string() });
		}

		(command, position)
	    },
	    Token::Number(n) => match active {
		None => return Err(PathError::MissingInitialCommand { found: n.to_string() }),
		Some((Command::Close, position)) => {
		    return Err(PathError::UnexpectedArgument { command: Command::Close.letter(position) })
		},
		Some(active) => active,
	    },
	};

	let arity = command.arity();
	let found = tokens[i..].iter()
	    .take(arity)
	    .take_while(|token| matches!(token, Token::Number(_)))
	    .count();

	if found < arity {
	    return Err(PathError::IncompleteCommand {
		command: command.letter(position),
		expected: arity,
		found,
	    });
	}

	for (slot, token) in args.iter_mut().zip(&tokens[i..i + arity]) {
	    if let Token::Number(n) = token {
		*slot = *n;
	    }
	}
	i += arity;

	state = state.step(command, position, &args[..arity]);
	active = Some(match command {
	    Command::Move => (Command::Line, position),
	    _ => (command, position),
	});
    }

    let start = state.first_move.ok_or(PathError::NoStartPoint)?;

    Ok(Endpoints { start, end: state.pen })
}
