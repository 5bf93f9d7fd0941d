use nom::{
    IResult,
    branch::alt,
    character::complete::satisfy,
    combinator::map,
    number::complete::recognize_float,
};

use crate::error::PathError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Command(char),
    Number(f64),
}

enum Lexeme<'a> {
    Letter(char),
    Numeral(&'a str),
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

///Any ASCII letter lexes as a command, whether or not the extractor supports it
pub fn is_command_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn parse_number(text: &str) -> Result<f64, PathError> {
    match text.parse::<f64>() {
	Ok(n) if n.is_finite() => Ok(n),
	_ => Err(PathError::InvalidNumericToken(String::from(text))),
    }
}

fn lexeme(input: &str) -> IResult<&str, Lexeme<'_>> {
    alt((
	map(satisfy(is_command_letter), Lexeme::Letter),
	map(recognize_float, Lexeme::Numeral),
    ))(input)
}

fn unrecognized(character: char, rest: &str, offset: usize) -> PathError {
    if character.is_ascii_digit() || "+-.".contains(character) {
	let word = rest.split(is_separator).next().unwrap_or(rest);
	PathError::InvalidNumericToken(String::from(word))
    } else {
	PathError::UnrecognizedCharacter { character, offset }
    }
}

///Splits path data into command letters and numbers, dropping whitespace and commas
pub fn tokenize(data: &str) -> Result<Vec<Token>, PathError> {
    let mut tokens = Vec::new();
    let mut rest = data;

    loop {
	rest = rest.trim_start_matches(is_separator);
	let first = match rest.chars().next() {
	    Some(c) => c,
	    None => break,
	};

	let offset = data.len() - rest.len();
	let (remaining, token) = match lexeme(rest) {
	    Ok((remaining, Lexeme::Letter(letter))) => (remaining, Token::Command(letter)),
	    Ok((remaining, Lexeme::Numeral(text))) => (remaining, Token::Number(parse_number(text)?)),
	    Err(_) => return Err(unrecognized(first, rest, offset)),
	};

	tokens.push(token);
	rest = remaining;
    }

    if tokens.is_empty() {
	return Err(PathError::Empty);
    }

    Ok(tokens)
}
