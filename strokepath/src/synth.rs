use crate::types::{Point, SmoothingMode};

const PRECISION: usize = 4;
const SCALE: f64 = 1e4;

///Moves values lying exactly halfway between two 4-digit decimals away from zero.
///Everything else is left for the formatter to round.
fn round_ties_away(value: f64) -> f64 {
    let scaled = value * SCALE;
    let exact = value.mul_add(SCALE, -scaled) == 0.0;

    if exact && (scaled - scaled.trunc()).abs() == 0.5 {
	(scaled.trunc() + scaled.signum()) / SCALE
    } else {
	value
    }
}

fn push_coord(d: &mut String, value: f64) {
    // adding zero folds -0.0 into 0.0
    d.push_str(&format!(" {:.*}", PRECISION, round_ties_away(value) + 0.0));
}

fn push_command(d: &mut String, letter: char, points: &[Point]) {
    if !d.is_empty() {
	d.push(' ');
    }
    d.push(letter);

    for p in points {
	push_coord(d, p.x);
	push_coord(d, p.y);
    }
}

///Connects an ordered trace of samples into path data.
///
///Traces shorter than two points have no path and produce an empty string.
///Coordinates are expected to be finite.
pub fn synthesize_path(points: &[Point], mode: SmoothingMode) -> String {
    let (first, last) = match points {
	[first, .., last] => (*first, *last),
	_ => return String::new(),
    };

    let mut d = String::new();
    push_command(&mut d, 'M', &[first]);

    for pair in points[1..].windows(2) {
	let (sample, next) = (pair[0], pair[1]);

	match mode {
	    SmoothingMode::Linear => push_command(&mut d, 'L', &[sample]),
	    SmoothingMode::Quadratic => push_command(&mut d, 'Q', &[sample, sample.midpoint(next)]),
	}
    }

    push_command(&mut d, 'L', &[last]);
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(points: &[(f64, f64)]) -> Vec<Point> {
	points.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn two_points_linear() {
	let d = synthesize_path(&trace(&[(0.0, 0.0), (10.0, 0.0)]), SmoothingMode::Linear);
	assert_eq!(d, "M 0.0000 0.0000 L 10.0000 0.0000");
    }

    #[test]
    fn two_points_quadratic_is_a_line() {
	let d = synthesize_path(&trace(&[(0.0, 0.0), (10.0, 0.0)]), SmoothingMode::Quadratic);
	assert_eq!(d, "M 0.0000 0.0000 L 10.0000 0.0000");
    }

    #[test]
    fn linear_visits_every_sample() {
	let d = synthesize_path(&trace(&[(0.0, 0.0), (1.5, 2.25), (3.0, -1.0), (4.0, 4.0)]), SmoothingMode::Linear);
	assert_eq!(d, "M 0.0000 0.0000 L 1.5000 2.2500 L 3.0000 -1.0000 L 4.0000 4.0000");
    }

    #[test]
    fn quadratic_uses_midpoints() {
	let d = synthesize_path(&trace(&[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)]), SmoothingMode::Quadratic);
	assert_eq!(d, "M 0.0000 0.0000 Q 5.0000 10.0000 7.5000 5.0000 L 10.0000 0.0000");
    }

    #[test]
    fn quadratic_one_curve_per_interior_point() {
	let points = trace(&[(0.0, 0.0), (2.0, 2.0), (4.0, 0.0), (6.0, 2.0), (8.0, 0.0)]);
	let d = synthesize_path(&points, SmoothingMode::Quadratic);

	assert_eq!(d.matches('Q').count(), 3);
	assert!(d.ends_with(" L 8.0000 0.0000"));
    }

    #[test]
    fn degenerate_traces() {
	for mode in [SmoothingMode::Linear, SmoothingMode::Quadratic].iter() {
	    assert_eq!(synthesize_path(&[], *mode), "");
	    assert_eq!(synthesize_path(&[Point::new(1.0, 1.0)], *mode), "");
	}
    }

    #[test]
    fn halfway_values_round_away_from_zero() {
	let mut d = String::new();
	push_coord(&mut d, 0.03125);
	push_coord(&mut d, -0.03125);
	push_coord(&mut d, 0.03124);
	push_coord(&mut d, 12.5);
	assert_eq!(d, " 0.0313 -0.0313 0.0312 12.5000");
    }

    #[test]
    fn sixteenth_pixel_midpoint() {
	let d = synthesize_path(&trace(&[(0.0, 0.0), (0.0625, 0.0), (0.0, 0.0)]), SmoothingMode::Quadratic);
	assert_eq!(d, "M 0.0000 0.0000 Q 0.0625 0.0000 0.0313 0.0000 L 0.0000 0.0000");
    }

    #[test]
    fn fixed_precision_no_exponent() {
	let d = synthesize_path(&trace(&[(1e-7, -0.0), (123456.789, 1e21)]), SmoothingMode::Linear);
	assert_eq!(d, "M 0.0000 0.0000 L 123456.7890 1000000000000000000000.0000");
    }
}
