use strokepath::{extract_endpoints, synthesize_path, Point, SmoothingMode};

const MODES: [SmoothingMode; 2] = [SmoothingMode::Linear, SmoothingMode::Quadratic];

fn sampled_arc(n: usize) -> Vec<Point> {
    (0..n)
	.map(|i| {
	    let t = i as f64 / (n - 1) as f64 * std::f64::consts::PI;
	    Point::new(50.0 + 40.0 * t.cos(), 50.0 - 40.0 * t.sin())
	})
	.collect()
}

#[test]
fn starts_with_move_and_ends_with_line() {
    for n in 2..8 {
	let points = sampled_arc(n);
	let first = points[0];
	let last = points[n - 1];

	for mode in MODES.iter() {
	    let d = synthesize_path(&points, *mode);

	    assert!(d.starts_with(&format!("M {:.4} {:.4}", first.x, first.y)), "{}", d);
	    assert!(d.ends_with(&format!(" L {:.4} {:.4}", last.x + 0.0, last.y + 0.0)), "{}", d);
	}
    }
}

#[test]
fn degenerate_traces_are_empty() {
    for mode in MODES.iter() {
	assert_eq!(synthesize_path(&[], *mode), "");
	assert_eq!(synthesize_path(&[Point::new(3.0, 4.0)], *mode), "");
    }
}

#[test]
fn linear_output_round_trips_through_extractor() {
    let points = sampled_arc(12);
    let d = synthesize_path(&points, SmoothingMode::Linear);
    let result = extract_endpoints(&d).unwrap();

    assert!((result.start.x - points[0].x).abs() < 1e-4);
    assert!((result.start.y - points[0].y).abs() < 1e-4);
    assert!((result.end.x - points[11].x).abs() < 1e-4);
    assert!((result.end.y - points[11].y).abs() < 1e-4);
}

#[test]
fn pointer_drag() {
    let points = [Point::new(0.0, 0.0), Point::new(5.0, 10.0), Point::new(10.0, 0.0)];

    assert_eq!(
	synthesize_path(&points, SmoothingMode::Quadratic),
	"M 0.0000 0.0000 Q 5.0000 10.0000 7.5000 5.0000 L 10.0000 0.0000"
    );
    assert_eq!(
	synthesize_path(&points, SmoothingMode::Linear),
	"M 0.0000 0.0000 L 5.0000 10.0000 L 10.0000 0.0000"
    );
}

#[test]
fn deterministic() {
    let points = sampled_arc(30);

    for mode in MODES.iter() {
	assert_eq!(synthesize_path(&points, *mode), synthesize_path(&points, *mode));
    }
}
