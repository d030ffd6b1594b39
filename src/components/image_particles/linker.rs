//! Proximity links between nearby particles.
//!
//! [`links`] is the brute-force O(n²) reference. [`links_bucketed`] hashes
//! particles into square cells one link-length wide and only compares
//! neighbouring cells; it returns exactly the same links in the same order.

use std::collections::HashMap;

use super::field::Particle;

/// An undirected edge between particles `a < b`, weighted by closeness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	/// `(1 - d / connect_distance) * line_thickness_scale`.
	pub weight: f64,
}

/// Above this many particles the frame loop switches to bucketing.
pub const BUCKET_THRESHOLD: usize = 256;

fn link_between(
	particles: &[Particle],
	a: usize,
	b: usize,
	connect_distance: f64,
	line_thickness_scale: f64,
) -> Option<Link> {
	let (p, q) = (&particles[a], &particles[b]);
	let distance = (q.x - p.x).hypot(q.y - p.y);
	(distance <= connect_distance).then(|| Link {
		a,
		b,
		weight: (1.0 - distance / connect_distance) * line_thickness_scale,
	})
}

/// Compare every unordered pair once.
pub fn links(particles: &[Particle], connect_distance: f64, line_thickness_scale: f64) -> Vec<Link> {
	let mut out = Vec::new();
	for a in 0..particles.len() {
		for b in (a + 1)..particles.len() {
			if let Some(link) = link_between(particles, a, b, connect_distance, line_thickness_scale)
			{
				out.push(link);
			}
		}
	}
	out
}

fn cell_of(p: &Particle, cell_size: f64) -> (i64, i64) {
	(
		(p.x / cell_size).floor() as i64,
		(p.y / cell_size).floor() as i64,
	)
}

/// Grid-accelerated variant of [`links`] with identical output.
pub fn links_bucketed(
	particles: &[Particle],
	connect_distance: f64,
	line_thickness_scale: f64,
) -> Vec<Link> {
	let mut grid: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
	for (i, p) in particles.iter().enumerate() {
		grid.entry(cell_of(p, connect_distance)).or_default().push(i);
	}

	let mut out = Vec::new();
	for (a, p) in particles.iter().enumerate() {
		let (cx, cy) = cell_of(p, connect_distance);
		for nx in (cx - 1)..=(cx + 1) {
			for ny in (cy - 1)..=(cy + 1) {
				let Some(bucket) = grid.get(&(nx, ny)) else {
					continue;
				};
				for &b in bucket.iter().filter(|&&b| b > a) {
					if let Some(link) =
						link_between(particles, a, b, connect_distance, line_thickness_scale)
					{
						out.push(link);
					}
				}
			}
		}
	}

	out.sort_by_key(|l| (l.a, l.b));
	out
}

/// Pick the cheaper strategy for the given field size.
pub fn links_auto(
	particles: &[Particle],
	connect_distance: f64,
	line_thickness_scale: f64,
) -> Vec<Link> {
	if particles.len() > BUCKET_THRESHOLD {
		links_bucketed(particles, connect_distance, line_thickness_scale)
	} else {
		links(particles, connect_distance, line_thickness_scale)
	}
}
