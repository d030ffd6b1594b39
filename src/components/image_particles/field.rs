//! The live particle set sampled from an image.

use super::color::Color;
use super::force::{self, PointerState};
use super::sampler::Sample;

/// A single image sample that can be pushed around and springs back.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	origin_x: f64,
	origin_y: f64,
	pub color: Color,
}

impl Particle {
	pub fn new(x: f64, y: f64, color: Color) -> Self {
		Self {
			x,
			y,
			origin_x: x,
			origin_y: y,
			color,
		}
	}

	pub fn origin_x(&self) -> f64 {
		self.origin_x
	}

	pub fn origin_y(&self) -> f64 {
		self.origin_y
	}

	/// Distance from the current position to the resting position.
	pub fn offset_from_origin(&self) -> f64 {
		(self.x - self.origin_x).hypot(self.y - self.origin_y)
	}
}

impl From<&Sample> for Particle {
	fn from(sample: &Sample) -> Self {
		Particle::new(sample.x, sample.y, sample.color)
	}
}

/// Owns every particle of the current image. The count only changes on
/// [`ParticleField::build`].
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
}

impl ParticleField {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the whole set; each particle rests where it was sampled.
	pub fn build(&mut self, samples: &[Sample]) {
		self.particles = samples.iter().map(Particle::from).collect();
	}

	/// Advance every particle by one force step.
	pub fn tick(&mut self, pointer: &PointerState, sensitivity: f64) {
		for p in &mut self.particles {
			force::apply(p, pointer, sensitivity);
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn clear(&mut self) {
		self.particles.clear();
	}
}
