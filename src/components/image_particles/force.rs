//! Pointer-driven repulsion with a spring back to origin.
//!
//! There is no velocity or mass: each tick adds an inverse-distance push away
//! from the pointer and moves a fixed fraction of the way back home.

use super::field::Particle;

/// Off-surface pointer position used before any movement and after leave.
pub const POINTER_SENTINEL: f64 = -1000.0;

/// Fraction of the remaining distance to origin recovered each tick.
pub const RELAXATION: f64 = 0.05;

/// Lower bound on pointer distance so the push saturates instead of
/// diverging when the pointer sits exactly on a particle.
pub const MIN_DISTANCE: f64 = 1e-3;

const PUSH_RELEASED: f64 = 100.0;
const PUSH_PRESSED: f64 = 200.0;

/// Normalized pointer position and button state.
///
/// Written by input callbacks and read once per tick. Under a single-threaded
/// event loop no synchronization is needed; a multithreaded host would have to
/// snapshot this behind a lock or atomics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
	pub x: f64,
	pub y: f64,
	pub pressed: bool,
}

impl Default for PointerState {
	fn default() -> Self {
		Self {
			x: POINTER_SENTINEL,
			y: POINTER_SENTINEL,
			pressed: false,
		}
	}
}

impl PointerState {
	pub fn move_to(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
	}

	/// Park the pointer off-surface and release the button.
	pub fn leave(&mut self) {
		*self = Self::default();
	}

	fn push_constant(&self) -> f64 {
		if self.pressed {
			PUSH_PRESSED
		} else {
			PUSH_RELEASED
		}
	}
}

/// Position `particle` should move to after one tick.
pub fn displaced(particle: &Particle, pointer: &PointerState, sensitivity: f64) -> (f64, f64) {
	let (dx, dy) = (particle.x - pointer.x, particle.y - pointer.y);
	let theta = dy.atan2(dx);
	let distance = dx.hypot(dy).max(MIN_DISTANCE);
	let push = sensitivity * pointer.push_constant() / distance;

	(
		particle.x + theta.cos() * push + (particle.origin_x() - particle.x) * RELAXATION,
		particle.y + theta.sin() * push + (particle.origin_y() - particle.y) * RELAXATION,
	)
}

/// Apply one tick of [`displaced`] in place.
pub fn apply(particle: &mut Particle, pointer: &PointerState, sensitivity: f64) {
	let (x, y) = displaced(particle, pointer, sensitivity);
	particle.x = x;
	particle.y = y;
}
