//! Particle colors sampled from the source image.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Whether every channel is brighter than `threshold`.
	pub fn is_near_white(self, threshold: u8) -> bool {
		self.r > threshold && self.g > threshold && self.b > threshold
	}

	/// CSS functional notation, e.g. `rgba(12,34,56,1)`.
	pub fn to_css(self) -> String {
		format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
	}
}
