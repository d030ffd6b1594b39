//! Error types for configuration, image loading and surface setup.

use thiserror::Error;

/// Rejected configuration. Raised before any scene state exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	/// Sampling stride must be at least one pixel.
	#[error("density must be at least 1 pixel, got {0}")]
	InvalidDensity(usize),

	/// Link threshold must be positive and finite.
	#[error("connect_distance must be positive and finite, got {0}")]
	InvalidConnectDistance(f64),

	/// Dot radius must be non-negative and finite.
	#[error("particle_radius must be non-negative and finite, got {0}")]
	InvalidParticleRadius(f64),

	/// Line thickness multiplier must be non-negative and finite.
	#[error("line_thickness_scale must be non-negative and finite, got {0}")]
	InvalidLineThickness(f64),

	/// Repulsion multiplier must be non-negative and finite.
	#[error("sensitivity must be non-negative and finite, got {0}")]
	InvalidSensitivity(f64),
}

/// The source image could not be turned into pixels.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImageError {
	/// The browser failed to load or decode the image.
	#[error("failed to decode image {0}")]
	Decode(String),

	/// The decoded image could not be rasterized to a pixel buffer.
	#[error("failed to read image pixels: {0}")]
	Pixels(String),
}

/// The drawing target is unavailable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
	/// The canvas refused to hand out a 2D context.
	#[error("2d context not available: {0}")]
	MissingContext(String),
}
