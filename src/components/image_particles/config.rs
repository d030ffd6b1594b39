//! Tunable options for a particle scene.
//!
//! A configuration is fixed for the lifetime of a [`ParticleScene`]. Changing
//! any option means building a new scene, which resamples the image.
//!
//! [`ParticleScene`]: super::scene::ParticleScene

use serde::Deserialize;

use super::error::ConfigError;

/// Options controlling sampling, linking, drawing and repulsion.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
	/// Sampling stride in pixels. Larger values give fewer particles, which
	/// is the lever for keeping the O(n²) link pass interactive.
	pub density: usize,
	/// Maximum distance at which two particles are linked.
	#[serde(alias = "connectDistance")]
	pub connect_distance: f64,
	/// Radius of each particle dot.
	#[serde(alias = "particleRadius")]
	pub particle_radius: f64,
	/// Multiplier applied to link weights to get the stroke width.
	#[serde(alias = "lineThicknessScale")]
	pub line_thickness_scale: f64,
	/// Repulsion multiplier.
	pub sensitivity: f64,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			density: 14,
			connect_distance: 28.0,
			particle_radius: 2.0,
			line_thickness_scale: 1.0,
			sensitivity: 2.0,
		}
	}
}

impl ParticleConfig {
	/// Check every option, returning the first violation.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.density == 0 {
			return Err(ConfigError::InvalidDensity(self.density));
		}
		if !(self.connect_distance.is_finite() && self.connect_distance > 0.0) {
			return Err(ConfigError::InvalidConnectDistance(self.connect_distance));
		}
		if !non_negative(self.particle_radius) {
			return Err(ConfigError::InvalidParticleRadius(self.particle_radius));
		}
		if !non_negative(self.line_thickness_scale) {
			return Err(ConfigError::InvalidLineThickness(
				self.line_thickness_scale,
			));
		}
		if !non_negative(self.sensitivity) {
			return Err(ConfigError::InvalidSensitivity(self.sensitivity));
		}
		Ok(())
	}

	/// Parse options from JSON, filling missing fields with defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

fn non_negative(v: f64) -> bool {
	v.is_finite() && v >= 0.0
}
