//! Scene state: configuration, surface size, particles and pointer.
//!
//! One scene replaces what would otherwise be a global animation object. The
//! frame loop and the canvas component both hold it by reference.

use log::debug;

use super::config::ParticleConfig;
use super::error::ConfigError;
use super::field::ParticleField;
use super::force::PointerState;
use super::linker;
use super::render::{self, Surface};
use super::sampler;

/// Everything one animated image needs between frames.
#[derive(Clone, Debug)]
pub struct ParticleScene {
	config: ParticleConfig,
	pub field: ParticleField,
	pub pointer: PointerState,
	pub width: f64,
	pub height: f64,
}

impl ParticleScene {
	/// Create an empty scene. The config is validated up front.
	pub fn new(config: ParticleConfig, width: f64, height: f64) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			config,
			field: ParticleField::new(),
			pointer: PointerState::default(),
			width,
			height,
		})
	}

	pub fn config(&self) -> &ParticleConfig {
		&self.config
	}

	pub fn is_empty(&self) -> bool {
		self.field.is_empty()
	}

	/// Resample the field from a `width x height` RGBA buffer drawn at the
	/// current surface size.
	pub fn rebuild(&mut self, pixels: &[u8], width: usize, height: usize) {
		self.width = width as f64;
		self.height = height as f64;
		let samples = sampler::sample_pixels(pixels, width, height, self.config.density);
		self.field.build(&samples);
		debug!(
			"image-particles: sampled {} particles from {}x{} at density {}",
			self.field.len(),
			width,
			height,
			self.config.density
		);
	}

	/// Drop all particles, e.g. after the image failed to load.
	pub fn clear(&mut self) {
		self.field.clear();
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		self.pointer.move_to(x, y);
	}

	pub fn pointer_down(&mut self) {
		self.pointer.pressed = true;
	}

	pub fn pointer_up(&mut self) {
		self.pointer.pressed = false;
	}

	pub fn pointer_leave(&mut self) {
		self.pointer.leave();
	}

	/// Run one frame: clear, move particles, draw links, draw dots.
	pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		surface.clear();
		self.field.tick(&self.pointer, self.config.sensitivity);

		let particles = self.field.particles();
		let links = linker::links_auto(
			particles,
			self.config.connect_distance,
			self.config.line_thickness_scale,
		);
		render::paint(surface, particles, &links, &self.config);
	}
}

#[cfg(test)]
mod tests {
	use super::super::render::testing::{DrawCall, RecordingSurface};
	use super::*;

	fn checker(w: usize, h: usize) -> Vec<u8> {
		let mut pixels = Vec::with_capacity(w * h * 4);
		for y in 0..h {
			for x in 0..w {
				if (x + y) % 2 == 0 {
					pixels.extend_from_slice(&[30, 60, 90, 255]);
				} else {
					pixels.extend_from_slice(&[255, 255, 255, 255]);
				}
			}
		}
		pixels
	}

	#[test]
	fn rejects_invalid_config() {
		let config = ParticleConfig {
			connect_distance: 0.0,
			..Default::default()
		};
		assert_eq!(
			ParticleScene::new(config, 100.0, 100.0).unwrap_err(),
			ConfigError::InvalidConnectDistance(0.0)
		);
	}

	#[test]
	fn rebuild_samples_and_records_size() {
		let config = ParticleConfig {
			density: 2,
			..Default::default()
		};
		let mut scene = ParticleScene::new(config, 0.0, 0.0).unwrap();
		scene.rebuild(&checker(6, 4), 6, 4);

		// Even stride on a checkerboard only lands on dark cells.
		assert_eq!(scene.field.len(), 6);
		assert_eq!((scene.width, scene.height), (6.0, 4.0));
	}

	#[test]
	fn larger_density_never_adds_particles() {
		let pixels = checker(40, 30);
		let mut last = usize::MAX;
		for density in [1, 2, 4, 8] {
			let config = ParticleConfig {
				density,
				..Default::default()
			};
			let mut scene = ParticleScene::new(config, 40.0, 30.0).unwrap();
			scene.rebuild(&pixels, 40, 30);
			assert!(scene.field.len() <= last);
			last = scene.field.len();
		}
	}

	#[test]
	fn pointer_events_update_state() {
		let mut scene = ParticleScene::new(ParticleConfig::default(), 10.0, 10.0).unwrap();
		scene.pointer_move(4.0, 5.0);
		scene.pointer_down();
		assert_eq!(
			scene.pointer,
			PointerState {
				x: 4.0,
				y: 5.0,
				pressed: true
			}
		);
		scene.pointer_up();
		assert!(!scene.pointer.pressed);
		scene.pointer_down();
		scene.pointer_leave();
		assert_eq!(scene.pointer, PointerState::default());
	}

	#[test]
	fn step_clears_first_and_draws_every_particle() {
		let config = ParticleConfig {
			density: 2,
			..Default::default()
		};
		let mut scene = ParticleScene::new(config, 0.0, 0.0).unwrap();
		scene.rebuild(&checker(6, 4), 6, 4);
		let mut surface = RecordingSurface::default();

		scene.step(&mut surface);

		assert_eq!(surface.calls[0], DrawCall::Clear);
		let discs = surface
			.calls
			.iter()
			.filter(|c| matches!(c, DrawCall::Disc { .. }))
			.count();
		assert_eq!(discs, scene.field.len());
	}
}
