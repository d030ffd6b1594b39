//! End-to-end: pixels in, draw calls out, driven by a hand-cranked scheduler.

use image_particles::components::image_particles::{
	Color, FrameLoop, LoopState, ParticleConfig, ParticleScene, Scheduler, Surface, linker,
	sampler,
};

#[derive(Debug, Default)]
struct Counter {
	lines: usize,
	discs: usize,
	clears: usize,
	order: Vec<char>,
}

impl Surface for Counter {
	fn clear(&mut self) {
		self.clears += 1;
		self.order.push('c');
	}

	fn set_blend(&mut self, mode: &str) {
		assert_eq!(mode, "lighter");
	}

	fn stroke_line(&mut self, _from: (f64, f64), _to: (f64, f64), _color: Color, width: f64) {
		assert!(width > 0.0 && width.is_finite());
		self.lines += 1;
		self.order.push('l');
	}

	fn fill_disc(&mut self, center: (f64, f64), _radius: f64, _color: Color) {
		assert!(center.0.is_finite() && center.1.is_finite());
		self.discs += 1;
		self.order.push('d');
	}
}

#[derive(Default)]
struct Ticks {
	requested: u32,
	cancelled: u32,
}

impl Scheduler for Ticks {
	type Handle = u32;

	fn request_frame(&mut self) -> u32 {
		self.requested += 1;
		self.requested
	}

	fn cancel_frame(&mut self, _handle: u32) {
		self.cancelled += 1;
	}
}

/// A dark 3x3 block on a white 20x20 canvas, plus one transparent hole.
fn picture() -> Vec<u8> {
	let (w, h) = (20, 20);
	let mut pixels = vec![255u8; w * h * 4];
	for y in 4..7 {
		for x in 4..7 {
			let at = (x + y * w) * 4;
			pixels[at..at + 4].copy_from_slice(&[40, 80, 120, 255]);
		}
	}
	let hole = (5 + 5 * w) * 4;
	pixels[hole + 3] = 0;
	pixels
}

#[test]
fn samples_only_dark_opaque_grid_points() {
	let samples = sampler::sample_pixels(&picture(), 20, 20, 1);
	assert_eq!(samples.len(), 8);
	assert!(!samples.iter().any(|s| s.x == 5.0 && s.y == 5.0));
	assert!(samples.iter().all(|s| s.color == Color::rgb(40, 80, 120)));
}

#[test]
fn full_frame_cycle_with_pointer_on_a_particle() {
	let config = ParticleConfig {
		density: 1,
		connect_distance: 3.0,
		..Default::default()
	};
	let mut scene = ParticleScene::new(config, 20.0, 20.0).unwrap();
	let mut frames = FrameLoop::new(Ticks::default());
	let mut surface = Counter::default();

	assert!(frames.rebuild(&mut scene, &picture(), 20, 20));
	scene.pointer_move(4.0, 4.0);
	scene.pointer_down();

	for _ in 0..3 {
		assert!(frames.on_frame(&mut scene, &mut surface));
	}
	assert_eq!(surface.clears, 3);
	assert_eq!(surface.discs, 3 * 8);
	assert!(
		scene
			.field
			.particles()
			.iter()
			.all(|p| p.x.is_finite() && p.y.is_finite())
	);

	// Within each frame, every line precedes every dot.
	for frame in surface.order.split(|&c| c == 'c').skip(1) {
		let first_dot = frame.iter().position(|&c| c == 'd').unwrap_or(frame.len());
		assert!(frame[first_dot..].iter().all(|&c| c == 'd'));
	}

	frames.stop();
	let before = (surface.lines, surface.discs, surface.clears);
	for _ in 0..5 {
		assert!(!frames.on_frame(&mut scene, &mut surface));
	}
	assert_eq!((surface.lines, surface.discs, surface.clears), before);
	assert_eq!(frames.state(), LoopState::Stopped);
	assert_eq!(frames.scheduler().cancelled, 1);
}

#[test]
fn particles_settle_after_pointer_leaves() {
	let config = ParticleConfig {
		density: 1,
		sensitivity: 0.01,
		..Default::default()
	};
	let mut scene = ParticleScene::new(config, 20.0, 20.0).unwrap();
	let mut frames = FrameLoop::new(Ticks::default());
	let mut surface = Counter::default();
	frames.rebuild(&mut scene, &picture(), 20, 20);

	scene.pointer_move(5.5, 5.5);
	for _ in 0..3 {
		frames.on_frame(&mut scene, &mut surface);
	}
	scene.pointer_leave();
	for _ in 0..300 {
		frames.on_frame(&mut scene, &mut surface);
	}

	assert!(
		scene
			.field
			.particles()
			.iter()
			.all(|p| p.offset_from_origin() < 0.05)
	);
}

#[test]
fn scene_links_match_reference_scenario() {
	use image_particles::components::image_particles::Particle;

	let particles: Vec<Particle> = [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (30.0, 30.0)]
		.iter()
		.map(|&(x, y)| Particle::new(x, y, Color::rgb(1, 2, 3)))
		.collect();

	let brute = linker::links(&particles, 15.0, 1.0);
	assert_eq!(brute.len(), 3);
	assert_eq!(linker::links_bucketed(&particles, 15.0, 1.0), brute);
	assert_eq!(linker::links_auto(&particles, 15.0, 1.0), brute);
}
