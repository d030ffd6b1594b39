//! Start/stop state machine around a cancellable next-frame request.
//!
//! Each delivered frame first requests the following one, then runs the
//! scene step. Stopping cancels the outstanding request, and any callback that
//! still arrives while stopped is ignored, so nothing is drawn after `stop`.

use log::{debug, info};

use super::render::Surface;
use super::scene::ParticleScene;

/// Host primitive that calls back into [`FrameLoop::on_frame`] once per
/// display refresh.
pub trait Scheduler {
	/// Identifies an outstanding request so it can be cancelled.
	type Handle;

	/// Ask for one callback on the next frame.
	fn request_frame(&mut self) -> Self::Handle;

	/// Withdraw a request made with [`Scheduler::request_frame`].
	fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Whether frames are currently being produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	Stopped,
	Running,
}

/// Drives a [`ParticleScene`] one frame at a time.
pub struct FrameLoop<S: Scheduler> {
	scheduler: S,
	state: LoopState,
	pending: Option<S::Handle>,
	frames: u64,
}

impl<S: Scheduler> FrameLoop<S> {
	pub fn new(scheduler: S) -> Self {
		Self {
			scheduler,
			state: LoopState::Stopped,
			pending: None,
			frames: 0,
		}
	}

	pub fn state(&self) -> LoopState {
		self.state
	}

	pub fn is_running(&self) -> bool {
		self.state == LoopState::Running
	}

	/// Number of frames drawn since creation.
	pub fn frames(&self) -> u64 {
		self.frames
	}

	pub fn scheduler(&self) -> &S {
		&self.scheduler
	}

	/// Begin animating. Returns `false` and stays stopped when the scene has
	/// no particles to animate. Starting twice is a no-op.
	pub fn start(&mut self, scene: &ParticleScene) -> bool {
		if self.is_running() {
			return true;
		}
		if scene.is_empty() {
			debug!("image-particles: not starting, scene has no particles");
			return false;
		}
		self.state = LoopState::Running;
		self.pending = Some(self.scheduler.request_frame());
		info!(
			"image-particles: animating {} particles",
			scene.field.len()
		);
		true
	}

	/// Halt and cancel the outstanding frame request.
	pub fn stop(&mut self) {
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
		if self.is_running() {
			debug!("image-particles: stopped after {} frames", self.frames);
		}
		self.state = LoopState::Stopped;
	}

	/// Handle a delivered frame. Returns whether anything was drawn.
	pub fn on_frame<D: Surface + ?Sized>(
		&mut self,
		scene: &mut ParticleScene,
		surface: &mut D,
	) -> bool {
		// The handle being delivered is spent.
		self.pending = None;
		if !self.is_running() {
			return false;
		}
		self.pending = Some(self.scheduler.request_frame());
		scene.step(surface);
		self.frames += 1;
		true
	}

	/// Stop, resample from freshly rasterized pixels, then start again.
	///
	/// Returns whether the loop is running afterwards.
	pub fn rebuild(
		&mut self,
		scene: &mut ParticleScene,
		pixels: &[u8],
		width: usize,
		height: usize,
	) -> bool {
		self.stop();
		scene.rebuild(pixels, width, height);
		self.start(scene)
	}
}
