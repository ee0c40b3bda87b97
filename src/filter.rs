//! Single-pole IIR low-pass filter applied to every filtered acceleration read.
//!
//! `y[n] = alpha * x[n] + (1 - alpha) * y[n-1]`, independently per axis, starting
//! from zero.

use micromath::vector::Vector3d;

/// Smoothing coefficient used by the driver.
pub const ALPHA: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPass {
  state: Vector3d<f32>,
  alpha: f32,
}

impl Default for LowPass {
  fn default() -> Self {
    Self::new()
  }
}

impl LowPass {
  pub const fn new() -> Self {
    LowPass { state: Vector3d { x: 0., y: 0., z: 0. }, alpha: ALPHA }
  }

  /// Fold `sample` into the running state and return the new output.
  pub fn update(&mut self, sample: Vector3d<f32>) -> Vector3d<f32> {
    let keep = 1. - self.alpha;
    self.state = Vector3d {
      x: self.alpha * sample.x + keep * self.state.x,
      y: self.alpha * sample.y + keep * self.state.y,
      z: self.alpha * sample.z + keep * self.state.z,
    };
    self.state
  }

  pub fn reset(&mut self) {
    self.state = Vector3d { x: 0., y: 0., z: 0. };
  }

  /// Last output, without feeding a new sample.
  pub fn value(&self) -> Vector3d<f32> {
    self.state
  }

  pub fn alpha(&self) -> f32 {
    self.alpha
  }
}
