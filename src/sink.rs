//! Audio outputs a fader drives
//!
//! The fader pushes every value it computes into a [`VolumeSink`]. Hosts
//! implement it for their own playback handle, pass a closure, or hand the
//! audio thread a [`SharedVolume`].

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Receives the fader's output volume, always within `[0, 1]`
pub trait VolumeSink {
    fn set_volume(&mut self, volume: f32);
}

/// Discards every volume update
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl VolumeSink for NullSink {
    fn set_volume(&mut self, _volume: f32) {}
}

impl<F> VolumeSink for F
where
    F: FnMut(f32),
{
    fn set_volume(&mut self, volume: f32) {
        self(volume)
    }
}

/// Lock-free volume cell shared between the update loop and an audio callback
///
/// Cloning yields another handle to the same value.
#[derive(Debug, Clone)]
pub struct SharedVolume {
    bits: Arc<AtomicU32>,
}

impl SharedVolume {
    pub fn new(volume: f32) -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(volume.to_bits())),
        }
    }

    #[must_use]
    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }

    #[inline]
    pub fn set(&self, volume: f32) {
        self.bits.store(volume.to_bits(), Ordering::Release);
    }
}

impl Default for SharedVolume {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl VolumeSink for SharedVolume {
    fn set_volume(&mut self, volume: f32) {
        self.set(volume);
    }
}
