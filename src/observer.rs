//! Completion notifications
//!
//! Both notifications fire synchronously, inside the call that completed the
//! fade ([`advance`](crate::VolumeFader::advance) or an instant
//! [`start_fade`](crate::VolumeFader::start_fade)).

use serde::{Deserialize, Serialize};

/// Listener for finished fades. Both methods default to doing nothing.
pub trait FadeObserver {
    fn finished_fading_in(&mut self) {}

    fn finished_fading_out(&mut self) {}
}

impl FadeObserver for () {}

impl<O: FadeObserver + ?Sized> FadeObserver for Box<O> {
    fn finished_fading_in(&mut self) {
        (**self).finished_fading_in()
    }

    fn finished_fading_out(&mut self) {
        (**self).finished_fading_out()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FadeEvent {
    FinishedFadingIn,
    FinishedFadingOut,
}

/// Records notifications in order
impl FadeObserver for Vec<FadeEvent> {
    fn finished_fading_in(&mut self) {
        self.push(FadeEvent::FinishedFadingIn);
    }

    fn finished_fading_out(&mut self) {
        self.push(FadeEvent::FinishedFadingOut);
    }
}

/// Adapts a closure that takes a [`FadeEvent`]
pub struct FnObserver<F>(pub F);

impl<F> FadeObserver for FnObserver<F>
where
    F: FnMut(FadeEvent),
{
    fn finished_fading_in(&mut self) {
        (self.0)(FadeEvent::FinishedFadingIn)
    }

    fn finished_fading_out(&mut self) {
        (self.0)(FadeEvent::FinishedFadingOut)
    }
}
