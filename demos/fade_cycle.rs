//! Drives a fader with a fixed frame step and prints the volume per frame
//!
//! Run with `RUST_LOG=volume_fader=debug` to see state changes.

use volume_fader::prelude::*;

const FRAME: f32 = 1.0 / 30.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🔊 Volume Fader - fade cycle\n");

    basic_fade();
    reversal();
    curves();
}

fn basic_fade() {
    println!("1️⃣  Fade in, then out\n");

    let settings = FaderSettings::new()
        .with_time_to_fade(0.25)
        .with_start_state(FadeState::FadedOut);
    let observer = FnObserver(|event: FadeEvent| println!("   -> {event:?}"));
    let mut fader = match VolumeFader::new(settings, NullSink, observer) {
        Ok(fader) => fader,
        Err(error) => {
            eprintln!("{error}");
            return;
        }
    };

    fader.fade_in();
    run_until_settled(&mut fader);
    fader.fade_out();
    run_until_settled(&mut fader);
    println!();
}

fn reversal() {
    println!("2️⃣  Reversal halfway through\n");

    let settings = FaderSettings::new().with_time_to_fade(0.3);
    let Ok(mut fader) = VolumeFader::with_sink(settings, NullSink) else {
        return;
    };

    fader.fade_out();
    for _ in 0..4 {
        fader.advance(FRAME);
    }
    println!("   reversing at {:.3} ({})", fader.current_value(), fader.state());
    fader.fade_in();
    run_until_settled(&mut fader);
    println!();
}

fn curves() {
    println!("3️⃣  Curves at the halfway point\n");

    for curve in FadeCurve::NAMED {
        let settings = FaderSettings::new()
            .with_time_to_fade(1.0)
            .with_curve(curve)
            .with_start_state(FadeState::FadedOut);
        let Ok(mut fader) = VolumeFader::with_sink(settings, NullSink) else {
            continue;
        };
        fader.fade_in();
        fader.advance(0.5);
        println!("   {:<14} {:.3}", curve.name(), fader.current_value());
    }
}

fn run_until_settled<S: VolumeSink, O: FadeObserver>(fader: &mut VolumeFader<S, O>) {
    while fader.is_fading() {
        fader.advance(FRAME);
        println!("   {:<10} {:.3}", fader.state().to_string(), fader.current_value());
    }
}
