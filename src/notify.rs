use std::thread;
use std::time::Duration;

use anyhow::Result;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use tracing::warn;

const TONE_FREQ_HZ: f32 = 440.0;
const TONE_DURATION_SECS: u64 = 2;

/// Audible-alert capability. Kept behind a trait so environments without
/// sound output (servers, CI) can plug in a no-op.
pub trait Notify {
    fn alert(&self);
}

/// Plays a short tone through the default audio output. Best effort: if no
/// output device exists the alert degrades to a logged warning.
pub struct BeepNotifier;

impl Notify for BeepNotifier {
    fn alert(&self) {
        // rodio's output stream is not Send, so the tone plays on its own
        // short-lived thread instead of blocking the sweep.
        thread::spawn(|| {
            if let Err(e) = play_tone() {
                warn!("audible alert unavailable: {e:?}");
            }
        });
    }
}

fn play_tone() -> Result<()> {
    let (_stream, handle) = OutputStream::try_default()?;
    let sink = Sink::try_new(&handle)?;

    let tone = SineWave::new(TONE_FREQ_HZ)
        .take_duration(Duration::from_secs(TONE_DURATION_SECS))
        .amplify(0.25);
    sink.append(tone);
    sink.sleep_until_end();

    Ok(())
}

/// Silent notifier for platforms lacking sound output.
pub struct NoopNotifier;

impl Notify for NoopNotifier {
    fn alert(&self) {}
}
