//! Audible cues for the interactive shell.
//!
//! The terminal bell is the only output device used. The manager is created
//! once per process and silently does nothing when cues are disabled or
//! stderr is not a terminal.

use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

static SOUND: OnceLock<SoundManager> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Success,
    Error,
    Click,
}

impl Cue {
    fn bells(&self) -> usize {
        match self {
            Self::Click => 1,
            Self::Error => 2,
            Self::Success => 3,
        }
    }
}

#[derive(Debug)]
pub struct SoundManager {
    available: bool,
}

impl SoundManager {
    fn detect(enabled: bool) -> Self {
        let available = enabled && io::stderr().is_terminal();
        debug!(enabled, available, "sound cues initialised");
        Self { available }
    }

    /// Sets up the process-wide manager. Only the first call has an effect.
    pub fn init(enabled: bool) -> &'static SoundManager {
        SOUND.get_or_init(|| Self::detect(enabled))
    }

    /// The process-wide manager, disabled if nobody called [`SoundManager::init`].
    pub fn global() -> &'static SoundManager {
        SOUND.get_or_init(|| Self::detect(false))
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub async fn play(&self, cue: Cue) {
        if !self.available {
            return;
        }

        let _ = ring(cue, &mut io::stderr()).await;
    }
}

const BELL_GAP: Duration = Duration::from_millis(100);

async fn ring<W: Write>(cue: Cue, out: &mut W) -> io::Result<()> {
    for i in 0..cue.bells() {
        if i > 0 {
            tokio::time::sleep(BELL_GAP).await;
        }
        out.write_all(b"\x07")?;
        out.flush()?;
    }
    Ok(())
}

pub async fn play(cue: Cue) {
    SoundManager::global().play(cue).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_manager_is_a_noop() {
        let manager = SoundManager::detect(false);
        assert!(!manager.is_available());
        manager.play(Cue::Success).await;
        manager.play(Cue::Error).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_bell_gaps_yield_to_the_runtime() {
        let mut out = Vec::new();
        let started = std::time::Instant::now();

        ring(Cue::Success, &mut out).await.unwrap();

        assert_eq!(out, b"\x07\x07\x07");
        // Paused time auto-advances only across async sleeps; a blocking sleep
        // would cost real wall-clock time here.
        assert!(started.elapsed() < BELL_GAP);
    }

    #[test]
    fn test_cue_lengths() {
        assert!(Cue::Success.bells() > Cue::Error.bells());
        assert!(Cue::Error.bells() > Cue::Click.bells());
    }
}
