// src/view/video.rs — Condition-matched background scene.
//
// The scene is addressed by its video asset path. Swapping fades the scene
// out, waits for the fade, then loads the new source and fades back in.

use std::time::{Duration, Instant};

use super::timer::TimerSlot;

/// Coarse weather categories that have a background scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Condition {
    #[default]
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
}

impl Condition {
    pub const ALL: [Condition; 6] = [
        Condition::Clear,
        Condition::Clouds,
        Condition::Rain,
        Condition::Thunderstorm,
        Condition::Snow,
        Condition::Mist,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Condition::Clear => "clear",
            Condition::Clouds => "clouds",
            Condition::Rain => "rain",
            Condition::Thunderstorm => "thunderstorm",
            Condition::Snow => "snow",
            Condition::Mist => "mist",
        }
    }

    pub fn video_file(&self) -> &'static str {
        match self {
            Condition::Clear => "clear.mp4",
            Condition::Clouds => "clouds.mp4",
            Condition::Rain => "rain.mp4",
            Condition::Thunderstorm => "thunderstorm.mp4",
            Condition::Snow => "snow.mp4",
            Condition::Mist => "mist.mp4",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }

    /// Map a gateway condition string to a scene; anything unknown is clear.
    pub fn resolve(key: &str) -> Self {
        Self::parse(key).unwrap_or_default()
    }
}

/// `<video_base>/<file>` for a condition.
pub fn video_source(video_base: &str, condition: Condition) -> String {
    format!(
        "{}/{}",
        video_base.trim_end_matches('/'),
        condition.video_file()
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Swap {
    condition: Condition,
    source: String,
}

#[derive(Debug)]
pub struct BackgroundVideo {
    video_base: String,
    fade: Duration,
    condition: Condition,
    source: String,
    /// Hidden until the dashboard is revealed.
    revealed: bool,
    faded_out: bool,
    playing: bool,
    loads: u32,
    swap: TimerSlot<Swap>,
}

impl BackgroundVideo {
    pub fn new(video_base: &str, initial: Condition, fade: Duration) -> Self {
        Self {
            video_base: video_base.to_string(),
            fade,
            condition: initial,
            source: video_source(video_base, initial),
            revealed: false,
            faded_out: false,
            playing: true,
            loads: 0,
            swap: TimerSlot::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Number of times a new source was loaded.
    pub fn loads(&self) -> u32 {
        self.loads
    }

    pub fn is_swapping(&self) -> bool {
        self.swap.is_pending()
    }

    pub fn opacity(&self) -> f32 {
        if self.revealed && !self.faded_out {
            1.0
        } else {
            0.0
        }
    }

    /// Show the scene at full opacity.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Switch to the scene for `condition`. Does nothing when that scene is
    /// already showing or already about to show. Returns whether a fade/swap
    /// cycle was started.
    pub fn request(&mut self, condition: &str, now: Instant) -> bool {
        let condition = Condition::resolve(condition);
        let source = video_source(&self.video_base, condition);

        if self.swap.pending().is_some_and(|s| s.source == source) {
            return false;
        }
        if source == self.source {
            if self.swap.cancel().is_some() {
                tracing::debug!(%source, "cancelled pending swap; current scene requested");
                self.faded_out = false;
            }
            return false;
        }

        tracing::debug!(from = %self.source, to = %source, "swapping background scene");
        self.faded_out = true;
        self.swap.schedule(now, self.fade, Swap { condition, source });
        true
    }

    /// Advance the swap timer. Returns true when a new source was loaded.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(swap) = self.swap.poll(now) else {
            return false;
        };
        self.condition = swap.condition;
        self.source = swap.source;
        self.loads += 1;
        self.playing = true;
        self.faded_out = false;
        true
    }
}
