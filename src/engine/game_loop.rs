/// Fixed-timestep frame clock
///
/// Wall-clock time is accumulated each frame and paid out in whole
/// `FIXED_TIMESTEP` ticks, so gameplay advances at the same rate no matter
/// how fast frames arrive.
use std::time::{Duration, Instant};

/// Gameplay tick length in seconds (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667);

/// Upper bound on ticks per frame so a long stall doesn't snowball
pub const MAX_STEPS_PER_FRAME: u32 = 5;

#[derive(Debug)]
pub struct FrameClock {
    accumulator: Duration,
    last_frame: Instant,
    paused: bool,
    frame_count: u64,
    tick_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame: Instant::now(),
            paused: false,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Begin a new frame using the wall clock; returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed)
    }

    /// Feed `elapsed` frame time into the clock; returns the number of ticks to run
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && ticks < MAX_STEPS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            ticks += 1;
        }

        // Drop whatever the step cap left behind
        if ticks == MAX_STEPS_PER_FRAME {
            self.accumulator = self.accumulator.min(FIXED_TIMESTEP_DURATION);
        }

        self.tick_count += ticks as u64;
        ticks
    }

    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Gameplay time elapsed in seconds
    pub fn game_time(&self) -> f32 {
        self.tick_count as f32 * FIXED_TIMESTEP
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.accumulator = Duration::ZERO;
            self.last_frame = Instant::now();
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
