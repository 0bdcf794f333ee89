//! Frame clock abstraction.
//!
//! All timestamps are milliseconds on the scheduler's own monotonic
//! timeline, mirroring the browser's frame callback timestamps.

use std::time::{Duration, Instant};

/// Source of frame timestamps for the animation driver.
pub trait Scheduler {
    fn now(&self) -> f64;

    /// Wait for the next display frame and return its timestamp.
    fn next_frame(&mut self) -> f64;
}

/// Deterministic scheduler advancing a fixed interval per frame.
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    now: f64,
    frame_interval: f64,
}

/// Interval used when a manual scheduler is given one that cannot advance time.
const FALLBACK_FRAME_INTERVAL_MS: f64 = 16.0;

impl ManualScheduler {
    /// Step `frame_interval_ms` per frame.
    ///
    /// Zero, negative and non-finite intervals would stall the clock; they are
    /// replaced by a 16ms frame.
    pub fn new(frame_interval_ms: f64) -> Self {
        let frame_interval = if frame_interval_ms.is_finite() && frame_interval_ms > 0.0 {
            frame_interval_ms
        } else {
            tracing::warn!(
                frame_interval_ms,
                "Frame interval must be positive, using {FALLBACK_FRAME_INTERVAL_MS}ms"
            );
            FALLBACK_FRAME_INTERVAL_MS
        };
        Self {
            now: 0.0,
            frame_interval,
        }
    }

    pub fn frame_interval(&self) -> f64 {
        self.frame_interval
    }

    /// Move the clock without producing a frame.
    pub fn advance(&mut self, ms: f64) {
        self.now += ms;
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new(FALLBACK_FRAME_INTERVAL_MS)
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> f64 {
        self.now
    }

    fn next_frame(&mut self) -> f64 {
        self.now += self.frame_interval;
        self.now
    }
}

/// Wall-clock scheduler sleeping until the next frame boundary.
#[derive(Debug)]
pub struct RealtimeScheduler {
    origin: Instant,
    frame_interval: Duration,
    last_frame: Option<Instant>,
}

impl RealtimeScheduler {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            origin: Instant::now(),
            frame_interval,
            last_frame: None,
        }
    }

    /// Roughly 60 frames per second.
    pub fn sixty_hz() -> Self {
        Self::new(Duration::from_micros(16_667))
    }

    fn millis_since_origin(&self, at: Instant) -> f64 {
        at.duration_since(self.origin).as_secs_f64() * 1_000.0
    }
}

impl Scheduler for RealtimeScheduler {
    fn now(&self) -> f64 {
        self.millis_since_origin(Instant::now())
    }

    fn next_frame(&mut self) -> f64 {
        if let Some(last) = self.last_frame {
            let deadline = last + self.frame_interval;
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
        }
        let frame = Instant::now();
        self.last_frame = Some(frame);
        self.millis_since_origin(frame)
    }
}
