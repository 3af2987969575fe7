//! Frame-stepped loop driver.
//!
//! The browser invokes the animation-frame callback once per display
//! refresh with a timestamp but no elapsed time. The driver retains the
//! previous timestamp and turns the callback stream into a stream of
//! frame deltas for [`Game::tick`](crate::game::Game::tick). One driver
//! belongs to one mounted view; the component keeps it in a single
//! `Rc<RefCell<_>>` cell shared with the scheduled callback.

/// Converts host frame timestamps into tick deltas.
///
/// Starts RUNNING and stops permanently via [`FrameLoop::stop`]; there is
/// no way back to RUNNING on the same instance. Restarting a run remounts
/// the view, which builds a fresh driver.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    /// Timestamp of the last rendered frame, in monotonic milliseconds.
    last_rendered_at: f64,
    running: bool,
}

impl FrameLoop {
    /// Starts the loop. The first frame's delta is measured against `now0`.
    pub fn start(now0: f64) -> Self {
        Self {
            last_rendered_at: now0,
            running: true,
        }
    }

    /// Advances the clock for a frame fired at `now` and returns the
    /// elapsed milliseconds since the previous frame.
    ///
    /// Returns `None` once the loop has been stopped: a callback still
    /// queued at teardown must not tick, render, or reschedule. The delta
    /// is 0 when the host fires twice on the same timestamp, and carries
    /// no upper clamp: a backgrounded tab yields one large delta on
    /// resume.
    pub fn on_frame(&mut self, now: f64) -> Option<f64> {
        if !self.running {
            return None;
        }
        let delta = now - self.last_rendered_at;
        self.last_rendered_at = now;
        Some(delta)
    }

    /// Stops the loop. Cancellation is cooperative: it takes effect the
    /// next time a callback checks in, and a render already in flight
    /// completes.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_telescope_to_total_elapsed() {
        let stamps = [1000.0, 1016.4, 1033.1, 1050.0, 1083.6, 1100.2];
        let mut fl = FrameLoop::start(stamps[0]);
        let total: f64 = stamps[1..].iter().map(|&t| fl.on_frame(t).unwrap()).sum();
        let elapsed = stamps[stamps.len() - 1] - stamps[0];
        assert!((total - elapsed).abs() < 1e-9);
    }

    #[test]
    fn sixteen_then_seventeen_ms_frames() {
        let mut fl = FrameLoop::start(1000.0);
        assert_eq!(fl.on_frame(1016.0), Some(16.0));
        assert_eq!(fl.on_frame(1033.0), Some(17.0));
    }

    #[test]
    fn zero_delta_frame_is_reported_as_zero() {
        let mut fl = FrameLoop::start(250.0);
        assert_eq!(fl.on_frame(250.0), Some(0.0));
    }

    #[test]
    fn monotonic_timestamps_never_yield_negative_deltas() {
        let mut fl = FrameLoop::start(0.0);
        let mut now = 0.0;
        for i in 0..100 {
            now += (i % 7) as f64 * 1.3;
            assert!(fl.on_frame(now).unwrap() >= 0.0);
        }
    }

    #[test]
    fn stopped_loop_ignores_queued_frames() {
        let mut fl = FrameLoop::start(0.0);
        assert!(fl.on_frame(16.0).is_some());
        fl.stop();
        assert!(!fl.is_running());
        assert_eq!(fl.on_frame(32.0), None);
        assert_eq!(fl.on_frame(48.0), None);
    }

    #[test]
    fn stop_before_first_frame_prevents_any_tick() {
        let mut fl = FrameLoop::start(5.0);
        fl.stop();
        assert_eq!(fl.on_frame(21.0), None);
    }

    #[test]
    fn chain_ends_when_stop_lands_between_schedule_and_execution() {
        // Mimic the rAF wiring: each Some(_) ticks and schedules the next
        // frame; a None ends the chain without either.
        let mut fl = FrameLoop::start(0.0);
        let mut ticks = 0;
        let mut scheduled = true;
        for (i, now) in [16.0, 33.0, 50.0].into_iter().enumerate() {
            if !scheduled {
                break;
            }
            scheduled = false;
            if i == 1 {
                // Frame 2 is already queued when the view tears down.
                fl.stop();
            }
            if fl.on_frame(now).is_some() {
                ticks += 1;
                scheduled = true;
            }
        }
        assert_eq!(ticks, 1);
    }
}
