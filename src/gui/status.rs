//! gui/status.rs
//! Status symbol animation (the check mark in the drop area's corner).
//!
//! Timeline after `start(t0)`:
//! - t0: shown, frames start, opacity fades in (InQuad, 0 -> max)
//! - t0 + movie length: frames done, opacity fades out (OutQuad, max -> 0)
//! - + fade length: hidden
//!
//! Time is always passed in, so the whole thing is testable without a clock.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    Playing { since: Instant },
    FadingOut { since: Instant },
}

#[derive(Debug, Clone)]
pub(crate) struct StatusSymbol {
    phase: Phase,
    max_opacity: f32,
    fade: Duration,
    frame_delays: Vec<Duration>,

    // Sampled on the last `advance`, read by the view.
    opacity: f32,
    frame: usize,
}

pub(crate) fn ease_in_quad(t: f32) -> f32 {
    t * t
}

pub(crate) fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

impl StatusSymbol {
    pub(crate) fn new(max_opacity: f32, fade: Duration, frame_delays: Vec<Duration>) -> Self {
        Self {
            phase: Phase::Hidden,
            max_opacity,
            fade,
            frame_delays,
            opacity: 0.0,
            frame: 0,
        }
    }

    /// (Re)start from the beginning, whatever was playing.
    pub(crate) fn start(&mut self, now: Instant) {
        self.phase = Phase::Playing { since: now };
        self.opacity = 0.0;
        self.frame = 0;
    }

    pub(crate) fn advance(&mut self, now: Instant) {
        match self.phase {
            Phase::Hidden => {}

            Phase::Playing { since } => {
                let elapsed = now.saturating_duration_since(since);
                let movie = self.movie_length();

                if elapsed >= movie {
                    // Frames finished: hold the last one and fade out from the peak.
                    self.frame = self.frame_delays.len().saturating_sub(1);
                    self.phase = Phase::FadingOut {
                        since: since + movie,
                    };
                    self.advance(now);
                    return;
                }

                self.frame = self.frame_at(elapsed);
                self.opacity = self.max_opacity * ease_in_quad(progress(elapsed, self.fade));
            }

            Phase::FadingOut { since } => {
                let elapsed = now.saturating_duration_since(since);

                if elapsed >= self.fade {
                    self.stop();
                    return;
                }

                let t = progress(elapsed, self.fade);
                self.opacity = self.max_opacity * (1.0 - ease_out_quad(t));
            }
        }
    }

    pub(crate) fn stop(&mut self) {
        self.phase = Phase::Hidden;
        self.opacity = 0.0;
        self.frame = 0;
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }

    #[cfg(test)]
    pub(crate) fn is_fading_out(&self) -> bool {
        matches!(self.phase, Phase::FadingOut { .. })
    }

    pub(crate) fn opacity(&self) -> f32 {
        self.opacity
    }

    pub(crate) fn frame(&self) -> usize {
        self.frame
    }

    pub(crate) fn movie_length(&self) -> Duration {
        self.frame_delays.iter().sum()
    }

    fn frame_at(&self, elapsed: Duration) -> usize {
        let mut acc = Duration::ZERO;
        for (i, delay) in self.frame_delays.iter().enumerate() {
            acc += *delay;
            if elapsed < acc {
                return i;
            }
        }
        self.frame_delays.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: f32 = 0.95;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// 4 frames x 200 ms = 800 ms movie, 650 ms fades.
    fn symbol() -> StatusSymbol {
        StatusSymbol::new(MAX, ms(650), vec![ms(200); 4])
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_in_quad(0.0), 0.0);
        assert_eq!(ease_in_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert!(ease_in_quad(0.5) < 0.5);
        assert!(ease_out_quad(0.5) > 0.5);
    }

    #[test]
    fn hidden_until_started() {
        let mut s = symbol();
        s.advance(Instant::now());
        assert!(!s.is_visible());
        assert_eq!(s.opacity(), 0.0);
    }

    #[test]
    fn fades_in_while_frames_play() {
        let t0 = Instant::now();
        let mut s = symbol();
        s.start(t0);
        assert!(s.is_visible());

        s.advance(t0 + ms(325));
        assert!(close(s.opacity(), MAX * 0.25));
        assert_eq!(s.frame(), 1);

        s.advance(t0 + ms(700));
        assert!(close(s.opacity(), MAX));
        assert_eq!(s.frame(), 3);
        assert!(!s.is_fading_out());
    }

    #[test]
    fn fades_out_after_last_frame_then_hides() {
        let t0 = Instant::now();
        let mut s = symbol();
        s.start(t0);

        // 800 ms movie + 325 ms into the fade-out
        s.advance(t0 + ms(1125));
        assert!(s.is_fading_out());
        assert_eq!(s.frame(), 3);
        assert!(close(s.opacity(), MAX * 0.25));

        s.advance(t0 + ms(800 + 650));
        assert!(!s.is_visible());
        assert_eq!(s.opacity(), 0.0);
    }

    #[test]
    fn restart_mid_fade_begins_again() {
        let t0 = Instant::now();
        let mut s = symbol();
        s.start(t0);
        s.advance(t0 + ms(1000));
        assert!(s.is_fading_out());

        let t1 = t0 + ms(1000);
        s.start(t1);
        s.advance(t1 + ms(10));
        assert!(!s.is_fading_out());
        assert_eq!(s.frame(), 0);
        assert!(s.opacity() < 0.01);
    }

    #[test]
    fn empty_movie_goes_straight_to_fade_out() {
        let t0 = Instant::now();
        let mut s = StatusSymbol::new(MAX, ms(650), Vec::new());
        s.start(t0);
        s.advance(t0);
        assert!(s.is_fading_out());
        assert!(close(s.opacity(), MAX));
    }
}
