//! Typewriter reveal for the system dialog.
//!
//! Characters appear one at a time with a short random pause between them.
//! Several characters may be due within one host frame; they are all emitted
//! in order so the overall pace does not depend on the frame rate.

use rand::Rng;

use crate::config::{
    TYPEWRITER_MAX_CHAR_DELAY, TYPEWRITER_START_DELAY, TYPEWRITER_VISIBILITY_THRESHOLD,
};
use crate::viewport::{VisibilityChange, VisibilityObserver};

pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
    output: String,
    observer: VisibilityObserver,
    started: bool,
    next_at: Option<f64>,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            index: 0,
            output: String::with_capacity(text.len() + 16),
            observer: VisibilityObserver::once(TYPEWRITER_VISIBILITY_THRESHOLD),
            started: false,
            next_at: None,
        }
    }

    /// Text revealed so far. Each newline of the source is a paragraph break.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Feed the dialog's visibility; the first sighting schedules typing.
    pub fn set_intersection(&mut self, ratio: f32, now: f64) {
        if self.observer.observe(ratio) == Some(VisibilityChange::Entered) {
            self.start(now);
        }
    }

    /// Begin typing after the start delay. Only the first call has an effect.
    pub fn start(&mut self, now: f64) {
        if self.started {
            return;
        }
        self.started = true;
        self.next_at = Some(now + TYPEWRITER_START_DELAY);
        log::debug!("typewriter scheduled at {:.3}", now + TYPEWRITER_START_DELAY);
    }

    /// Emit every character due by `now`. Returns true if output changed.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) -> bool {
        let mut changed = false;
        while let Some(at) = self.next_at {
            if now < at || self.is_done() {
                break;
            }
            let c = self.chars[self.index];
            if c == '\n' {
                self.output.push_str("\n\n");
            } else {
                self.output.push(c);
            }
            self.index += 1;
            changed = true;

            self.next_at = if self.is_done() {
                None
            } else {
                Some(at + rng.gen_range(0.0..TYPEWRITER_MAX_CHAR_DELAY))
            };
        }
        changed
    }

    /// Seconds until the next character is due.
    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        self.next_at.map(|at| (at - now).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_waits_for_visibility_and_start_delay() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut tw = Typewriter::new("Hi");
        assert!(!tw.tick(100.0, &mut rng));
        tw.set_intersection(0.1, 1.0);
        assert!(!tw.is_started());
        tw.set_intersection(0.3, 1.0);
        assert!(tw.is_started());
        assert!(!tw.tick(1.49, &mut rng));
        assert!(tw.tick(1.5, &mut rng));
        assert!(tw.output().starts_with('H'));
    }

    #[test]
    fn test_types_everything_and_expands_newlines() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut tw = Typewriter::new("ab\ncd");
        tw.start(0.0);
        // Five characters at < 15 ms apart are all due well within a second.
        tw.tick(2.0, &mut rng);
        assert!(tw.is_done());
        assert_eq!(tw.output(), "ab\n\ncd");
        assert_eq!(tw.next_wakeup(2.0), None);
    }

    #[test]
    fn test_reveals_in_order_over_time() {
        let mut rng = StdRng::seed_from_u64(9);
        let text = "The System";
        let mut tw = Typewriter::new(text);
        tw.start(0.0);
        let mut t = 0.5;
        let mut last_len = 0;
        while !tw.is_done() {
            tw.tick(t, &mut rng);
            assert!(text.starts_with(tw.output()));
            assert!(tw.output().len() >= last_len);
            last_len = tw.output().len();
            t += 0.004;
        }
        assert_eq!(tw.output(), text);
    }

    #[test]
    fn test_starts_only_once() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tw = Typewriter::new("xyz");
        tw.set_intersection(1.0, 0.0);
        tw.tick(5.0, &mut rng);
        assert!(tw.is_done());
        tw.set_intersection(0.0, 6.0);
        tw.set_intersection(1.0, 7.0);
        tw.start(8.0);
        tw.tick(20.0, &mut rng);
        assert_eq!(tw.output(), "xyz");
    }
}
