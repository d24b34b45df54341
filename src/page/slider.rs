//! Quest and screenshot sliders.
//!
//! Navigation updates the target index immediately; the visible content
//! fades out and is swapped once the fade completes.

use crate::config::SLIDER_FADE_DURATION;
use crate::error::LandingError;
use crate::mobile::touch::SlideCommand;
use crate::page::content::{self, Quest, Screenshot};
use crate::page::flow::FlowDiagram;
use crate::schedule::Timeout;

/// Wrapping index over a non-empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, LandingError> {
        if len == 0 {
            return Err(LandingError::new("slider", "slider has no slides"));
        }
        Ok(Self { len, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }

    pub fn apply(&mut self, cmd: SlideCommand) -> usize {
        match cmd {
            SlideCommand::Next => self.next(),
            SlideCommand::Prev => self.prev(),
        }
    }
}

/// Fade-out, swap, fade-in.
#[derive(Debug, Clone)]
pub struct FadeSwap {
    shown: usize,
    target: usize,
    swap: Timeout,
}

impl FadeSwap {
    pub fn new(shown: usize) -> Self {
        Self {
            shown,
            target: shown,
            swap: Timeout::new(),
        }
    }

    pub fn request(&mut self, target: usize, now: f64) {
        self.target = target;
        self.swap.arm(now, SLIDER_FADE_DURATION);
    }

    /// Returns true when the content was swapped.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.swap.fire(now) {
            self.shown = self.target;
            return true;
        }
        false
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn is_fading(&self) -> bool {
        self.swap.is_armed()
    }

    /// Content opacity: hidden while waiting for the swap.
    pub fn opacity(&self) -> f32 {
        if self.is_fading() {
            0.0
        } else {
            1.0
        }
    }

    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        self.swap.remaining(now)
    }
}

/// Quest slider driving the mechanics flow diagram texts.
pub struct QuestSlider {
    quests: Vec<Quest>,
    carousel: Carousel,
    fade: FadeSwap,
}

impl QuestSlider {
    /// Slider over `quests`, each of which must have one text per step of
    /// `flow`.
    pub fn new(quests: Vec<Quest>, flow: &FlowDiagram) -> Result<Self, LandingError> {
        let carousel = Carousel::new(quests.len())?;
        if let Some(q) = quests.iter().find(|q| q.steps.len() != flow.step_count()) {
            return Err(LandingError::new(
                "slider",
                format!(
                    "quest '{}' has {} steps, flow diagram has {}",
                    q.title,
                    q.steps.len(),
                    flow.step_count()
                ),
            ));
        }
        Ok(Self {
            quests,
            carousel,
            fade: FadeSwap::new(0),
        })
    }

    pub fn builtin(flow: &FlowDiagram) -> Result<Self, LandingError> {
        Self::new(content::quests(), flow)
    }

    /// Arrow button, arrow key or swipe.
    pub fn navigate(&mut self, cmd: SlideCommand, now: f64) {
        let target = self.carousel.apply(cmd);
        log::debug!("quest slider -> {} ({:?})", target, cmd);
        self.fade.request(target, now);
    }

    /// Swap content when due and replay the flow lines for the new quest.
    pub fn tick(&mut self, now: f64, flow: &mut FlowDiagram) -> bool {
        if self.fade.tick(now) {
            flow.restart(now);
            return true;
        }
        false
    }

    pub fn current(&self) -> usize {
        self.carousel.current()
    }

    /// Quest currently on screen (lags `current` during the fade).
    pub fn shown(&self) -> &Quest {
        &self.quests[self.fade.shown()]
    }

    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        self.fade.next_wakeup(now)
    }
}

/// Screenshot gallery. No keyboard navigation.
pub struct ScreenshotSlider {
    shots: Vec<Screenshot>,
    carousel: Carousel,
    fade: FadeSwap,
}

impl ScreenshotSlider {
    pub fn new(shots: Vec<Screenshot>) -> Result<Self, LandingError> {
        let carousel = Carousel::new(shots.len())?;
        Ok(Self {
            shots,
            carousel,
            fade: FadeSwap::new(0),
        })
    }

    pub fn builtin() -> Result<Self, LandingError> {
        Self::new(content::screenshots())
    }

    pub fn navigate(&mut self, cmd: SlideCommand, now: f64) {
        let target = self.carousel.apply(cmd);
        log::debug!("screenshot slider -> {} ({:?})", target, cmd);
        self.fade.request(target, now);
    }

    pub fn tick(&mut self, now: f64) -> bool {
        self.fade.tick(now)
    }

    pub fn current(&self) -> usize {
        self.carousel.current()
    }

    pub fn shown(&self) -> &Screenshot {
        &self.shots[self.fade.shown()]
    }

    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        self.fade.next_wakeup(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::content::FLOW_STEPS;

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut c = Carousel::new(3).expect("non-empty");
        assert_eq!(c.prev(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.apply(SlideCommand::Prev), 2);
    }

    #[test]
    fn test_empty_slider_is_an_error() {
        assert!(Carousel::new(0).is_err());
        let flow = FlowDiagram::new(FLOW_STEPS, 0.0).expect("flow");
        assert!(QuestSlider::new(Vec::new(), &flow).is_err());
        assert_eq!(
            ScreenshotSlider::new(Vec::new()).err().map(|e| e.phase),
            Some("slider")
        );
    }

    #[test]
    fn test_quest_swaps_after_fade_and_restarts_lines() {
        let mut flow = FlowDiagram::new(FLOW_STEPS, 0.0).expect("flow");
        let mut slider = QuestSlider::builtin(&flow).expect("built-in quests");
        flow.set_intersection(1.0, 0.0);

        slider.navigate(SlideCommand::Next, 1.0);
        assert_eq!(slider.current(), 1);
        assert_eq!(slider.shown().title, "Touch Grass Everyday");
        assert_eq!(slider.opacity(), 0.0);

        assert!(!slider.tick(1.2, &mut flow));
        assert!(slider.tick(1.3, &mut flow));
        assert_eq!(slider.shown().title, "Run 3km everyday");
        assert_eq!(slider.opacity(), 1.0);
        assert!(!flow.is_animating());
        flow.tick(1.35);
        assert!(flow.is_animating());
    }

    #[test]
    fn test_prev_from_first_shows_last_quest() {
        let mut flow = FlowDiagram::new(FLOW_STEPS, 0.0).expect("flow");
        let mut slider = QuestSlider::builtin(&flow).expect("built-in quests");
        slider.navigate(SlideCommand::Prev, 0.0);
        slider.tick(0.3, &mut flow);
        assert_eq!(slider.shown().title, "Drawing");
    }

    #[test]
    fn test_quest_steps_must_match_diagram() {
        let flow = FlowDiagram::new(3, 0.0).expect("flow");
        let err = QuestSlider::builtin(&flow).err().expect("step mismatch");
        assert_eq!(err.phase, "slider");
        assert!(err.message.contains("flow diagram has 3"));
    }

    #[test]
    fn test_screenshot_media_switches() {
        let mut slider = ScreenshotSlider::builtin().expect("built-in screenshots");
        assert!(!slider.shown().media.is_video());
        slider.navigate(SlideCommand::Next, 0.0);
        assert!(slider.tick(0.3));
        assert!(slider.shown().media.is_video());
        assert_eq!(slider.shown().media.source(), "assets/screenshots/early_wake.mp4");
    }
}
