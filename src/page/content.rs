//! Static copy shown on the landing page.

/// Text typed into the system dialog.
pub const SYSTEM_DIALOG_TEXT: &str = "Hi, I am The System - an advanced AI designed to optimize your daily routines and enhance your productivity.\n\nMy primary objective is to help you overcome digital distractions and procrastination through strategic gamification of your daily tasks.\n\nBy analyzing your patterns and implementing reward-based mechanisms, I create a personalized system that transforms mundane tasks into engaging challenges.";

/// Number of steps in the mechanics flow diagram.
pub const FLOW_STEPS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    pub title: &'static str,
    pub steps: [&'static str; FLOW_STEPS],
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenshotMedia {
    Image {
        path: &'static str,
    },
    Video {
        url: &'static str,
        poster: Option<&'static str>,
    },
}

impl ScreenshotMedia {
    pub fn is_video(&self) -> bool {
        matches!(self, ScreenshotMedia::Video { .. })
    }

    /// Asset path or url.
    pub fn source(&self) -> &'static str {
        match self {
            ScreenshotMedia::Image { path } => path,
            ScreenshotMedia::Video { url, .. } => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screenshot {
    pub title: &'static str,
    pub media: ScreenshotMedia,
    pub description: &'static str,
}

const LOCKED: &str = "Distractive apps remain locked";
const UNLOCK: &str = "Unlock apps for a while";

pub fn quests() -> Vec<Quest> {
    vec![
        Quest {
            title: "Touch Grass Everyday",
            steps: [LOCKED, "Go out and touch grass", "Snap a pic ", "AI checks pics", UNLOCK],
        },
        Quest {
            title: "Run 3km everyday",
            steps: [
                LOCKED,
                "You run 3km",
                "QP connects to your device sensors",
                "Checks if quest completed",
                UNLOCK,
            ],
        },
        Quest {
            title: "Study for 25 minutes",
            steps: [
                LOCKED,
                "Start quest",
                "Non-study apps stay locked",
                "get coins after 25 minutes",
                UNLOCK,
            ],
        },
        Quest {
            title: "Pomodoro",
            steps: [LOCKED, "Start quest", "Pomodoro Starts", "get coins every cycle", UNLOCK],
        },
        Quest {
            title: "Burn 7700 kcal",
            steps: [
                LOCKED,
                "Perform Exercises",
                "QP connects to your device sensors",
                "verification happens",
                "get coins",
            ],
        },
        Quest {
            title: "Go Gym",
            steps: [LOCKED, "Visit Gym", "Snap a pic", "Ai verifies the pics", "get coins"],
        },
        Quest {
            title: "Drawing",
            steps: [LOCKED, "Draw", "Snap a pic", "Ai verifies", UNLOCK],
        },
    ]
}

pub fn screenshots() -> Vec<Screenshot> {
    vec![
        Screenshot {
            title: "Custom Themes",
            media: ScreenshotMedia::Image { path: "assets/screenshots/sakura.png" },
            description: "btw the sakura tree here grows together with your streak. if you break the streak, it will wither and die :(",
        },
        Screenshot {
            title: "Ai Snap",
            media: ScreenshotMedia::Video { url: "assets/screenshots/early_wake.mp4", poster: None },
            description: "This quest requires you to wake up early and snap a pic of the morning sky. AI verifies the pic to ensure authenticity.",
        },
        Screenshot {
            title: "Deep Focus",
            media: ScreenshotMedia::Image { path: "assets/screenshots/deep_focus.gif" },
            description: "Block access to your entire device except selected apps until quest over  (sped up video)",
        },
        Screenshot {
            title: "Health Quest",
            media: ScreenshotMedia::Image { path: "assets/screenshots/steps_quest.png" },
            description: "QP uses your device's health data to verify tasks like steps, distance covered, calorie burned, sleep and hydration.",
        },
        Screenshot {
            title: "Hacker Theme",
            media: ScreenshotMedia::Image { path: "assets/screenshots/hacker.gif" },
            description: "matrix ahh animation",
        },
        Screenshot {
            title: "Cool Animations",
            media: ScreenshotMedia::Image { path: "assets/screenshots/streak.gif" },
            description: "fire",
        },
        Screenshot {
            title: "Templates",
            media: ScreenshotMedia::Image { path: "assets/screenshots/templates.png" },
            description: "Quickly add quests using pre-made templates",
        },
        Screenshot {
            title: "Personalized Notifications",
            media: ScreenshotMedia::Image { path: "assets/screenshots/reminders.png" },
            description: "Get personalized notifications from our on device AI assistant to keep you motivated",
        },
        Screenshot {
            title: "Markdown Support",
            media: ScreenshotMedia::Video { url: "assets/screenshots/md_editor.mp4", poster: None },
            description: "Write rich text descriptions for your quests using markdown",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_catalogue() {
        assert_eq!(quests().len(), 7);
        assert_eq!(screenshots().len(), 9);
        assert_eq!(screenshots().iter().filter(|s| s.media.is_video()).count(), 2);
    }

    #[test]
    fn test_every_quest_starts_locked() {
        assert!(quests().iter().all(|q| q.steps[0] == LOCKED));
    }
}
