/// Error raised while wiring a page component to its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingError {
    pub message: String,
    pub phase: &'static str,
}

impl LandingError {
    pub fn new(phase: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            phase,
        }
    }
}

impl std::fmt::Display for LandingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

impl std::error::Error for LandingError {}
