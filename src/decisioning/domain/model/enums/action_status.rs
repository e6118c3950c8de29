#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionStatus {
    Logged,
    Executed,
    Failed,
    Skipped,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logged => "logged",
            Self::Executed => "executed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
        }
    }
}
