use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardResult {
    Allow,
    AllowWithOverride,
    Block,
}

impl GuardResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::AllowWithOverride => "allow_with_override",
            Self::Block => "block",
        }
    }
}
