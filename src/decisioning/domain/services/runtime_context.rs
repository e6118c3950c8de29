use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::decisioning::domain::model::enums::run_mode::RunMode;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Clone)]
pub struct RuntimeContext {
    pub mode: RunMode,
    pub clock: Arc<dyn Clock>,
}

impl RuntimeContext {
    pub fn new(mode: RunMode, clock: Arc<dyn Clock>) -> Self {
        Self { mode, clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}
