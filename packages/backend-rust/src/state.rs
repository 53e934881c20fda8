use std::sync::Arc;
use std::time::{Instant, SystemTime};

use study_priority_algo::PriorityEngine;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    engine: Arc<PriorityEngine>,
    config: Arc<Config>,
    started_at: Instant,
    started_at_system: SystemTime,
}

impl AppState {
    pub fn new(engine: PriorityEngine, config: Config) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
        }
    }

    pub fn engine(&self) -> &PriorityEngine {
        &self.engine
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }
}
