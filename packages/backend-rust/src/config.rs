use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use study_priority_algo::{
    CategoryPolicy, EngineConfig, PriorityEngine, PriorityError, ScoreValidation,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("engine configuration rejected: {0}")]
    Engine(#[from] PriorityError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub app_version: String,
    pub policy: CategoryPolicy,
    pub score_validation: ScoreValidation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 3000,
            log_level: "info".to_string(),
            app_version: "unknown".to_string(),
            policy: CategoryPolicy::default(),
            score_validation: ScoreValidation::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let host = std::env::var("HOST")
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(defaults.host);

        let log_level = std::env::var("RUST_LOG").unwrap_or(defaults.log_level);

        let app_version = std::env::var("APP_VERSION")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.app_version);

        let policy = CategoryPolicy {
            mastered_threshold: env_f64("PRIORITY_MASTERED_THRESHOLD")
                .unwrap_or(defaults.policy.mastered_threshold),
            importance_threshold: env_f64("PRIORITY_IMPORTANCE_THRESHOLD")
                .unwrap_or(defaults.policy.importance_threshold),
            weak_mastery_threshold: env_f64("PRIORITY_WEAK_MASTERY_THRESHOLD")
                .unwrap_or(defaults.policy.weak_mastery_threshold),
        };

        let score_validation = match std::env::var("PRIORITY_SCORE_VALIDATION") {
            Ok(raw) => raw.parse::<ScoreValidation>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "unknown PRIORITY_SCORE_VALIDATION, using clamp");
                ScoreValidation::Clamp
            }),
            Err(_) => defaults.score_validation,
        };

        Self {
            host,
            port,
            log_level,
            app_version,
            policy,
            score_validation,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            policy: self.policy,
            validation: self.score_validation,
        }
    }

    pub fn build_engine(&self) -> Result<PriorityEngine, ConfigError> {
        Ok(PriorityEngine::new(self.engine_config())?)
    }
}

fn env_f64(key: &str) -> Option<f64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable threshold");
            None
        }
    }
}
