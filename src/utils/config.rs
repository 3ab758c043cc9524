use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const ENVIRONMENTS: [&str; 3] = ["development", "staging", "production"];

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Config {
            log_level: env::var("LOG_LEVEL")
                .unwrap_or("info".to_string())
                .to_lowercase(),
            environment: env::var("APP_ENV")
                .unwrap_or("development".to_string())
                .to_lowercase(),
        };

        config.validate()?;
        tracing::debug!("Config: successfully loaded for {} environment", config.environment);
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(anyhow::anyhow!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if !ENVIRONMENTS.contains(&self.environment.as_str()) {
            return Err(anyhow::anyhow!(
                "APP_ENV must be one of {}, got '{}'",
                ENVIRONMENTS.join(", "),
                self.environment
            ));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
