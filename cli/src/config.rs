use envconfig::Envconfig;

#[derive(Debug, Clone, Envconfig)]
pub struct LogConfig {
    #[envconfig(from = "LOG_LEVEL", default = "warn")]
    pub log_level: log::Level,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_config: LogConfig,
}

impl AppConfig {
    pub fn fetch() -> Result<Self, envconfig::Error> {
        let log_config = LogConfig::init_from_env()?;
        Ok(Self { log_config })
    }
}
