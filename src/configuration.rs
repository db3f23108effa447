use config::ConfigError;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub jwt: JwtSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// JWT authentication settings
///
/// `algorithm` selects the signing mode. `HS256` uses `secret`; `RS256`
/// reads PEM key files from `private_key_path` and `public_key_path`.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct JwtSettings {
    pub secret: String,
    pub algorithm: String,
    pub access_token_expire_minutes: i64,
    pub refresh_token_expire_days: i64,
    #[serde(default)]
    pub private_key_path: Option<String>,
    #[serde(default)]
    pub public_key_path: Option<String>,
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self {
            secret: "change-me".to_string(),
            algorithm: "HS256".to_string(),
            access_token_expire_minutes: 60 * 24 * 7,
            refresh_token_expire_days: 30,
            private_key_path: None,
            public_key_path: None,
        }
    }
}

/// Load settings from defaults, an optional `configuration` file in the
/// working directory, and `APP__`-prefixed environment variables
/// (e.g. `APP__JWT__SECRET`, `APP__APPLICATION__PORT`), in that order.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let defaults = JwtSettings::default();

    let settings = config::Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", 8000)?
        .set_default("jwt.secret", defaults.secret)?
        .set_default("jwt.algorithm", defaults.algorithm)?
        .set_default(
            "jwt.access_token_expire_minutes",
            defaults.access_token_expire_minutes,
        )?
        .set_default(
            "jwt.refresh_token_expire_days",
            defaults.refresh_token_expire_days,
        )?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
