use crate::contact::ContactField;
use crate::site::SiteVariant;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub contact: ContactConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub variant: SiteVariant,
    pub title: String,
    pub owner: String,
    pub static_dir: PathBuf,
}

/// Overrides for the variant's contact policy. Unset fields keep the preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfig {
    pub required_fields: Option<Vec<ContactField>>,
    pub acknowledgment: Option<String>,
    pub failure_message: Option<String>,
}

/// An empty origin list leaves CORS off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5050,
            debug: true,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            variant: SiteVariant::Terminal,
            title: "terminal-cv".to_string(),
            owner: "guest".to_string(),
            static_dir: PathBuf::from("./static"),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age_seconds: 3600,
        }
    }
}

/// Environment variable naming a config file to use instead of `./config.toml`.
pub const CONFIG_FILE_ENV: &str = "APP_CONFIG_FILE";

impl AppConfig {
    /// Defaults, then `config.toml` from the working directory if present,
    /// then `APP_` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let local = Path::new("config.toml");
        Self::build(local.exists().then_some(local), Self::environment())
    }

    /// Like [`AppConfig::load`] but reads the given file, which must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::build(Some(path.as_ref()), Self::environment())
    }

    /// Reads `file` when one is given, otherwise falls back to [`AppConfig::load`].
    pub fn load_with(file: Option<&Path>) -> Result<Self, ConfigError> {
        match file {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    fn environment() -> Environment {
        Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("cors.allowed_origins")
            .with_list_parse_key("contact.required_fields")
            .try_parsing(true)
    }

    fn build(file: Option<&Path>, environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }

        let app_config: AppConfig = builder.add_source(environment).build()?.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Message("Site title cannot be empty".to_string()));
        }

        if self.site.owner.trim().is_empty() {
            return Err(ConfigError::Message("Site owner cannot be empty".to_string()));
        }

        if self.site.static_dir.as_os_str().is_empty() {
            return Err(ConfigError::Message(
                "Static directory cannot be empty".to_string(),
            ));
        }

        if matches!(&self.contact.required_fields, Some(fields) if fields.is_empty()) {
            return Err(ConfigError::Message(
                "Contact required fields cannot be an empty list".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5050);
        assert!(config.server.debug);
        assert_eq!(config.site.variant, SiteVariant::Terminal);
        assert!(config.cors.allowed_origins.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.server.port = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.site.owner = "   ".to_string();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.site.static_dir = PathBuf::new();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.contact.required_fields = Some(Vec::new());
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.contact.required_fields = Some(vec![ContactField::Email]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:5050");

        let mut config = AppConfig::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 8080;
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 8081
debug = false

[site]
variant = "shell"
owner = "jo"

[contact]
required_fields = ["message"]
failure_message = "missing"

[cors]
allowed_origins = ["https://example.com"]
"#
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).expect("Should load configuration file");

        assert_eq!(config.server.port, 8081);
        assert!(!config.server.debug);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.site.variant, SiteVariant::Shell);
        assert_eq!(config.site.owner, "jo");
        assert_eq!(config.site.title, "terminal-cv");
        assert_eq!(config.contact.required_fields, Some(vec![ContactField::Message]));
        assert_eq!(config.contact.failure_message.as_deref(), Some("missing"));
        assert!(config.contact.acknowledgment.is_none());
        assert_eq!(config.cors.allowed_origins, vec!["https://example.com".to_string()]);
    }

    fn env_source(vars: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::environment().source(Some(source))
    }

    #[test]
    fn test_environment_overrides() {
        let environment = env_source(&[
            ("APP_SERVER__PORT", "8080"),
            ("APP_SITE__VARIANT", "shell"),
            ("APP_SITE__STATIC_DIR", "/srv/static"),
            ("APP_CONTACT__REQUIRED_FIELDS", "email,message"),
            ("APP_CORS__ALLOWED_ORIGINS", "https://a.com,https://b.com"),
        ]);

        let config = AppConfig::build(None, environment).expect("Should apply environment overrides");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site.variant, SiteVariant::Shell);
        assert_eq!(config.site.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(
            config.contact.required_fields,
            Some(vec![ContactField::Email, ContactField::Message])
        );
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.com".to_string(), "https://b.com".to_string()]
        );
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 8081\n\n[site]\nowner = \"jo\"").unwrap();

        let environment = env_source(&[("APP_SERVER__PORT", "9090"), ("OTHER_PORT", "1")]);
        let config = AppConfig::build(Some(file.path()), environment).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.site.owner, "jo");
    }

    #[test]
    fn test_invalid_environment_value_is_rejected() {
        let environment = env_source(&[("APP_SERVER__PORT", "0")]);
        assert!(AppConfig::build(None, environment).is_err());
    }

    #[test]
    fn test_load_with_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[site]\nvariant = \"shell\"\ntitle = \"cv\"").unwrap();

        let config = AppConfig::load_with(Some(file.path())).expect("Should load the named file");
        assert_eq!(config.site.variant, SiteVariant::Shell);
        assert_eq!(config.site.title, "cv");

        let missing = file.path().with_extension("missing.toml");
        assert!(AppConfig::load_with(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 0").unwrap();

        assert!(AppConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[site]\nvariant = \"gui\"").unwrap();

        assert!(AppConfig::load_from(file.path()).is_err());
    }
}
