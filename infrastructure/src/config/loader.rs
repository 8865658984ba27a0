//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Uncased,
};
use std::path::{Path, PathBuf};

/// Directory name under the user's config dir
const APP_DIR: &str = "deep-research";

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["deep-research.toml", ".deep-research.toml"];

/// Environment variables understood by the client and the config keys they set
const ENV_KEYS: [(&str, &str); 3] = [
    ("MCP_SERVER_URL", "server.url"),
    ("MCP_CLIENT_TIMEOUT", "server.timeout_secs"),
    ("OUTPUT_DIR", "output.dir"),
];

/// Read verbatim so numeric passwords stay strings
const ENV_ACCESS_PASSWORD: &str = "ACCESS_PASSWORD";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`MCP_SERVER_URL`, `ACCESS_PASSWORD`,
    ///    `MCP_CLIENT_TIMEOUT`, `OUTPUT_DIR`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./deep-research.toml` or `./.deep-research.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/deep-research/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Self::file_figment(config_path))
            .extract()
            .map_err(Box::new)
    }

    /// Load defaults plus environment only (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Self::defaults()).extract().map_err(Box::new)
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    /// Defaults merged with every config file that exists
    fn file_figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Self::defaults();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    fn with_env(figment: Figment) -> Figment {
        let figment = figment.merge(Self::env_provider());
        match std::env::var(ENV_ACCESS_PASSWORD) {
            Ok(password) if !password.is_empty() => {
                figment.merge(Serialized::default("server.access_password", password))
            }
            _ => figment,
        }
    }

    fn env_provider() -> Env {
        Env::raw()
            .only(&ENV_KEYS.map(|(var, _)| var))
            .map(|key| {
                ENV_KEYS
                    .iter()
                    .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
                    .map(|(_, path)| Uncased::from(*path))
                    .unwrap_or_else(|| Uncased::from(key.as_str()))
            })
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/deep-research/config.toml if set,
    /// otherwise falls back to ~/.config/deep-research/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        for (var, key) in ENV_KEYS
            .iter()
            .copied()
            .chain(std::iter::once((ENV_ACCESS_PASSWORD, "server.access_password")))
        {
            let mark = if std::env::var_os(var).is_some() {
                "SET  "
            } else {
                "     "
            };
            println!("  [{}] Env:     {} -> {}", mark, var, key);
        }

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./deep-research.toml or ./.deep-research.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config: FileConfig = ConfigLoader::defaults().extract().unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let file = write_config(
            r#"
[server]
url = "http://10.0.0.5:3000/api/mcp"
timeout_secs = 90

[batch]
cooldown_secs = 1
"#,
        );
        let path = file.path().to_path_buf();

        let config: FileConfig = ConfigLoader::file_figment(Some(&path)).extract().unwrap();

        assert_eq!(config.server.url, "http://10.0.0.5:3000/api/mcp");
        assert_eq!(
            config.server.to_client_config().timeout,
            Duration::from_secs(90)
        );
        assert_eq!(config.batch.cooldown_secs, 1);
        // Untouched sections keep their defaults
        assert_eq!(config.research.language, "en-US");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let file = write_config("[batch]\ncooldown_secs = \"soon\"\n");
        let path = file.path().to_path_buf();

        let result: Result<FileConfig, _> = ConfigLoader::file_figment(Some(&path)).extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "explicit.toml",
                r#"
[server]
url = "http://file.local/api/mcp"
timeout_secs = 90

[output]
dir = "from-file"
"#,
            )?;
            jail.set_env("MCP_SERVER_URL", "http://example.org:9000/api/mcp");
            jail.set_env("ACCESS_PASSWORD", "12345");
            jail.set_env("MCP_CLIENT_TIMEOUT", "42");
            jail.set_env("OUTPUT_DIR", "/tmp/out");

            let config = ConfigLoader::load(Some(&PathBuf::from("explicit.toml"))).map_err(|e| *e)?;

            assert_eq!(config.server.url, "http://example.org:9000/api/mcp");
            assert_eq!(config.server.access_password.as_deref(), Some("12345"));
            assert_eq!(config.server.timeout_secs, 42);
            assert_eq!(config.output.dir, PathBuf::from("/tmp/out"));
            Ok(())
        });
    }

    #[test]
    fn test_file_values_kept_without_env() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("explicit.toml", "[server]\ntimeout_secs = 90\n")?;

            let config = ConfigLoader::load(Some(&PathBuf::from("explicit.toml"))).map_err(|e| *e)?;

            assert_eq!(config.server.timeout_secs, 90);
            assert!(config.server.access_password.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_no_config_still_reads_env() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("deep-research.toml", "[batch]\ncooldown_secs = 99\n")?;
            jail.set_env("MCP_CLIENT_TIMEOUT", "7");

            let config = ConfigLoader::load_defaults().map_err(|e| *e)?;

            assert_eq!(config.server.timeout_secs, 7);
            assert_eq!(config.batch.cooldown_secs, 5);
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("deep-research"));
    }
}
