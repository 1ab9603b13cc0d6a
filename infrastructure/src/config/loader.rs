//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use qa_domain::Model;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["llm-qa.toml", ".llm-qa.toml"];

/// Prefix for environment overrides, e.g. `LLM_QA_SERVER__ADDR`
pub const ENV_PREFIX: &str = "LLM_QA_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `LLM_QA_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./llm-qa.toml` or `./.llm-qa.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/llm-qa/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/llm-qa/config.toml if set,
    /// otherwise falls back to ~/.config/llm-qa/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("llm-qa").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for `--show-config`)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./llm-qa.toml or ./.llm-qa.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
        println!();
        println!("Known models: {}", Self::known_models_line());
    }

    fn known_models_line() -> String {
        Model::known_models()
            .iter()
            .map(Model::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    /// Point the global config lookup inside the jail
    fn isolate_global(jail: &mut Jail) {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
    }

    fn load(path: Option<&Path>) -> figment::error::Result<FileConfig> {
        ConfigLoader::load(path).map_err(|e| *e)
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.provider.model(), Model::Gemini25Flash);
        assert_eq!(config.provider.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("llm-qa"));
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            let config = load(None)?;
            assert_eq!(config.provider.model(), Model::Gemini25Flash);
            assert_eq!(config.server.addr, "127.0.0.1:5000");
            Ok(())
        });
    }

    // `dirs` only honours XDG_CONFIG_HOME on Linux
    #[cfg(target_os = "linux")]
    #[test]
    fn test_project_file_overrides_global() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_dir("xdg/llm-qa")?;
            jail.create_file(
                "xdg/llm-qa/config.toml",
                "[provider]\nmodel = \"gemini-2.5-flash-lite\"\napi_key_env = \"GLOBAL_KEY\"",
            )?;
            jail.create_file("llm-qa.toml", "[provider]\nmodel = \"gemini-2.5-pro\"")?;

            let config = load(None)?;
            assert_eq!(config.provider.model(), Model::Gemini25Pro);
            // Keys the project file leaves out still come from the global file
            assert_eq!(config.provider.api_key_env, "GLOBAL_KEY");
            Ok(())
        });
    }

    #[test]
    fn test_hidden_project_file_is_found() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file(".llm-qa.toml", "[server]\naddr = \"127.0.0.1:7000\"")?;

            let config = load(None)?;
            assert_eq!(config.server.addr, "127.0.0.1:7000");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file(
                "llm-qa.toml",
                "[provider]\nmodel = \"gemini-2.5-pro\"\n\n[server]\naddr = \"127.0.0.1:7000\"",
            )?;
            jail.create_file("explicit.toml", "[provider]\nmodel = \"gemini-2.5-flash-lite\"")?;

            let config = load(Some(Path::new("explicit.toml")))?;
            assert_eq!(config.provider.model(), Model::Gemini25FlashLite);
            assert_eq!(config.server.addr, "127.0.0.1:7000");
            // Untouched sections keep defaults
            assert_eq!(config.provider.api_key_env, "GEMINI_API_KEY");
            assert!(config.output.show_processed);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file(
                "explicit.toml",
                "[provider]\nmodel = \"gemini-2.5-flash-lite\"\n\n[server]\naddr = \"127.0.0.1:7000\"",
            )?;
            jail.set_env("LLM_QA_PROVIDER__MODEL", "gemini-2.5-pro");
            jail.set_env("LLM_QA_SERVER__ADDR", "127.0.0.1:9001");

            let config = load(Some(Path::new("explicit.toml")))?;
            assert_eq!(config.provider.model(), Model::Gemini25Pro);
            assert_eq!(config.server.addr, "127.0.0.1:9001");
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_bad_types() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file("bad.toml", "[provider]\ntimeout_seconds = \"soon\"")?;

            assert!(ConfigLoader::load(Some(Path::new("bad.toml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_known_models_line() {
        assert_eq!(
            ConfigLoader::known_models_line(),
            "gemini-2.5-flash, gemini-2.5-flash-lite, gemini-2.5-pro"
        );
    }
}
