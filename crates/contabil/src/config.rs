//! Configuration file structure (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use contabil_pages::SiteInfo;
use contabil_static::BuildConfig;
use serde::Deserialize;

/// Written by `contabil init`.
pub const DEFAULT_CONFIG: &str = r#"# contabil configuration

[site]
# Site title, shown in the header and page titles
title = "Exata Contabilidade"

# Absolute URL of the deployed site (used in sitemap.xml)
url = "https://www.exatacontabilidade.com.br"

# Document language
lang = "pt-BR"

# Extra stylesheets copied to assets/ and linked from every page
styles = []

[contact]
# WhatsApp number with country code
whatsapp = "5531990726579"
email = "contato@exatacontabilidade.com.br"
phone = "(31) 99072-6579"

[build]
# Output directory for the built site
output = "dist"

# Static files copied to assets/ (images referenced by pages live here)
public = "public"

# Enable CSS minification
minify = true
"#;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub contact: ContactSection,
    #[serde(default)]
    pub build: BuildSection,
}

#[derive(Debug, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub styles: Vec<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            url: default_url(),
            lang: default_lang(),
            styles: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactSection {
    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_phone")]
    pub phone: String,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            whatsapp: default_whatsapp(),
            email: default_email(),
            phone: default_phone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildSection {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_public")]
    pub public: String,
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output: default_output(),
            public: default_public(),
            minify: default_minify(),
        }
    }
}

fn default_title() -> String {
    SiteInfo::default().name
}
fn default_url() -> String {
    "https://www.exatacontabilidade.com.br".to_string()
}
fn default_lang() -> String {
    "pt-BR".to_string()
}
fn default_whatsapp() -> String {
    SiteInfo::default().whatsapp
}
fn default_email() -> String {
    SiteInfo::default().email
}
fn default_phone() -> String {
    SiteInfo::default().phone
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_public() -> String {
    "public".to_string()
}
fn default_minify() -> bool {
    true
}

impl ConfigFile {
    /// Merge file values with command line overrides.
    pub fn into_build_config(self, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
        BuildConfig {
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.build.output)),
            public_dir: PathBuf::from(&self.build.public),
            minify: minify.unwrap_or(self.build.minify),
            site_url: self.site.url,
            site: SiteInfo {
                name: self.site.title.clone(),
                whatsapp: self.contact.whatsapp,
                email: self.contact.email,
                phone: self.contact.phone,
            },
            title: self.site.title,
            lang: self.site.lang,
            styles: self.site.styles,
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::info!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn default_config_parses() {
        let config: ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.site.title, "Exata Contabilidade");
        assert_eq!(config.contact.whatsapp, "5531990726579");
        assert!(config.build.minify);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: ConfigFile = toml::from_str("[site]\ntitle = \"Outra\"\n").unwrap();

        assert_eq!(config.site.title, "Outra");
        assert_eq!(config.site.lang, "pt-BR");
        assert_eq!(config.build.output, "dist");
        assert_eq!(config.contact.email, "contato@exatacontabilidade.com.br");
    }

    #[test]
    fn cli_overrides_file_values() {
        let config: ConfigFile =
            toml::from_str("[build]\noutput = \"public_html\"\nminify = true\n").unwrap();

        let build = config.into_build_config(Some(PathBuf::from("out")), Some(false));

        assert_eq!(build.output_dir, PathBuf::from("out"));
        assert!(!build.minify);
    }

    #[test]
    fn title_names_the_office() {
        let config: ConfigFile = toml::from_str("[site]\ntitle = \"Outra\"\n").unwrap();

        let build = config.into_build_config(None, None);

        assert_eq!(build.title, "Outra");
        assert_eq!(build.site.name, "Outra");
        assert_eq!(build.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("site.toml")).unwrap();

        assert_eq!(config.build.public, "public");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
