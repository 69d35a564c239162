use super::PatchConfig;
use crate::utils::error::{PatchError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional on-disk overrides. Every table and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub site: Option<SiteConfig>,
    pub branding: Option<BrandingConfig>,
    pub recolor: Option<RecolorConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_path: Option<String>,
    pub accent: Option<String>,
    pub web_root: Option<String>,
    pub bundle_pattern: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandingConfig {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecolorConfig {
    pub target: Option<String>,
    pub extensions: Option<Vec<String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>, FEnv>(path: P, env_lookup: &FEnv) -> Result<Self>
    where
        FEnv: Fn(&str) -> Option<String>,
    {
        let content = std::fs::read_to_string(&path).map_err(|e| PatchError::Config {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content, env_lookup)
    }

    pub fn from_toml_str<FEnv>(content: &str, env_lookup: &FEnv) -> Result<Self>
    where
        FEnv: Fn(&str) -> Option<String>,
    {
        let processed = substitute_env_vars(content, env_lookup);

        toml::from_str(&processed).map_err(|e| PatchError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Layer the file's values over `config`.
    pub fn apply_to(&self, config: PatchConfig) -> PatchConfig {
        let mut config = config;

        if let Some(site) = &self.site {
            if let Some(base) = &site.base_path {
                config = config.with_base_path(base);
            }
            if let Some(accent) = &site.accent {
                config = config.with_accent(accent);
            }
            if let Some(root) = &site.web_root {
                config.web_root = root.into();
            }
            if let Some(pattern) = &site.bundle_pattern {
                config.bundle_pattern = pattern.clone();
            }
        }

        if let Some(branding) = &self.branding {
            if let Some(title) = &branding.title {
                config.branding.title = title.clone();
            }
            if let Some(tagline) = &branding.tagline {
                config.branding.tagline = tagline.clone();
            }
            if let Some(description) = &branding.description {
                config.branding.description = description.clone();
            }
        }

        if let Some(recolor) = &self.recolor {
            if let Some(target) = &recolor.target {
                config.recolor.target = target.clone();
            }
            if let Some(extensions) = &recolor.extensions {
                config.recolor.extensions = extensions.clone();
            }
        }

        config
    }
}

/// Replace `${VAR}` placeholders; unknown variables are left as written.
fn substitute_env_vars<FEnv>(content: &str, env_lookup: &FEnv) -> String
where
    FEnv: Fn(&str) -> Option<String>,
{
    let re = match Regex::new(r"\$\{([^}]+)\}") {
        Ok(re) => re,
        Err(_) => return content.to_string(),
    };

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        env_lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    })
    .into_owned()
}
