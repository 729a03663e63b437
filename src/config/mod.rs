use crate::errors::{AppError, AppResult};
use crate::models::{Identity, Logo, OutputFormat, ReportSchema};
use crate::report::upload::DEFAULT_MAX_UPLOAD_BYTES;
use crate::ui::messages::{success, warning};
use crate::utils::path::{expand_tilde, extension};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Logos above this size are ignored (2 MiB).
pub const MAX_LOGO_BYTES: u64 = 2 * 1024 * 1024;

const ALLOWED_LOGO_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityKind {
    #[default]
    Individual,
    Company,
}

/// Profile printed at the top of every report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default)]
    pub kind: IdentityKind,
    #[serde(default)]
    pub name: String,
    /// Path to a PNG/JPEG/GIF logo (company profiles only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_schema: ReportSchema,
    #[serde(default)]
    pub default_format: OutputFormat,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub identity: IdentityConfig,
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}
fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_schema: ReportSchema::default(),
            default_format: OutputFormat::default(),
            max_upload_bytes: default_max_upload_bytes(),
            output_dir: default_output_dir(),
            identity: IdentityConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tsreport")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tsreport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tsreport.conf")
    }

    /// Load configuration from `path` (or the default location). A missing
    /// file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write a default configuration file unless one already exists.
    pub fn init_all(path: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(path);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        success(format!("Config file: {}", path.display()));

        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn output_dir(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    /// Build the report identity, loading the logo if one is configured.
    /// Unusable logos are skipped with a warning.
    pub fn identity(&self) -> Identity {
        let name = self.identity.name.clone();
        match self.identity.kind {
            IdentityKind::Individual => Identity::Individual { full_name: name },
            IdentityKind::Company => Identity::Company {
                company_name: name,
                logo: self.identity.logo.as_deref().and_then(load_logo),
            },
        }
    }
}

fn load_logo(raw: &str) -> Option<Logo> {
    let path = expand_tilde(raw);

    let mime_type = match extension(raw).as_deref() {
        Some(ext) if ALLOWED_LOGO_EXTENSIONS.contains(&ext) => mime_for(ext),
        _ => {
            warning(format!("Logo '{raw}' ignored: use a png, jpg or gif file"));
            return None;
        }
    };

    let size = match fs::metadata(&path) {
        Ok(m) => m.len(),
        Err(e) => {
            warning(format!("Logo '{}' ignored: {e}", path.display()));
            return None;
        }
    };
    if size > MAX_LOGO_BYTES {
        warning(format!(
            "Logo '{}' ignored: file size must be less than 2MB",
            path.display()
        ));
        return None;
    }

    match fs::read(&path) {
        Ok(data) => Some(Logo {
            data,
            mime_type: mime_type.to_string(),
        }),
        Err(e) => {
            warning(format!("Logo '{}' ignored: {e}", path.display()));
            None
        }
    }
}

fn mime_for(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        _ => "image/png",
    }
}
