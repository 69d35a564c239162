use crate::utils::error::{PatchError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PatchError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PatchError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PatchError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_extensions(field_name: &str, extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(PatchError::InvalidConfigValue {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one extension is required".to_string(),
        });
    }

    for ext in extensions {
        if ext.is_empty() || ext.contains('/') || ext.starts_with('.') {
            return Err(PatchError::InvalidConfigValue {
                field: field_name.to_string(),
                value: ext.clone(),
                reason: "Extensions are bare suffixes such as 'css'".to_string(),
            });
        }
    }

    Ok(())
}
