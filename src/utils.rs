//! Filesystem and formatting helpers.

use crate::constants;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Get the application config directory, creating it if needed.
///
/// # Errors
///
/// Returns a message when no config directory can be determined or created.
pub fn config_dir() -> Result<PathBuf, String> {
    let base = dirs::config_dir().ok_or_else(|| "No config directory available".to_string())?;
    let dir = base.join(constants::APP_NAME);
    std::fs::create_dir_all(&dir).map_err(|e| format!("Failed to create config dir: {e}"))?;
    Ok(dir)
}

/// Path to the persisted audit log.
///
/// # Errors
///
/// Propagates [`config_dir`] failures.
pub fn audit_path() -> Result<PathBuf, String> {
    Ok(config_dir()?.join(constants::AUDIT_FILE_NAME))
}

/// Path to the configuration file (which may not exist).
///
/// # Errors
///
/// Propagates [`config_dir`] failures.
pub fn config_path() -> Result<PathBuf, String> {
    Ok(config_dir()?.join(constants::CONFIG_FILE_NAME))
}

/// Render a unix timestamp as a relative age like "12s ago" or "3m ago".
#[must_use]
pub fn format_age(timestamp: u64) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let elapsed = now.saturating_sub(timestamp);

    if elapsed < 60 {
        format!("{elapsed}s ago")
    } else if elapsed < 3600 {
        format!("{}m ago", elapsed / 60)
    } else if elapsed < 86400 {
        format!("{}h ago", elapsed / 3600)
    } else {
        format!("{}d ago", elapsed / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    #[test]
    fn test_format_age_seconds() {
        let age = format_age(now_secs());
        assert!(age.ends_with("s ago"), "{age}");
    }

    #[test]
    fn test_format_age_minutes() {
        assert_eq!(format_age(now_secs() - 120), "2m ago");
    }

    #[test]
    fn test_format_age_hours() {
        assert_eq!(format_age(now_secs() - 7200), "2h ago");
    }

    #[test]
    fn test_format_age_days() {
        assert_eq!(format_age(now_secs() - 172_800), "2d ago");
    }
}
