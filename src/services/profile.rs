use crate::models::UserProfile;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a user profile
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a user profile from a JSON file
///
/// The profile store is read-only to the engine; editing and persistence
/// belong to the application shell.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile, ProfileError> {
    let json = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&json)?;
    info!(user_id = %profile.user_id, "profile loaded");
    Ok(profile)
}
