use crate::error::ProviderError;

/// Every Gemini API key starts with this.
pub const KEY_PREFIX: &str = "AIza";

pub const MIN_KEY_LENGTH: usize = 30;

/// Substrings that mark a copied-in sample value rather than a real key.
const PLACEHOLDER_MARKERS: [&str; 7] = [
    "your-key",
    "your_key",
    "placeholder",
    "example",
    "test",
    "demo",
    "xxxx",
];

/// Reject keys that cannot possibly work, so an obviously fake key falls
/// back to the static tiers instead of producing a failed upstream call.
pub fn check_credential(key: Option<&str>) -> Result<&str, ProviderError> {
    let key = key.map(str::trim).unwrap_or_default();
    if key.is_empty() {
        return Err(ProviderError::MissingCredential);
    }
    if key.chars().count() < MIN_KEY_LENGTH {
        return Err(ProviderError::UnusableCredential("too short"));
    }
    if !key.starts_with(KEY_PREFIX) {
        return Err(ProviderError::UnusableCredential("unexpected prefix"));
    }

    let lowered = key.to_lowercase();
    if PLACEHOLDER_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        return Err(ProviderError::UnusableCredential("looks like a placeholder"));
    }

    Ok(key)
}

pub fn is_usable(key: Option<&str>) -> bool {
    check_credential(key).is_ok()
}
