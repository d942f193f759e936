use url::form_urlencoded;

pub const DEFAULT_AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/initials/svg";

/// Maps a seed string to an image URL. Implementations must be pure.
pub trait AvatarGenerator: Send + Sync {
    fn avatar_url(&self, seed: &str) -> String;
}

/// Seed used for generated avatars: first and last name with no separator.
pub fn avatar_seed(firstname: &str, lastname: &str) -> String {
    format!("{firstname}{lastname}")
}

#[derive(Debug, Clone)]
pub struct DiceBearAvatars {
    base_url: String,
}

impl DiceBearAvatars {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for DiceBearAvatars {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_BASE_URL)
    }
}

impl AvatarGenerator for DiceBearAvatars {
    fn avatar_url(&self, seed: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(seed.as_bytes()).collect();
        format!("{}?seed={encoded}", self.base_url.trim_end_matches('?'))
    }
}
