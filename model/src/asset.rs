use crate::{ImageHash, Snowflake};
use std::fmt;

const CDN_URL: &str = "https://cdn.discordapp.com";
const DEFAULT_SIZE: u16 = 1024;

/// Fully qualified CDN locator for an image belonging to some entity.
///
/// Construction is infallible and purely string formatting; whether the asset
/// actually exists is the CDN's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    url: String,
    animated: bool,
}

impl Asset {
    fn new(path: String, animated: bool) -> Asset {
        let extension = if animated { "gif" } else { "png" };

        Asset {
            url: format!("{}/{}.{}?size={}", CDN_URL, path, extension, DEFAULT_SIZE),
            animated,
        }
    }

    pub(crate) fn from_app_icon(application_id: Snowflake, hash: &ImageHash) -> Asset {
        // App icons are never animated
        Asset::new(format!("app-icons/{}/{}", application_id, hash), false)
    }

    pub(crate) fn from_cover_image(application_id: Snowflake, hash: &ImageHash) -> Asset {
        Asset::new(
            format!("app-assets/{}/store/{}", application_id, hash),
            false,
        )
    }

    pub(crate) fn from_team_icon(team_id: Snowflake, hash: &ImageHash) -> Asset {
        Asset::new(format!("team-icons/{}/{}", team_id, hash), false)
    }

    pub(crate) fn from_guild_icon(guild_id: Snowflake, hash: &ImageHash) -> Asset {
        Asset::new(format!("icons/{}/{}", guild_id, hash), hash.is_animated())
    }

    pub(crate) fn from_user_avatar(user_id: Snowflake, hash: &ImageHash) -> Asset {
        Asset::new(format!("avatars/{}/{}", user_id, hash), hash.is_animated())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
