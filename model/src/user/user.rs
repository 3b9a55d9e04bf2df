use serde::{Deserialize, Serialize};

use crate::{Asset, Discriminator, ImageHash, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    #[serde(default)]
    pub discriminator: Discriminator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    pub avatar: Option<ImageHash>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<u64>,
}

impl User {
    /// The display name if set, the username otherwise.
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }

    pub fn avatar_asset(&self) -> Option<Asset> {
        self.avatar
            .as_ref()
            .map(|hash| Asset::from_user_avatar(self.id, hash))
    }
}
