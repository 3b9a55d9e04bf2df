use serde::{Deserialize, Serialize};

use crate::{Asset, ImageHash, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Guild {
    pub id: Snowflake,
    pub name: Box<str>,
    pub icon: Option<ImageHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash: Option<ImageHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<ImageHash>,
    #[serde(serialize_with = "Snowflake::serialize_to_int")]
    pub owner_id: Snowflake,
    pub description: Option<Box<str>>,
    #[serde(default)]
    pub features: Vec<Box<str>>,
    #[serde(default)]
    pub preferred_locale: Box<str>,
    pub vanity_url_code: Option<Box<str>>,
    #[serde(default)]
    pub approximate_member_count: u32,
    #[serde(default)]
    pub approximate_presence_count: u32,
}

impl Guild {
    pub fn icon_asset(&self) -> Option<Asset> {
        self.icon
            .as_ref()
            .map(|hash| Asset::from_guild_icon(self.id, hash))
    }
}

impl PartialEq for Guild {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
