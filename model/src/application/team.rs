use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::user::User;
use crate::{Asset, ImageHash, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Team {
    pub id: Snowflake,
    pub name: Box<str>,
    pub icon: Option<ImageHash>,
    pub owner_user_id: Snowflake,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

impl Team {
    pub fn icon_asset(&self) -> Option<Asset> {
        self.icon
            .as_ref()
            .map(|hash| Asset::from_team_icon(self.id, hash))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamMember {
    pub user: User,
    pub team_id: Snowflake,
    pub membership_state: MembershipState,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum MembershipState {
    Invited = 1,
    Accepted = 2,
}
