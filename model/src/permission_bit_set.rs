use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::fmt::Formatter;

/// Permissions bitfield, transmitted as a decimal string on the wire.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PermissionBitSet(pub u64);

impl PermissionBitSet {
    pub fn has_permission(&self, permission: Permission) -> bool {
        let perm = permission as u64;
        self.0 & perm == perm
    }

    pub fn has_all(&self, permissions: &[Permission]) -> bool {
        let sum = Permission::sum(permissions);
        self.0 & sum == sum
    }
}

impl Serialize for PermissionBitSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for PermissionBitSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(PermissionBitSet(
            String::deserialize(deserializer)?
                .parse()
                .map_err(Error::custom)?,
        ))
    }
}

impl fmt::Display for PermissionBitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone)]
#[repr(u64)]
pub enum Permission {
    CreateInstantInvite = 1 << 0,
    KickMembers = 1 << 1,
    BanMembers = 1 << 2,
    Administrator = 1 << 3,
    ManageChannels = 1 << 4,
    ManageGuild = 1 << 5,
    AddReactions = 1 << 6,
    ViewAuditLog = 1 << 7,
    ViewChannel = 1 << 10,
    SendMessages = 1 << 11,
    ManageMessages = 1 << 13,
    EmbedLinks = 1 << 14,
    AttachFiles = 1 << 15,
    ReadMessageHistory = 1 << 16,
    MentionEveryone = 1 << 17,
    UseExternalEmojis = 1 << 18,
    ChangeNickname = 1 << 26,
    ManageNicknames = 1 << 27,
    ManageRoles = 1 << 28,
    ManageWebhooks = 1 << 29,
    ManageGuildExpressions = 1 << 30,
    UseApplicationCommands = 1 << 31,
    ManageThreads = 1 << 34,
    CreatePublicThreads = 1 << 35,
    CreatePrivateThreads = 1 << 36,
    SendMessagesInThreads = 1 << 38,
    ModerateMembers = 1 << 40,
}

impl Permission {
    pub fn sum(permissions: &[Permission]) -> u64 {
        let mut sum = 0;
        permissions
            .iter()
            .copied()
            .for_each(|perm| sum |= perm as u64);
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_from_decimal_string() {
        let bits: PermissionBitSet = serde_json::from_str(r#""2048""#).unwrap();

        assert!(bits.has_permission(Permission::SendMessages));
        assert!(!bits.has_permission(Permission::ManageGuild));
    }

    #[test]
    fn has_all_requires_every_bit() {
        let bits = PermissionBitSet(
            Permission::SendMessages as u64 | Permission::EmbedLinks as u64,
        );

        assert!(bits.has_all(&[Permission::SendMessages, Permission::EmbedLinks]));
        assert!(!bits.has_all(&[Permission::SendMessages, Permission::ManageGuild]));
    }

    #[test]
    fn serialize_back_to_string() {
        let json = serde_json::to_string(&PermissionBitSet(8)).unwrap();
        assert_eq!(json, r#""8""#);
    }
}
