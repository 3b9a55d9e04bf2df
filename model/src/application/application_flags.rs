use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

/// Public application flags bitfield, a plain integer on the wire.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ApplicationFlags(pub u64);

impl ApplicationFlags {
    pub fn has_flag(&self, flag: ApplicationFlag) -> bool {
        let flag = flag as u64;
        self.0 & flag == flag
    }
}

impl fmt::Display for ApplicationFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Copy, Clone)]
#[repr(u64)]
pub enum ApplicationFlag {
    AutoModerationRuleCreateBadge = 1 << 6,
    GatewayPresence = 1 << 12,
    GatewayPresenceLimited = 1 << 13,
    GatewayGuildMembers = 1 << 14,
    GatewayGuildMembersLimited = 1 << 15,
    VerificationPendingGuildLimit = 1 << 16,
    Embedded = 1 << 17,
    GatewayMessageContent = 1 << 18,
    GatewayMessageContentLimited = 1 << 19,
    ApplicationCommandBadge = 1 << 23,
}
