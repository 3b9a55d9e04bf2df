use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;

use super::{ComponentType, ModalInteraction};
use crate::guild::Member;
use crate::user::User;
use crate::{Message, PermissionBitSet, Snowflake};

/// An inbound interaction, dispatched on the envelope's `type` field.
///
/// Application command interactions are not part of this crate's surface;
/// payloads carrying them fail deserialization.
#[derive(Serialize, Debug)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Interaction {
    Ping(Box<PingInteraction>),
    MessageComponent(Box<MessageComponentInteraction>),
    ModalSubmit(Box<ModalInteraction>),
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    MessageComponent = 3,
    ModalSubmit = 5,
}

impl TryFrom<u64> for InteractionType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Ping,
            3 => Self::MessageComponent,
            5 => Self::ModalSubmit,
            _ => return Err(format!("unsupported interaction type \"{}\"", value).into_boxed_str()),
        })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PingInteraction {
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub r#type: InteractionType,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageComponentInteraction {
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub r#type: InteractionType,
    pub message: Message,
    pub data: MessageComponentInteractionData,
    pub guild_id: Option<Snowflake>,
    pub channel_id: Snowflake,
    pub member: Option<Member>,
    pub user: Option<User>,
    pub token: Box<str>,
    #[serde(default)]
    pub locale: Option<Box<str>>,
    #[serde(default)]
    pub app_permissions: Option<PermissionBitSet>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageComponentInteractionData {
    pub custom_id: Box<str>,
    pub component_type: ComponentType,
    /// Chosen values when the component is a select menu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Box<str>>>,
}

impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let interaction_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| Box::from("interaction type was not an integer"))
            .and_then(InteractionType::try_from)
            .map_err(D::Error::custom)?;

        let interaction = match interaction_type {
            InteractionType::Ping => serde_json::from_value(value).map(Interaction::Ping),
            InteractionType::MessageComponent => {
                serde_json::from_value(value).map(Interaction::MessageComponent)
            }
            InteractionType::ModalSubmit => {
                serde_json::from_value(value).map(Interaction::ModalSubmit)
            }
        }
        .map_err(D::Error::custom)?;

        Ok(interaction)
    }
}
