use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::{ComponentType, InteractionType};
use crate::guild::Member;
use crate::user::User;
use crate::{Message, PermissionBitSet, Snowflake};

/// A received "modal submitted" interaction.
///
/// Immutable after construction apart from the lazily memoized text value
/// map, which is written at most once.
#[derive(Serialize, Deserialize, Debug)]
pub struct ModalInteraction {
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub r#type: InteractionType,
    pub data: ModalInteractionData,
    pub guild_id: Option<Snowflake>,
    pub channel_id: Snowflake,
    pub member: Option<Member>,
    pub user: Option<User>,
    pub token: Box<str>,
    #[serde(default)]
    pub locale: Option<Box<str>>,
    #[serde(default)]
    pub guild_locale: Option<Box<str>>,
    #[serde(default)]
    pub app_permissions: Option<PermissionBitSet>,
    /// Set when the modal was opened in response to a component interaction.
    pub message: Option<Message>,
    #[serde(skip)]
    text_values: OnceLock<HashMap<Box<str>, Box<str>>>,
}

impl ModalInteraction {
    /// The custom id of the modal itself.
    pub fn custom_id(&self) -> &str {
        &self.data.custom_id
    }

    /// The invoking user: the member's user in guilds, the top level user in
    /// DMs.
    pub fn author(&self) -> Option<&User> {
        self.member
            .as_ref()
            .and_then(|member| member.user.as_ref())
            .or_else(|| self.user.as_ref())
    }

    /// Flattens the submitted action rows into their raw component payloads
    /// in row-major order. The iterator borrows the stored rows, so calling
    /// this again restarts from the beginning.
    pub fn walk_raw_components(&self) -> impl Iterator<Item = &ModalComponentData> + '_ {
        self.data
            .components
            .iter()
            .flat_map(|row| row.components.iter())
    }

    /// Text input values keyed by custom id, computed on first access and
    /// cached for the lifetime of the interaction. Null or missing values are
    /// normalised to the empty string; non text components are skipped.
    pub fn text_values(&self) -> &HashMap<Box<str>, Box<str>> {
        self.text_values.get_or_init(|| {
            self.walk_raw_components()
                .filter(|component| component.r#type == ComponentType::TextInput)
                .map(|component| {
                    (
                        component.custom_id.clone(),
                        component.value.clone().unwrap_or_default(),
                    )
                })
                .collect()
        })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ModalInteractionData {
    pub custom_id: Box<str>,
    pub components: Vec<ModalActionRow>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ModalActionRow {
    pub r#type: ComponentType,
    pub components: Vec<ModalComponentData>,
}

/// Partial component payload as echoed back by the platform. Only `type`,
/// `custom_id` and type-specific fields (a text input's `value`, a select's
/// `values`) are guaranteed; full component definitions are not echoed.
#[derive(Serialize, Deserialize, Debug)]
pub struct ModalComponentData {
    pub r#type: ComponentType,
    pub custom_id: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Box<str>>>,
}
