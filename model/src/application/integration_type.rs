use super::InstallParams;
use crate::util;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Installation context for an application.
///
/// Unrecognised values are preserved as opaque integers so future platform
/// additions do not fail deserialization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IntegrationType {
    Guild,
    User,
    Unknown(u8),
}

impl IntegrationType {
    pub fn value(&self) -> u8 {
        match self {
            IntegrationType::Guild => 0,
            IntegrationType::User => 1,
            IntegrationType::Unknown(value) => *value,
        }
    }
}

impl From<u8> for IntegrationType {
    fn from(value: u8) -> Self {
        match value {
            0 => IntegrationType::Guild,
            1 => IntegrationType::User,
            value => IntegrationType::Unknown(value),
        }
    }
}

// Map keys in `integration_types_config` are stringified small integers;
// other positions send them as raw integers. Accept both, emit the string
// form so round-trips match the wire.
impl Serialize for IntegrationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value().to_string())
    }
}

impl<'de> Deserialize<'de> for IntegrationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        if let Some(i) = value.as_u64() {
            return Ok(IntegrationType::from(i as u8));
        }

        if let Some(s) = value.as_str() {
            return s
                .parse::<u8>()
                .map(IntegrationType::from)
                .map_err(Error::custom);
        }

        Err(Error::invalid_type(
            util::to_unexpected(value),
            &"a string or u8",
        ))
    }
}

impl fmt::Display for IntegrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Per installation context configuration. A null configuration on the wire
/// becomes an empty one.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct IntegrationTypeConfiguration {
    #[serde(
        rename = "oauth2_install_params",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub install_params: Option<InstallParams>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_parse_from_strings_and_ints() {
        let guild: IntegrationType = serde_json::from_str(r#""0""#).unwrap();
        let user: IntegrationType = serde_json::from_str("1").unwrap();

        assert_eq!(guild, IntegrationType::Guild);
        assert_eq!(user, IntegrationType::User);
    }

    #[test]
    fn unknown_values_are_preserved() {
        let unknown: IntegrationType = serde_json::from_str(r#""7""#).unwrap();

        assert_eq!(unknown, IntegrationType::Unknown(7));
        assert_eq!(serde_json::to_string(&unknown).unwrap(), r#""7""#);
    }

    #[test]
    fn null_install_params_is_none() {
        let config: IntegrationTypeConfiguration =
            serde_json::from_str(r#"{"oauth2_install_params": null}"#).unwrap();

        assert!(config.install_params.is_none());
    }

    #[test]
    fn empty_config_is_none() {
        let config: IntegrationTypeConfiguration = serde_json::from_str("{}").unwrap();

        assert!(config.install_params.is_none());
    }
}
