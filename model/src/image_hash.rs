use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque CDN image hash. Animated assets carry an `a_` prefix on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageHash {
    animated: bool,
    data: u128,
}

impl ImageHash {
    pub fn is_animated(&self) -> bool {
        self.animated
    }
}

impl Serialize for ImageHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ImageHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        let animated = raw.starts_with("a_");
        let hash = raw.trim_start_matches("a_");
        let data = u128::from_str_radix(hash, 16).map_err(Error::custom)?;

        Ok(ImageHash { animated, data })
    }
}

impl fmt::Display for ImageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.animated {
            write!(f, "a_{:032x}", self.data)
        } else {
            write!(f, "{:032x}", self.data)
        }
    }
}
