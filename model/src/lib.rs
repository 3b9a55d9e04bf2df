mod snowflake;
pub use snowflake::Snowflake;

mod discriminator;
pub use discriminator::Discriminator;

mod image_hash;
pub use image_hash::ImageHash;

mod permission_bit_set;
pub use permission_bit_set::{Permission, PermissionBitSet};

mod asset;
pub use asset::Asset;

mod message;
pub use message::{Message, MessageType};

pub mod application;
pub mod guild;
pub mod interaction;
pub mod user;

mod util;
