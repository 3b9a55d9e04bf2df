use super::Result;

use async_trait::async_trait;
use model::guild::Guild;
use model::user::User;
use model::Snowflake;

/// Shared connection state provider: resolves the entities that model
/// objects reference only by id.
///
/// Model objects never hold this state; lookups happen at the call site, e.g.
/// resolving `AppInfo::guild_id` through [`Cache::get_guild`]. Reads never
/// mutate the store.
#[async_trait]
pub trait Cache: Send + Sync + 'static {
    async fn store_guild(&self, guild: Guild) -> Result<()>;
    async fn store_guilds(&self, guilds: Vec<Guild>) -> Result<()>;
    async fn get_guild(&self, id: Snowflake) -> Result<Option<Guild>>;
    async fn delete_guild(&self, id: Snowflake) -> Result<()>;
    async fn get_guild_count(&self) -> Result<usize>;

    async fn store_user(&self, user: User) -> Result<()>;
    async fn store_users(&self, users: Vec<User>) -> Result<()>;
    async fn get_user(&self, id: Snowflake) -> Result<Option<User>>;
    async fn delete_user(&self, id: Snowflake) -> Result<()>;
}
