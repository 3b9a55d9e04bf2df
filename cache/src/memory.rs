use crate::{Cache, CacheError, Options, Result};

use async_trait::async_trait;
use dashmap::DashMap;
use model::guild::Guild;
use model::user::User;
use model::Snowflake;
use tracing::debug;

/// In-memory store backed by `DashMap`.
pub struct MemoryCache {
    opts: Options,
    guilds: DashMap<Snowflake, Guild>,
    users: DashMap<Snowflake, User>,
}

impl MemoryCache {
    pub fn new(opts: Options) -> Self {
        MemoryCache {
            opts,
            guilds: DashMap::new(),
            users: DashMap::new(),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        MemoryCache::new(Options::default())
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn store_guild(&self, guild: Guild) -> Result<()> {
        if !self.opts.guilds {
            return Ok(());
        }

        debug!(guild_id = %guild.id, "storing guild");
        self.guilds.insert(guild.id, guild);
        Ok(())
    }

    async fn store_guilds(&self, guilds: Vec<Guild>) -> Result<()> {
        if !self.opts.guilds {
            return Ok(());
        }

        for guild in guilds {
            self.guilds.insert(guild.id, guild);
        }
        Ok(())
    }

    async fn get_guild(&self, id: Snowflake) -> Result<Option<Guild>> {
        if !self.opts.guilds {
            return CacheError::StoreDisabled.into();
        }

        Ok(self.guilds.get(&id).map(|guild| guild.value().clone()))
    }

    async fn delete_guild(&self, id: Snowflake) -> Result<()> {
        if !self.opts.guilds {
            return Ok(());
        }

        self.guilds.remove(&id);
        Ok(())
    }

    async fn get_guild_count(&self) -> Result<usize> {
        Ok(self.guilds.len())
    }

    async fn store_user(&self, user: User) -> Result<()> {
        if !self.opts.users {
            return Ok(());
        }

        self.users.insert(user.id, user);
        Ok(())
    }

    async fn store_users(&self, users: Vec<User>) -> Result<()> {
        if !self.opts.users {
            return Ok(());
        }

        for user in users {
            self.users.insert(user.id, user);
        }
        Ok(())
    }

    async fn get_user(&self, id: Snowflake) -> Result<Option<User>> {
        if !self.opts.users {
            return CacheError::StoreDisabled.into();
        }

        Ok(self.users.get(&id).map(|user| user.value().clone()))
    }

    async fn delete_user(&self, id: Snowflake) -> Result<()> {
        if !self.opts.users {
            return Ok(());
        }

        self.users.remove(&id);
        Ok(())
    }
}
