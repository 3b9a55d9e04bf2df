/// Which entity classes the cache retains. Disabled classes drop writes
/// silently and fail reads with `StoreDisabled`.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    pub users: bool,
    pub guilds: bool,
}

impl Options {
    pub fn new(users: bool, guilds: bool) -> Options {
        Options { users, guilds }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            users: true,
            guilds: true,
        }
    }
}
