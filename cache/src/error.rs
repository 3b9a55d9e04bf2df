pub type Result<T> = std::result::Result<T, CacheError>;

#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("The store for this entity type is disabled")]
    StoreDisabled,
}

impl<T> From<CacheError> for Result<T> {
    fn from(e: CacheError) -> Self {
        Err(e)
    }
}
