use sqlx::{Pool, Sqlite};

#[derive(Debug, Clone)]
pub struct CacheConnectorSqlite {
    pub(crate) pool: Pool<Sqlite>,
    pub(crate) default_expire: u64,
}
