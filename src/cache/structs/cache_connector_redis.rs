use redis::aio::MultiplexedConnection;

#[derive(Debug, Clone)]
pub struct CacheConnectorRedis {
    pub(crate) connection: MultiplexedConnection,
    pub(crate) key_prefix: String,
    pub(crate) tag_prefix: String,
    pub(crate) default_expire: u64,
}
