#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use std::env;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use r2d2::Error;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type Connection = PooledConnection<ConnectionManager<PgConnection>>;
pub mod models;
pub mod polls;
pub mod schema;
pub mod store;

pub use store::{MemoryStore, PgStore, PollStore};

pub fn get_conn(pool: &PgPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err
    })
}

pub fn new_pool(database_url: &str) -> Result<PgPool, Error> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);

    Pool::builder().build(manager).map_err(|err| {
        error!("Failed to create db pool - {}", err.to_string());
        err
    })
}

/// Builds a pool from `DATABASE_URL`, or `None` when it is not set.
pub fn pool_from_env() -> Option<Result<PgPool, Error>> {
    env::var("DATABASE_URL").ok().map(|url| new_pool(&url))
}
