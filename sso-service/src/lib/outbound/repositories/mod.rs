pub mod memory;
pub mod postgres;

pub use memory::InMemoryStorage;
pub use postgres::PostgresStorage;
