use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::path::PathBuf;

/// An open SQLite connection with the schema migrated to the latest version.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database configured in `config.json` or `SCHEDULER_DBFILE`.
    pub fn new() -> Result<Db> {
        let config = Config::read()?;
        Self::open(&config.db_file())
    }

    /// Opens `db_file`, resolved against the data directory unless absolute.
    pub fn open(db_file: &str) -> Result<Db> {
        let mut conn = Self::connect(db_file)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Fresh private database, used by tests and dry runs.
    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn path(db_file: &str) -> Result<PathBuf> {
        DataStorage::new().get_path(db_file)
    }

    fn connect(db_file: &str) -> Result<Connection> {
        let db_file_path = Self::path(db_file)?;
        let conn = Connection::open(&db_file_path)?;
        msg_debug!(Message::DbOpened(db_file_path.display().to_string()));

        Ok(conn)
    }
}
