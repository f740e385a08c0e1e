//! In-memory SQLite database layer for SpaceX launch records.
//!
//! The dashboard loads the launch CSV once at startup into an in-memory
//! SQLite database and answers every chart callback with typed queries
//! against it. Nothing writes to the database after the initial load.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper, cheap to clone and share across
//!   Dioxus components in single-threaded WASM
//! - CSV rows are parsed into typed [`spacex_records::LaunchRecord`]s first,
//!   so a missing column fails the load rather than a later query
//! - Query methods return serializable structs from [`models`]
//!
//! # Usage
//!
//! ```rust
//! use spacex_db::Database;
//! use spacex_records::{PayloadRange, SiteSelection};
//!
//! let db = Database::from_csv(
//!     "Launch Site,Payload Mass (kg),Booster Version Category,class\nSiteA,500,v1,1\n",
//! )
//! .unwrap();
//!
//! let sites = db.query_launch_sites().unwrap();
//! assert_eq!(sites, vec!["SiteA".to_string()]);
//!
//! let points = db
//!     .query_payload_outcomes(&SiteSelection::All, &PayloadRange::new(0.0, 10000.0))
//!     .unwrap();
//! assert_eq!(points.len(), 1);
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the launch table.
///
/// Clones share the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied and no rows.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database and load the launch CSV into it.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_launches(csv_data)?;
        Ok(db)
    }
}
