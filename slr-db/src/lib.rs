//! In-memory SQLite database layer for SpaceX launch records.
//!
//! The launch CSV is parsed into [`slr_launch::LaunchRecord`]s and inserted
//! into a single `launches` table. Chart data is pulled out through typed
//! query methods returning serializable structs from [`models`].
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV data usually comes from `slr_launch::LAUNCH_CSV` (embedded at compile time)
//!
//! # Usage
//!
//! ```rust
//! use slr_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_launches("Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC LC-39A,1,2490,FT\n").unwrap();
//!
//! let totals = db.query_success_by_site().unwrap();
//! assert_eq!(totals[0].successes, 1);
//! ```
//!
//! Per-site totals and outcome counts are derived on the fly with
//! `GROUP BY` queries; nothing derived is stored.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the launch table.
///
/// Cheaply cloneable (via `Rc`) for sharing across Dioxus components in
/// single-threaded WASM.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use
    /// [`load_launches`](Self::load_launches) to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        assert!(Database::new().is_ok());
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_launches(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC LC-39A,1,2490,FT\n",
        )
        .unwrap();
        assert_eq!(
            db2.query_launch_count().unwrap(),
            1,
            "Clone should see same data via shared Rc"
        );
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert_eq!(db.query_launch_count().unwrap(), 0);
        assert!(db.query_payload_bounds().unwrap().is_none());
    }
}
