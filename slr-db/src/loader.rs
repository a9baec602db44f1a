//! CSV loading for the in-memory launch table.
//!
//! Expected format (with headers, matched by name):
//! `,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category`
//!
//! Only `Launch Site`, `class`, `Payload Mass (kg)` and
//! `Booster Version Category` are required.

use crate::Database;
use rusqlite::params;
use slr_launch::LaunchRecord;

impl Database {
    /// Parse `csv_data` and insert every launch. Returns the number loaded.
    ///
    /// Parsing happens before any insert, so a malformed file leaves the
    /// table untouched.
    ///
    /// # Example CSV
    /// ```text
    /// ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
    /// 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
    /// ```
    pub fn load_launches(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = LaunchRecord::parse_launch_csv(csv_data)?;
        self.insert_launches(&records)?;
        Ok(records.len())
    }

    /// Insert already-parsed launches in a single transaction.
    pub fn insert_launches(&self, records: &[LaunchRecord]) -> anyhow::Result<()> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO launches
                 (flight_number, launch_site, class, payload_mass_kg, booster_version, booster_version_category)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for r in records {
                stmt.execute(params![
                    r.flight_number,
                    r.launch_site,
                    r.class,
                    r.payload_mass_kg,
                    r.booster_version,
                    r.booster_version_category,
                ])?;
            }
        }
        tx.commit()?;
        log::info!("[SLR] loader: Loaded {} launches", records.len());
        Ok(())
    }
}
