//! SQL schema for the in-memory launch database.

/// Returns the full SQL schema as a single batch string.
///
/// `id` is assigned in file order, so `ORDER BY id` (or `MIN(id)` per
/// group) reproduces the row order of the source CSV.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS launches (
        id INTEGER PRIMARY KEY,
        flight_number INTEGER,
        launch_site TEXT NOT NULL,
        class INTEGER NOT NULL CHECK (class IN (0, 1)),
        payload_mass_kg REAL NOT NULL,
        booster_version TEXT NOT NULL,
        booster_version_category TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_launch_site ON launches(launch_site);
    CREATE INDEX IF NOT EXISTS idx_launch_payload ON launches(payload_mass_kg);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_applies_twice() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema()).unwrap();
    }

    #[test]
    fn schema_rejects_non_binary_class() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        let result = conn.execute(
            "INSERT INTO launches (launch_site, class, payload_mass_kg, booster_version, booster_version_category)
             VALUES ('KSC LC-39A', 2, 100.0, '', 'FT')",
            [],
        );
        assert!(result.is_err());
    }
}
