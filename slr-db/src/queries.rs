//! Typed query methods for retrieving chart data from the launch table.
//!
//! Grouped results keep the order in which each group key first appears in
//! the source CSV (`ORDER BY MIN(id)`).

use crate::models::{OutcomeCount, PayloadOutcome, SiteSummary, SiteTotal};
use crate::Database;
use rusqlite::params;

impl Database {
    /// Sum of the outcome class per launch site, i.e. successes per site.
    ///
    /// Every site with at least one launch appears, including sites whose
    /// total is zero.
    pub fn query_success_by_site(&self) -> anyhow::Result<Vec<SiteTotal>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site, SUM(class)
             FROM launches
             GROUP BY launch_site
             ORDER BY MIN(id)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteTotal {
                    launch_site: row.get(0)?,
                    successes: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[SLR] query: query_success_by_site returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Count of launches per outcome class at one site.
    ///
    /// Returns at most two rows; an unknown site yields an empty result.
    pub fn query_outcome_counts(&self, launch_site: &str) -> anyhow::Result<Vec<OutcomeCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT class, COUNT(*)
             FROM launches
             WHERE launch_site = ?1
             GROUP BY class
             ORDER BY MIN(id)",
        )?;
        let rows = stmt
            .query_map(params![launch_site], |row| {
                Ok(OutcomeCount {
                    class: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[SLR] query: query_outcome_counts({}) returned {} records",
            launch_site,
            rows.len()
        );
        Ok(rows)
    }

    /// Launches with `low <= payload <= high`, optionally restricted to one
    /// site, in file order.
    pub fn query_payload_outcomes(
        &self,
        launch_site: Option<&str>,
        low: f64,
        high: f64,
    ) -> anyhow::Result<Vec<PayloadOutcome>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT flight_number, launch_site, payload_mass_kg, class,
                    booster_version, booster_version_category
             FROM launches
             WHERE payload_mass_kg >= ?1 AND payload_mass_kg <= ?2
               AND (?3 IS NULL OR launch_site = ?3)
             ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![low, high, launch_site], |row| {
                Ok(PayloadOutcome {
                    flight_number: row.get(0)?,
                    launch_site: row.get(1)?,
                    payload_mass_kg: row.get(2)?,
                    class: row.get(3)?,
                    booster_version: row.get(4)?,
                    booster_version_category: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[SLR] query: query_payload_outcomes({:?}, {}, {}) returned {} records",
            launch_site,
            low,
            high,
            rows.len()
        );
        Ok(rows)
    }

    /// Global (min, max) payload mass, or `None` when the table is empty.
    pub fn query_payload_bounds(&self) -> anyhow::Result<Option<(f64, f64)>> {
        let conn = self.conn.borrow();
        let (min, max) = conn.query_row(
            "SELECT MIN(payload_mass_kg), MAX(payload_mass_kg) FROM launches",
            [],
            |row| Ok((row.get::<_, Option<f64>>(0)?, row.get::<_, Option<f64>>(1)?)),
        )?;
        Ok(min.zip(max))
    }

    /// Launch and success counts for every site present in the table.
    pub fn query_site_summaries(&self) -> anyhow::Result<Vec<SiteSummary>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site, COUNT(*), SUM(class)
             FROM launches
             GROUP BY launch_site
             ORDER BY MIN(id)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteSummary {
                    launch_site: row.get(0)?,
                    launches: row.get(1)?,
                    successes: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn query_launch_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use proptest::prelude::*;

    /// Helper to create a database with a small mixed-site sample.
    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,19,CCAFS LC-40,1,2034.0,F9 FT B1019,FT
2,6,VAFB SLC-4E,0,500.0,F9 v1.1 B1003,v1.1
3,29,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
4,28,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
5,32,KSC LC-39A,0,6070.0,F9 FT B1032.1,FT
6,30,KSC LC-39A,1,5600.0,F9 FT B1030,FT
7,48,CCAFS SLC-40,0,4230.0,F9 B4 B1044,B4
";
        db.load_launches(csv).unwrap();
        db
    }

    #[test]
    fn success_by_site_sums_class_in_first_seen_order() {
        let db = sample_db();
        let totals = db.query_success_by_site().unwrap();
        let flat: Vec<(&str, i64)> = totals
            .iter()
            .map(|t| (t.launch_site.as_str(), t.successes))
            .collect();
        assert_eq!(
            flat,
            vec![
                ("CCAFS LC-40", 1),
                ("VAFB SLC-4E", 1),
                ("KSC LC-39A", 2),
                ("CCAFS SLC-40", 0),
            ]
        );
    }

    #[test]
    fn outcome_counts_for_site() {
        let db = sample_db();
        let counts = db.query_outcome_counts("KSC LC-39A").unwrap();
        assert_eq!(counts.len(), 2);
        // First KSC row is a success
        assert_eq!((counts[0].class, counts[0].count), (1, 2));
        assert_eq!((counts[1].class, counts[1].count), (0, 1));
    }

    #[test]
    fn outcome_counts_single_class() {
        let db = sample_db();
        let counts = db.query_outcome_counts("CCAFS SLC-40").unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!((counts[0].class, counts[0].count), (0, 1));
    }

    #[test]
    fn outcome_counts_unknown_site_is_empty() {
        let db = sample_db();
        assert!(db.query_outcome_counts("Boca Chica").unwrap().is_empty());
    }

    #[test]
    fn payload_outcomes_bounds_inclusive() {
        let db = sample_db();
        let rows = db.query_payload_outcomes(None, 500.0, 2490.0).unwrap();
        let flights: Vec<Option<i64>> = rows.iter().map(|r| r.flight_number).collect();
        assert_eq!(flights, vec![Some(19), Some(6), Some(28)]);
    }

    #[test]
    fn payload_outcomes_filtered_by_site() {
        let db = sample_db();
        let rows = db
            .query_payload_outcomes(Some("KSC LC-39A"), 0.0, 10000.0)
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.launch_site == "KSC LC-39A"));
        assert_eq!(rows[0].booster_version_category, "FT");
    }

    #[test]
    fn payload_outcomes_empty_range() {
        let db = sample_db();
        let rows = db.query_payload_outcomes(None, 100.0, 100.0).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn payload_bounds() {
        let db = sample_db();
        assert_eq!(db.query_payload_bounds().unwrap(), Some((0.0, 9600.0)));
    }

    #[test]
    fn site_summaries_count_launches_and_successes() {
        let db = sample_db();
        let summaries = db.query_site_summaries().unwrap();
        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries[2].launch_site, "KSC LC-39A");
        assert_eq!(summaries[2].launches, 3);
        assert_eq!(summaries[2].successes, 2);
        assert_eq!(db.query_launch_count().unwrap(), 8);
    }

    proptest! {
        #[test]
        fn payload_outcomes_stay_in_range(a in 0.0f64..10_000.0, b in 0.0f64..10_000.0) {
            let (low, high) = (a.min(b), a.max(b));
            let db = sample_db();
            for row in db.query_payload_outcomes(None, low, high).unwrap() {
                prop_assert!(low <= row.payload_mass_kg && row.payload_mass_kg <= high);
            }
        }
    }
}
