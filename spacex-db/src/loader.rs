//! CSV loading for the launch table.
//!
//! Rows are parsed into [`LaunchRecord`]s by `spacex_records` (which owns the
//! column schema) and inserted in file order, so `launches.id` reflects the
//! order in which sites and booster categories were first seen.

use crate::Database;
use rusqlite::params;
use spacex_records::{parse_launch_csv, LaunchRecord};

impl Database {
    /// Load launch records from a CSV string. Returns the number of rows loaded.
    ///
    /// Expected format (with headers): see [`spacex_records::parse_launch_csv`].
    /// The whole file is parsed before anything is inserted, so a malformed
    /// row leaves the database untouched.
    pub fn load_launches(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = parse_launch_csv(csv_data)?;
        self.insert_launches(&records)?;
        log::info!("[SpaceX] loader: Loaded {} launches", records.len());
        Ok(records.len())
    }

    /// Insert already-parsed launch records.
    pub fn insert_launches(&self, records: &[LaunchRecord]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO launches
                 (flight_number, launch_site, payload_mass_kg, booster_version, booster_version_category, class)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for r in records {
                stmt.execute(params![
                    r.flight_number,
                    r.launch_site,
                    r.payload_mass_kg,
                    r.booster_version,
                    r.booster_version_category,
                    r.class.as_flag(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::SAMPLE_CSV;
    use crate::Database;

    #[test]
    fn load_launches_from_csv() {
        let db = Database::new().unwrap();
        let loaded = db.load_launches(SAMPLE_CSV).unwrap();
        assert_eq!(loaded, 8);

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 8);

        let (site, payload, booster): (String, f64, String) = conn
            .query_row(
                "SELECT launch_site, payload_mass_kg, booster_version FROM launches WHERE flight_number = 6",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(site, "VAFB SLC-4E");
        assert!((payload - 9600.0).abs() < 0.01);
        assert_eq!(booster, "F9 FT B1029.1");
    }

    #[test]
    fn load_preserves_file_order() {
        let db = Database::new().unwrap();
        db.load_launches(SAMPLE_CSV).unwrap();

        let conn = db.conn.borrow();
        let mut stmt = conn
            .prepare("SELECT flight_number FROM launches ORDER BY id")
            .unwrap();
        let flights: Vec<i64> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(flights, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn malformed_row_loads_nothing() {
        let db = Database::new().unwrap();
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
SiteA,500,v1,1
SiteB,not-a-number,v1,0
";
        assert!(db.load_launches(csv).is_err());
        assert_eq!(db.query_launch_count().unwrap(), 0);
    }
}
