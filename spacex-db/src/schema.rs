//! SQL schema for the in-memory launch database.

/// Returns the full SQL schema as a single batch string.
///
/// `id` is assigned in insertion order, which is source-file order; queries
/// that must preserve "first seen" ordering sort on `MIN(id)`.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS launches (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        flight_number INTEGER,
        launch_site TEXT NOT NULL,
        payload_mass_kg REAL NOT NULL,
        booster_version TEXT,
        booster_version_category TEXT NOT NULL,
        class INTEGER NOT NULL CHECK (class IN (0, 1))
    );
    CREATE INDEX IF NOT EXISTS idx_launches_site ON launches(launch_site);
    CREATE INDEX IF NOT EXISTS idx_launches_payload ON launches(payload_mass_kg);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_table_and_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for (kind, name) in [
            ("table", "launches"),
            ("index", "idx_launches_site"),
            ("index", "idx_launches_payload"),
        ] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = ?1 AND name = ?2",
                    [kind, name],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "{} '{}' should exist", kind, name);
        }
    }

    #[test]
    fn schema_rejects_non_binary_class() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        let result = conn.execute(
            "INSERT INTO launches (launch_site, payload_mass_kg, booster_version_category, class)
             VALUES ('SiteA', 500.0, 'v1', 2)",
            [],
        );
        assert!(result.is_err(), "class outside 0/1 should violate the CHECK");
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
