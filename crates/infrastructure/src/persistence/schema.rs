//! Startup schema validation
//!
//! The entity definitions are declared here rather than discovered from
//! the store. Validation runs once when the pool is created and fails
//! with an error naming every missing table and column, so a mispointed
//! or half-built dataset is rejected before the server accepts traffic.

use std::collections::HashSet;

use rusqlite::Connection;

use super::connection::DatabaseError;

/// A table the dataset must contain, with the columns the queries touch
struct TableSpec {
    name: &'static str,
    columns: &'static [&'static str],
}

/// Declared schema of the climate dataset
const EXPECTED_TABLES: &[TableSpec] = &[
    TableSpec {
        name: "measurement",
        columns: &["station", "date", "prcp", "tobs"],
    },
    TableSpec {
        name: "station",
        columns: &["station", "name", "latitude", "longitude", "elevation"],
    },
];

/// Validate the dataset against the declared schema
pub fn validate(conn: &Connection) -> Result<(), DatabaseError> {
    let mut problems = Vec::new();

    for table in EXPECTED_TABLES {
        if !table_exists(conn, table.name)? {
            problems.push(format!("missing table '{}'", table.name));
            continue;
        }

        let present = column_names(conn, table.name)?;
        for column in table.columns {
            if !present.contains(*column) {
                problems.push(format!("table '{}' missing column '{column}'", table.name));
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(DatabaseError::SchemaMismatch(problems.join(", ")))
    }
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn column_names(conn: &Connection, table: &str) -> Result<HashSet<String>, DatabaseError> {
    // `table` comes from the static declarations above, never from input
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<HashSet<_>, _>>()?;
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    fn create_full_schema(conn: &Connection) {
        conn.execute_batch(
            "CREATE TABLE measurement (
                id INTEGER PRIMARY KEY,
                station TEXT,
                date TEXT,
                prcp FLOAT,
                tobs FLOAT
            );
            CREATE TABLE station (
                id INTEGER PRIMARY KEY,
                station TEXT,
                name TEXT,
                latitude FLOAT,
                longitude FLOAT,
                elevation FLOAT
            );",
        )
        .unwrap();
    }

    #[test]
    fn accepts_complete_schema() {
        let conn = open();
        create_full_schema(&conn);
        assert!(validate(&conn).is_ok());
    }

    #[test]
    fn rejects_empty_database_naming_both_tables() {
        let conn = open();
        let err = validate(&conn).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missing table 'measurement'"));
        assert!(msg.contains("missing table 'station'"));
    }

    #[test]
    fn rejects_missing_column() {
        let conn = open();
        conn.execute_batch(
            "CREATE TABLE measurement (station TEXT, date TEXT, prcp FLOAT);
             CREATE TABLE station (station TEXT, name TEXT, latitude FLOAT,
                                   longitude FLOAT, elevation FLOAT);",
        )
        .unwrap();

        let err = validate(&conn).unwrap_err();
        assert!(
            err.to_string()
                .contains("table 'measurement' missing column 'tobs'")
        );
    }

    #[test]
    fn ignores_extra_tables_and_columns() {
        let conn = open();
        create_full_schema(&conn);
        conn.execute_batch("CREATE TABLE extra (x TEXT);").unwrap();
        assert!(validate(&conn).is_ok());
    }
}
