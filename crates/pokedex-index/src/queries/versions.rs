use rusqlite::Connection;

use crate::Result;

pub fn list(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT identifier FROM versions ORDER BY id")?;

    let versions = stmt
        .query_map([], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, _>>()?;

    Ok(versions)
}

pub fn exists(conn: &Connection, version: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM versions WHERE identifier = ?1",
        [version],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
