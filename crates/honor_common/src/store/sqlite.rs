//! SQLite-backed override store.
//!
//! Two single-column tables, one per set. Saves reconcile by diff: re-read
//! the stored rows, delete what the new state dropped, insert what it added.
//! Rows a request never touched survive out-of-band edits.

use crate::error::HonorError;
use crate::memory::MemoryState;
use rusqlite::{params, Connection, TransactionBehavior};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create the database at `path`.
    pub fn open(path: &Path, busy_timeout: Duration) -> Result<Self, HonorError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn load(&self) -> Result<MemoryState, HonorError> {
        let conn = self.conn.lock().unwrap();
        Ok(read_state(&conn)?)
    }

    pub fn save(&self, state: &MemoryState) -> Result<(), HonorError> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        write_diff(&tx, state)?;
        tx.commit()?;
        Ok(())
    }

    /// Load, mutate and save inside a single write transaction.
    pub fn update<R>(&self, mutate: impl FnOnce(&mut MemoryState) -> R) -> Result<R, HonorError> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let mut state = read_state(&tx)?;
        let out = mutate(&mut state);
        write_diff(&tx, &state)?;
        tx.commit()?;
        Ok(out)
    }
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS honorable (phrase TEXT PRIMARY KEY)",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS dishonorable (phrase TEXT PRIMARY KEY)",
        [],
    )?;
    Ok(())
}

fn read_state(conn: &Connection) -> rusqlite::Result<MemoryState> {
    Ok(MemoryState {
        honorable: read_set(conn, "honorable")?,
        dishonorable: read_set(conn, "dishonorable")?,
    })
}

fn read_set(conn: &Connection, table: &str) -> rusqlite::Result<BTreeSet<String>> {
    let mut stmt = conn.prepare(&format!("SELECT phrase FROM {}", table))?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

fn write_diff(conn: &Connection, state: &MemoryState) -> rusqlite::Result<()> {
    let stored = read_state(conn)?;
    reconcile(conn, "honorable", &stored.honorable, &state.honorable)?;
    reconcile(conn, "dishonorable", &stored.dishonorable, &state.dishonorable)?;
    Ok(())
}

/// Bring one table in line with the target set: delete rows the state
/// dropped, insert rows it added.
fn reconcile(
    conn: &Connection,
    table: &str,
    stored: &BTreeSet<String>,
    target: &BTreeSet<String>,
) -> rusqlite::Result<()> {
    for phrase in stored.difference(target) {
        conn.execute(
            &format!("DELETE FROM {} WHERE phrase = ?1", table),
            params![phrase],
        )?;
    }
    for phrase in target.difference(stored) {
        conn.execute(
            &format!("INSERT OR IGNORE INTO {} (phrase) VALUES (?1)", table),
            params![phrase],
        )?;
    }
    Ok(())
}
