//! Schema definitions and migration runner for SurrealDB.
//!
//! Tables are SCHEMAFULL. UUIDs are stored as strings, enums as
//! lowercase strings guarded by ASSERT constraints.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct AppliedMigration {
    version: u32,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "users_cars_bookings",
    sql: SCHEMA_V1,
}];

const SCHEMA_V1: &str = "\
-- Users. Registration lives elsewhere; only role and image change here.
DEFINE TABLE user SCHEMAFULL;
DEFINE FIELD name ON TABLE user TYPE string;
DEFINE FIELD email ON TABLE user TYPE string;
DEFINE FIELD role ON TABLE user TYPE string \
    ASSERT $value IN ['customer', 'owner'];
DEFINE FIELD image ON TABLE user TYPE option<string>;
DEFINE FIELD created_at ON TABLE user TYPE datetime DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE user TYPE datetime DEFAULT time::now();
DEFINE INDEX idx_user_email ON TABLE user COLUMNS email UNIQUE;

-- Cars. owner is NONE after a logical delete.
DEFINE TABLE car SCHEMAFULL;
DEFINE FIELD owner ON TABLE car TYPE option<string>;
DEFINE FIELD brand ON TABLE car TYPE string;
DEFINE FIELD model ON TABLE car TYPE string;
DEFINE FIELD year ON TABLE car TYPE int;
DEFINE FIELD price_per_day ON TABLE car TYPE float;
DEFINE FIELD category ON TABLE car TYPE string;
DEFINE FIELD transmission ON TABLE car TYPE string;
DEFINE FIELD fuel_type ON TABLE car TYPE string;
DEFINE FIELD seating_capacity ON TABLE car TYPE int;
DEFINE FIELD location ON TABLE car TYPE string;
DEFINE FIELD description ON TABLE car TYPE string;
DEFINE FIELD image ON TABLE car TYPE string;
DEFINE FIELD is_available ON TABLE car TYPE bool DEFAULT true;
DEFINE FIELD created_at ON TABLE car TYPE datetime DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE car TYPE datetime DEFAULT time::now();
DEFINE INDEX idx_car_owner ON TABLE car COLUMNS owner;

-- Bookings. Written by the booking flow, read by owner dashboards.
DEFINE TABLE booking SCHEMAFULL;
DEFINE FIELD car ON TABLE booking TYPE string;
DEFINE FIELD owner ON TABLE booking TYPE string;
DEFINE FIELD status ON TABLE booking TYPE string \
    ASSERT $value IN ['pending', 'confirmed', 'cancelled'];
DEFINE FIELD price ON TABLE booking TYPE float;
DEFINE FIELD created_at ON TABLE booking TYPE datetime DEFAULT time::now();
DEFINE INDEX idx_booking_owner ON TABLE booking COLUMNS owner;
";

/// Apply every migration newer than the latest recorded one.
///
/// The `_migration` table is created on first run; re-running against
/// an up-to-date database is a no-op.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    let mut result = db
        .query("SELECT version FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let applied: Vec<AppliedMigration> = result.take(0)?;
    let current_version = applied.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS.iter().filter(|m| m.version > current_version) {
        info!(
            version = migration.version,
            name = migration.name,
            "Applying migration"
        );

        db.query(migration.sql).await?.check().map_err(|e| {
            DbError::Migration(format!(
                "v{} '{}' failed: {e}",
                migration.version, migration.name
            ))
        })?;

        db.query("CREATE _migration SET version = $version, name = $name")
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!("recording v{} failed: {e}", migration.version))
            })?;
    }

    Ok(())
}

/// Returns the raw schema DDL for version 1.
pub fn schema_v1() -> &'static str {
    SCHEMA_V1
}
