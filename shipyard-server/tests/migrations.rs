//! Verifies the embedded migration creates the ship table the server expects.

use std::fs;
use std::path::PathBuf;

fn read_migration(file: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("migrations")
        .join("2025-01-15-000000_create_ship")
        .join(file);
    fs::read_to_string(&path).expect("read ship migration")
}

#[test]
fn up_migration_creates_every_ship_column() {
    let up = read_migration("up.sql");
    assert!(up.contains("CREATE TABLE ship"));
    let columns = [
        "id BIGSERIAL PRIMARY KEY",
        "name VARCHAR(50) NOT NULL",
        "planet VARCHAR(50) NOT NULL",
        "ship_type",
        "prod_date TIMESTAMP NOT NULL",
        "is_used BOOLEAN NOT NULL",
        "speed DOUBLE PRECISION NOT NULL",
        "crew_size INTEGER NOT NULL",
        "rating DOUBLE PRECISION NOT NULL",
    ];
    for column in columns {
        assert!(up.contains(column), "migration missing column: {column}");
    }
}

#[test]
fn down_migration_drops_the_table() {
    let down = read_migration("down.sql");
    assert!(down.contains("DROP TABLE ship"));
}
