//! Test utilities for Gigboard
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use chrono::NaiveDateTime;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::{
    config::Config,
    db::entities::{artist, city, show, venue},
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run all migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test city in the database
pub async fn create_test_city(db: &DatabaseConnection, name: &str, state: &str) -> city::Model {
    let city = city::ActiveModel {
        city: Set(name.to_string()),
        state: Set(state.to_string()),
        ..Default::default()
    };

    city.insert(db).await.expect("Failed to insert test city")
}

/// Create a test venue in the database
pub async fn create_test_venue(db: &DatabaseConnection, cityid: i32, name: &str) -> venue::Model {
    let venue = venue::ActiveModel {
        name: Set(name.to_string()),
        address: Set("123 Main St".to_string()),
        cityid: Set(cityid),
        genres: Set(Some("Jazz,Blues".to_string())),
        seeking_talent: Set(false),
        ..Default::default()
    };

    venue.insert(db).await.expect("Failed to insert test venue")
}

/// Create a test artist in the database
pub async fn create_test_artist(db: &DatabaseConnection, cityid: i32, name: &str) -> artist::Model {
    let artist = artist::ActiveModel {
        name: Set(name.to_string()),
        cityid: Set(cityid),
        genres: Set(Some("Rock n Roll".to_string())),
        seeking_venue: Set(false),
        ..Default::default()
    };

    artist
        .insert(db)
        .await
        .expect("Failed to insert test artist")
}

/// Create a test show in the database
pub async fn create_test_show(
    db: &DatabaseConnection,
    artistid: i32,
    venueid: i32,
    start_time: NaiveDateTime,
) -> show::Model {
    let show = show::ActiveModel {
        artistid: Set(artistid),
        venueid: Set(venueid),
        start_time: Set(start_time),
        ..Default::default()
    };

    show.insert(db).await.expect("Failed to insert test show")
}
