//! Get-or-create resolution of a (city name, state code) pair.
//!
//! City rows are created implicitly the first time a new pair arrives through
//! a venue or artist form; they are never deleted or merged.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set};

use super::entities::city;

/// Resolve a (city, state) pair to its row id, inserting the row if absent.
///
/// The match is exact-string and case-sensitive: "Austin" and "austin" are
/// distinct cities. Generic over [`ConnectionTrait`] so it runs inside the
/// caller's transaction and the fresh row is visible before commit.
pub async fn get_or_create_city<C>(conn: &C, name: &str, state: &str) -> Result<i32, DbErr>
where
    C: ConnectionTrait,
{
    if let Some(existing) = find_pair(conn, name, state).await? {
        return Ok(existing.id);
    }

    // The unique index on (city, state) makes this race-free: a concurrent
    // insert of the same pair leaves exactly one row either way.
    let res = city::Entity::insert(city::ActiveModel {
        city: Set(name.to_string()),
        state: Set(state.to_string()),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::columns([city::Column::City, city::Column::State])
            .do_nothing()
            .to_owned(),
    )
    .exec(conn)
    .await;

    match res {
        Ok(insert) => Ok(insert.last_insert_id),
        // DO NOTHING reports nothing inserted, so the winning row exists now.
        Err(DbErr::RecordNotInserted) => {
            let row = find_pair(conn, name, state).await?.ok_or_else(|| {
                DbErr::RecordNotFound(format!("city ({name}, {state}) missing after upsert"))
            })?;
            Ok(row.id)
        }
        Err(err) => Err(err),
    }
}

async fn find_pair<C>(conn: &C, name: &str, state: &str) -> Result<Option<city::Model>, DbErr>
where
    C: ConnectionTrait,
{
    city::Entity::find()
        .filter(city::Column::City.eq(name))
        .filter(city::Column::State.eq(state))
        .one(conn)
        .await
}
