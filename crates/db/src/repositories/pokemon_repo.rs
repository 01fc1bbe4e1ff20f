//! Repository for the `pokemons` table.

use pokedex_core::record::PokemonRecord;
use pokedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::pokemon::PokemonRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, type, abilities, created_at, updated_at";

/// Provides CRUD operations for saved Pokémon records.
///
/// Names are not unique: saving the same Pokémon twice yields two rows.
pub struct PokemonRepo;

impl PokemonRepo {
    /// Insert a new row from `record`, ignoring any id it carries.
    pub async fn insert(pool: &PgPool, record: &PokemonRecord) -> Result<PokemonRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO pokemons (name, type, abilities)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PokemonRow>(&query)
            .bind(&record.name)
            .bind(record.type_summary())
            .bind(record.ability_summary())
            .fetch_one(pool)
            .await
    }

    /// Overwrite every column of an existing row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        record: &PokemonRecord,
    ) -> Result<Option<PokemonRow>, sqlx::Error> {
        let query = format!(
            "UPDATE pokemons SET name = $2, type = $3, abilities = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PokemonRow>(&query)
            .bind(id)
            .bind(&record.name)
            .bind(record.type_summary())
            .bind(record.ability_summary())
            .fetch_optional(pool)
            .await
    }

    /// Insert-or-update: records without an id are inserted, records with
    /// one overwrite that row.
    ///
    /// Fails with [`sqlx::Error::RowNotFound`] if the id no longer exists.
    pub async fn save(pool: &PgPool, record: &PokemonRecord) -> Result<PokemonRow, sqlx::Error> {
        let row = match record.id {
            None => Self::insert(pool, record).await?,
            Some(id) => Self::update(pool, id, record)
                .await?
                .ok_or(sqlx::Error::RowNotFound)?,
        };
        tracing::debug!(id = row.id, name = %row.name, "Saved Pokemon record");
        Ok(row)
    }

    /// Find a record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PokemonRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemons WHERE id = $1");
        sqlx::query_as::<_, PokemonRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All records saved under `name`, oldest first.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Vec<PokemonRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemons WHERE name = $1 ORDER BY id");
        sqlx::query_as::<_, PokemonRow>(&query)
            .bind(name)
            .fetch_all(pool)
            .await
    }

    /// List all records, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<PokemonRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemons ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, PokemonRow>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pokemons")
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pokemons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
