//! Record editing flow: remote payload → transient record → form → store.
//!
//! The record is rebuilt from the remote source on every visit; it is never
//! read back from the store for editing.

use pokedex_core::error::CoreError;
use pokedex_core::form::{EditPokemonForm, FormErrors};
use pokedex_core::record::PokemonRecord;
use pokedex_core::source::{Identifier, PokemonSource};
use pokedex_db::models::pokemon::PokemonRow;
use pokedex_db::repositories::PokemonRepo;
use pokedex_db::DbPool;

/// What happened to a submitted edit form.
#[derive(Debug)]
pub enum EditOutcome {
    /// The record passed validation and was written.
    Saved(PokemonRow),
    /// The form must be shown again; nothing was written.
    Invalid {
        form: EditPokemonForm,
        errors: FormErrors,
    },
}

/// Fetch `name` remotely and map it onto a transient record.
///
/// Any fetch failure, or a payload without a name, is a
/// [`CoreError::NotFound`].
pub async fn prepare_edit(
    source: &dyn PokemonSource,
    name: &str,
) -> Result<PokemonRecord, CoreError> {
    let payload = source
        .fetch(&Identifier::from(name))
        .await
        .map_err(|e| {
            tracing::info!(name, kind = e.kind(), error = %e, "Edit target unavailable");
            CoreError::not_found("Pokemon", name)
        })?;
    PokemonRecord::from_payload(&payload)
}

/// Bind `form` onto `record`, validate, and save on success.
pub async fn submit_edit(
    pool: &DbPool,
    mut record: PokemonRecord,
    form: EditPokemonForm,
) -> Result<EditOutcome, sqlx::Error> {
    match form.check() {
        Ok(form) => {
            form.apply_to(&mut record);
            let row = PokemonRepo::save(pool, &record).await?;
            Ok(EditOutcome::Saved(row))
        }
        Err((form, errors)) => {
            tracing::debug!(name = %record.name, ?errors, "Edit form rejected");
            Ok(EditOutcome::Invalid { form, errors })
        }
    }
}
