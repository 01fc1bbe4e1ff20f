//! Best-effort batch listing over a fixed range of remote ids.
//!
//! Ids are fetched one at a time in ascending order. A failed fetch or an
//! unprojectable payload skips that id and the walk continues. The walk stops
//! after the first id that is a multiple of [`BATCH_SIZE`] or equals
//! [`TOTAL_POKEMON`], whichever comes first, so a full run covers ids
//! `1..=BATCH_SIZE` only.

use crate::payload::{ProjectionError, ReducedPokemon};
use crate::source::{FetchError, Identifier, PokemonSource};

/// Highest id the listing walk may reach.
pub const TOTAL_POKEMON: u32 = 150;

/// Stop checkpoint interval.
pub const BATCH_SIZE: u32 = 30;

/// Why an id was left out of a batch.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Result of one listing walk.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successfully projected entries, in ascending id order.
    pub members: Vec<ReducedPokemon>,
    /// Ids that were attempted but left out, in ascending order.
    pub skipped: Vec<(u32, SkipReason)>,
}

impl BatchOutcome {
    /// Number of ids attempted before the walk stopped.
    pub fn attempted(&self) -> usize {
        self.members.len() + self.skipped.len()
    }

    pub fn skipped_ids(&self) -> Vec<u32> {
        self.skipped.iter().map(|(id, _)| *id).collect()
    }

    fn record(&mut self, id: u32, result: Result<ReducedPokemon, SkipReason>) {
        match result {
            Ok(member) => self.members.push(member),
            Err(reason) => {
                tracing::warn!(id, error = %reason, "Skipping Pokemon in batch listing");
                self.skipped.push((id, reason));
            }
        }
    }
}

/// `true` when the walk must stop after processing `id`.
pub fn is_batch_boundary(id: u32) -> bool {
    id % BATCH_SIZE == 0 || id == TOTAL_POKEMON
}

/// Walk the id range against `source` and fold every attempt into a
/// [`BatchOutcome`].
pub async fn collect_batch(source: &dyn PokemonSource) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for id in 1..=TOTAL_POKEMON {
        let result = match source.fetch(&Identifier::Id(id)).await {
            Ok(payload) => ReducedPokemon::project(&payload).map_err(SkipReason::from),
            Err(e) => Err(SkipReason::from(e)),
        };
        outcome.record(id, result);

        if is_batch_boundary(id) {
            break;
        }
    }

    tracing::debug!(
        members = outcome.members.len(),
        skipped = outcome.skipped.len(),
        "Batch listing complete"
    );
    outcome
}
