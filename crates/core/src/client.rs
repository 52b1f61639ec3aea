//! Client model and the ownership reconciler.
//!
//! Clients embed full horse values rather than referencing them by id, so a
//! horse's data is duplicated inside whichever client owns it. The invariant
//! is that a given horse value appears in at most one client's `ownsHorse`
//! list system-wide, and the reconciler enforces it on every client update.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::horse::Horse;
use crate::types::Id;

/* --------------------------------------------------------------------------
   Models
   -------------------------------------------------------------------------- */

/// A client as stored and served over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Id,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    /// Embedded horse snapshots, not references.
    pub owns_horse: Vec<Horse>,
}

/// Payload for `POST /clients/`; the id is assigned by the service.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub owns_horse: Vec<Horse>,
}

/* --------------------------------------------------------------------------
   Ownership reconciler
   -------------------------------------------------------------------------- */

/// Decide whether an updated client's ownership assignment is legal, given a
/// snapshot of all stored clients.
///
/// Two distinct failures come out of the same scan:
/// - the request itself lists the same horse value twice, or
/// - another stored client (different id) already embeds an equal horse
///   value.
///
/// A match under the updated client's own id is the idempotent re-save case
/// and passes. Comparison is full value equality of the embedded horse, not
/// identifier equality.
pub fn reconcile_ownership(updated: &Client, existing: &[Client]) -> Result<(), CoreError> {
    for (index, horse) in updated.owns_horse.iter().enumerate() {
        if updated.owns_horse[index + 1..].contains(horse) {
            return Err(CoreError::Validation(
                "A horse can only be owned by one person".into(),
            ));
        }
    }

    for horse in &updated.owns_horse {
        let current_owner = existing
            .iter()
            .find(|client| client.owns_horse.contains(horse));
        if let Some(owner) = current_owner {
            if owner.id != updated.id {
                return Err(CoreError::Validation(
                    "One or more horses are already owned".into(),
                ));
            }
        }
    }

    Ok(())
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
