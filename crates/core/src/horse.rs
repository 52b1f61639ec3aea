//! Horse model and the feed-consumption validator.
//!
//! A horse carries an ordered list of consumption items, each referencing a
//! stock item by id. The whole list is validated as a unit on create and
//! update; a single bad entry rejects the request rather than being dropped.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::Id;

/* --------------------------------------------------------------------------
   Models
   -------------------------------------------------------------------------- */

/// A horse as stored and served over the wire.
///
/// `PartialEq` is derived because ownership reconciliation compares embedded
/// horse *values*, not just identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Horse {
    pub id: Id,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    /// Free-text display name of the owner, not a client reference.
    pub owner: String,
    pub consumption_list: Vec<ConsumptionItem>,
}

/// One feed entry: a stock-item reference plus the daily amount in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionItem {
    /// Must equal the id of an existing stock item.
    pub id: Id,
    pub name: String,
    pub daily_consumption: Decimal,
}

/// Payload for `POST /horses/`; the id is assigned by the service.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHorse {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub owner: String,
    pub consumption_list: Vec<ConsumptionItem>,
}

/* --------------------------------------------------------------------------
   Consumption validator
   -------------------------------------------------------------------------- */

/// Validate a proposed consumption list against the set of existing stock ids.
///
/// Rejects the whole list when
/// - two entries share an id,
/// - an entry's daily amount is not strictly positive, or
/// - an entry references a stock id that does not exist.
///
/// Checks run in that order, so a duplicate pair of unknown ids reports the
/// duplicate, not the missing stock item.
pub fn validate_consumption_list(
    items: &[ConsumptionItem],
    stock_ids: &HashSet<Id>,
) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(CoreError::Validation(
                "IDs of consumptionItems must be unique for every horse".into(),
            ));
        }
    }

    for item in items {
        if item.daily_consumption <= Decimal::ZERO {
            return Err(CoreError::Field {
                message: "Value must be greater than 0".into(),
                field: "dailyConsumption".into(),
            });
        }
    }

    for item in items {
        if !stock_ids.contains(&item.id) {
            return Err(CoreError::Validation("Consumption item not in stock".into()));
        }
    }

    Ok(())
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
