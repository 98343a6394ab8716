//! Seat ledger arithmetic.
//!
//! Every session has the same fixed capacity. Availability is always
//! recomputed from the sum of purchased quantities; there is no running
//! counter to drift out of sync. Callers are responsible for running
//! the check and the subsequent insert under one lock (see
//! `PurchaseRepo::authorize` in cinex-db).

use crate::error::CoreError;

/// Fixed seating capacity of every session.
pub const SESSION_CAPACITY: i64 = 50;

/// Upper bound on the quantity of a single purchase request.
pub const MAX_PURCHASE_QUANTITY: i64 = 10;

/// Seats still available given the total already purchased.
///
/// Never negative, even if the ledger somehow holds more than the
/// capacity.
pub fn available_seats(purchased: i64) -> i64 {
    (SESSION_CAPACITY - purchased).max(0)
}

/// Check that `requested` seats fit in the remaining capacity.
///
/// On failure the error carries the exact available count at the time
/// of the check, which the HTTP layer surfaces verbatim.
pub fn check_capacity(purchased: i64, requested: i64) -> Result<(), CoreError> {
    let available = available_seats(purchased);
    if requested > available {
        return Err(CoreError::InsufficientCapacity { available });
    }
    Ok(())
}
