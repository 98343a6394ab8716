//! Ticket pricing.
//!
//! All money math runs on [`Decimal`] so discount arithmetic is exact:
//! a 50% discount on 24.90 is 12.45, not 12.450000000000001. Discounts
//! are percentages in `0..=100`; a purchase without a ticket type is
//! the degenerate 0%-discount case.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Reject discount percentages outside `0..=100`.
pub fn validate_discount(discount_percentage: Decimal) -> Result<(), CoreError> {
    if discount_percentage < Decimal::ZERO || discount_percentage > Decimal::ONE_HUNDRED {
        return Err(CoreError::Validation(
            "discountPercentage must be between 0 and 100".to_string(),
        ));
    }
    Ok(())
}

/// Unit price after applying an optional ticket-type discount to the
/// session's base price.
pub fn effective_unit_price(base_price: Decimal, discount_percentage: Option<Decimal>) -> Decimal {
    match discount_percentage {
        Some(discount) => base_price * (Decimal::ONE_HUNDRED - discount) / Decimal::ONE_HUNDRED,
        None => base_price,
    }
}

/// Total price for a purchase: `quantity * effective unit price`.
pub fn total_price(unit_price: Decimal, quantity: i64) -> Decimal {
    unit_price * Decimal::from(quantity)
}
