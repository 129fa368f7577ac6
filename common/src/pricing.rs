//! Price derivation for catalog records: platform/edition lookup,
//! discount application, display rounding and the order-total tax rate.

use crate::errors::CatalogError;
use crate::models::{Edition, GameRecord, Platform};

/// Tax applied on top of an order subtotal (21%).
pub const TAX_RATE: f64 = 0.21;

/// Round to two decimal places for display and totals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Undiscounted price of a record for a platform and edition.
pub fn base_price(
    game: &GameRecord,
    platform: Platform,
    edition: Edition,
) -> Result<f64, CatalogError> {
    game.platform_prices
        .get(&platform)
        .map(|pair| pair.for_edition(edition))
        .ok_or(CatalogError::MissingPrice(platform))
}

/// Price after the record's discount. A zero discount returns the base
/// price untouched, so no rounding drift is introduced.
pub fn final_price(
    game: &GameRecord,
    platform: Platform,
    edition: Edition,
) -> Result<f64, CatalogError> {
    let base = base_price(game, platform, edition)?;
    if game.discount > 0.0 {
        Ok(base * (1.0 - game.discount / 100.0))
    } else {
        Ok(base)
    }
}

/// Final price for the record's display platform (its first listed
/// platform), rounded for display.
pub fn display_price(game: &GameRecord, edition: Edition) -> Result<f64, CatalogError> {
    let platform = game
        .display_platform()
        .ok_or_else(|| CatalogError::validation("platforms", "at least one platform is required"))?;
    final_price(game, platform, edition).map(round2)
}
