use std::collections::BTreeMap;

use common::{CatalogError, GameRecord, Platform, PricePair, GENRES};

use crate::types::CreateGameRequest;

pub fn validate_title(title: &str) -> Result<(), CatalogError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CatalogError::validation("title", "a title is required"));
    }
    if title.chars().count() > 100 {
        return Err(CatalogError::validation(
            "title",
            "the title cannot be longer than 100 characters",
        ));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), CatalogError> {
    if description.trim().is_empty() {
        return Err(CatalogError::validation("description", "a description is required"));
    }
    if description.chars().count() > 2000 {
        return Err(CatalogError::validation(
            "description",
            "the description cannot be longer than 2000 characters",
        ));
    }
    Ok(())
}

pub fn validate_developer(developer: &str) -> Result<(), CatalogError> {
    if developer.trim().is_empty() {
        return Err(CatalogError::validation("developer", "a developer is required"));
    }
    Ok(())
}

pub fn validate_publisher(publisher: &str) -> Result<(), CatalogError> {
    if publisher.trim().is_empty() {
        return Err(CatalogError::validation("publisher", "a publisher is required"));
    }
    Ok(())
}

pub fn validate_platforms(platforms: &[Platform]) -> Result<(), CatalogError> {
    if platforms.is_empty() {
        return Err(CatalogError::validation(
            "platforms",
            "at least one platform must be selected",
        ));
    }
    Ok(())
}

/// Genres must be members of the fixed twelve-genre list, compared
/// case-sensitively. A violation reports the whole allowed list.
pub fn validate_genres(genres: &[String]) -> Result<(), CatalogError> {
    if genres.is_empty() {
        return Err(CatalogError::validation("genres", "at least one genre must be selected"));
    }
    for genre in genres {
        if !GENRES.contains(&genre.as_str()) {
            return Err(CatalogError::validation(
                "genres",
                format!(
                    "invalid genre '{}'. Allowed genres are: {}",
                    genre,
                    GENRES.join(", ")
                ),
            ));
        }
    }
    Ok(())
}

/// Every selected platform needs an entry in the price table, so a
/// price lookup can never miss for a stored record.
pub fn validate_platform_prices(
    platforms: &[Platform],
    prices: &BTreeMap<Platform, PricePair>,
) -> Result<(), CatalogError> {
    for platform in platforms {
        if !prices.contains_key(platform) {
            return Err(CatalogError::validation(
                "platformPrices",
                format!("missing prices for platform '{}'", platform),
            ));
        }
    }
    Ok(())
}

pub fn validate_discount(discount: f64) -> Result<(), CatalogError> {
    if !(0.0..=100.0).contains(&discount) {
        return Err(CatalogError::validation(
            "discount",
            "the discount must be between 0 and 100",
        ));
    }
    Ok(())
}

pub fn validate_rating(rating: f64) -> Result<(), CatalogError> {
    if !(0.0..=10.0).contains(&rating) {
        return Err(CatalogError::validation("rating", "the rating must be between 0 and 10"));
    }
    Ok(())
}

pub fn validate_stock(stock: i64) -> Result<(), CatalogError> {
    if stock < 0 {
        return Err(CatalogError::validation("stock", "the stock cannot be negative"));
    }
    if u32::try_from(stock).is_err() {
        return Err(CatalogError::validation("stock", "the stock is out of range"));
    }
    Ok(())
}

/// Create-path validation. Fail-fast: the first failing check is the
/// error, in the documented field order.
pub fn validate_create(req: &CreateGameRequest) -> Result<(), CatalogError> {
    validate_title(&req.title)?;
    validate_description(&req.description)?;
    validate_developer(&req.developer)?;
    validate_publisher(&req.publisher)?;
    if req.release_date.is_none() {
        return Err(CatalogError::validation("releaseDate", "a release date is required"));
    }
    validate_platforms(&req.platforms)?;
    validate_genres(&req.genres)?;
    if req.requirements.is_none() {
        return Err(CatalogError::validation(
            "requirements",
            "system requirements are required",
        ));
    }
    validate_platform_prices(&req.platforms, &req.platform_prices)?;
    validate_discount(req.discount)?;
    validate_rating(req.rating)?;
    validate_stock(req.stock)
}

/// Update-path validation: the same rules, run against the merged
/// document before the write is applied. Presence of the date and the
/// requirement blocks is guaranteed by the record type.
pub fn validate_record(game: &GameRecord) -> Result<(), CatalogError> {
    validate_title(&game.title)?;
    validate_description(&game.description)?;
    validate_developer(&game.developer)?;
    validate_publisher(&game.publisher)?;
    validate_platforms(&game.platforms)?;
    validate_genres(&game.genres)?;
    validate_platform_prices(&game.platforms, &game.platform_prices)?;
    validate_discount(game.discount)?;
    validate_rating(game.rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_request() -> CreateGameRequest {
        serde_json::from_value(serde_json::json!({
            "title": "Hades",
            "description": "Roguelike from Supergiant",
            "developer": "Supergiant Games",
            "publisher": "Supergiant Games",
            "releaseDate": "2020-09-17",
            "platforms": ["PC", "Nintendo Switch"],
            "genres": ["rpg", "acción"],
            "platformPrices": {
                "PC": { "standard": 24.99, "premium": 34.99 },
                "Nintendo Switch": { "standard": 24.99, "premium": 34.99 }
            },
            "requirements": {
                "minimum": { "os": "Windows 7", "processor": "2.4 GHz", "memory": "4 GB",
                             "graphics": "1 GB VRAM", "storage": "15 GB" },
                "recommended": { "os": "Windows 10", "processor": "3.0 GHz", "memory": "8 GB",
                                 "graphics": "2 GB VRAM", "storage": "15 GB" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn accepts_a_valid_request() {
        assert!(validate_create(&valid_request()).is_ok());
        assert_eq!(valid_request().release_date, NaiveDate::from_ymd_opt(2020, 9, 17));
    }

    #[test]
    fn fails_fast_in_field_order() {
        // Both title and genres are bad; the title error wins.
        let mut req = valid_request();
        req.title = "   ".into();
        req.genres = vec![];
        match validate_create(&req).unwrap_err() {
            CatalogError::Validation { field, .. } => assert_eq!(field, "title"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn title_length_is_capped() {
        let mut req = valid_request();
        req.title = "x".repeat(101);
        match validate_create(&req).unwrap_err() {
            CatalogError::Validation { field, .. } => assert_eq!(field, "title"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_release_date_is_reported_by_name() {
        let mut req = valid_request();
        req.release_date = None;
        match validate_create(&req).unwrap_err() {
            CatalogError::Validation { field, .. } => assert_eq!(field, "releaseDate"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_genre_lists_the_allowed_set() {
        let mut req = valid_request();
        req.genres = vec!["RPG".into()]; // membership is case-sensitive
        match validate_create(&req).unwrap_err() {
            CatalogError::Validation { field, message } => {
                assert_eq!(field, "genres");
                assert!(message.contains("RPG"));
                for genre in GENRES {
                    assert!(message.contains(genre), "missing '{genre}' in: {message}");
                }
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn every_selected_platform_needs_a_price_entry() {
        let mut req = valid_request();
        req.platform_prices.remove(&Platform::NintendoSwitch);
        match validate_create(&req).unwrap_err() {
            CatalogError::Validation { field, message } => {
                assert_eq!(field, "platformPrices");
                assert!(message.contains("Nintendo Switch"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn numeric_ranges_are_enforced_after_coercion() {
        let mut req = valid_request();
        req.discount = 150.0;
        assert!(matches!(
            validate_create(&req),
            Err(CatalogError::Validation { field: "discount", .. })
        ));

        let mut req = valid_request();
        req.rating = 11.0;
        assert!(matches!(
            validate_create(&req),
            Err(CatalogError::Validation { field: "rating", .. })
        ));

        let mut req = valid_request();
        req.stock = -1;
        assert!(matches!(
            validate_create(&req),
            Err(CatalogError::Validation { field: "stock", .. })
        ));
    }
}
