use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The twelve recognized genres. Genre values on a record are free
/// strings but must be members of this list (case-sensitive).
pub const GENRES: [&str; 12] = [
    "acción",
    "aventura",
    "deportes",
    "estrategia",
    "arcade",
    "fps",
    "lucha",
    "rpg",
    "terror",
    "moba",
    "un solo jugador",
    "vr",
];

/// Closed platform enumeration. Used both as a record attribute and as
/// the key of the per-platform price table, so a price lookup can never
/// hit an unknown platform name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "PC")]
    Pc,
    PlayStation,
    Xbox,
    #[serde(rename = "Nintendo Switch")]
    NintendoSwitch,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Pc,
        Platform::PlayStation,
        Platform::Xbox,
        Platform::NintendoSwitch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::PlayStation => "PlayStation",
            Platform::Xbox => "Xbox",
            Platform::NintendoSwitch => "Nintendo Switch",
        }
    }

    /// Resolve a wire name back to a platform. Unknown names are `None`,
    /// not an error: a filter on an unknown platform simply matches
    /// nothing.
    pub fn from_name(name: &str) -> Option<Platform> {
        Platform::ALL.iter().copied().find(|p| p.name() == name)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pricing tier for a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    Standard,
    Premium,
}

/// Price pair for one platform entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePair {
    pub standard: f64,
    pub premium: f64,
}

impl PricePair {
    pub fn for_edition(&self, edition: Edition) -> f64 {
        match edition {
            Edition::Standard => self.standard,
            Edition::Premium => self.premium,
        }
    }
}

/// One requirements block: five free-text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    pub os: String,
    pub processor: String,
    pub memory: String,
    pub graphics: String,
    pub storage: String,
}

/// Minimum and recommended system requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub minimum: RequirementSet,
    pub recommended: RequirementSet,
}

/// A catalog entry as stored. `id`, `created_at` and `updated_at` are
/// managed by the catalog, never taken from a client payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub platforms: Vec<Platform>,
    pub genres: Vec<String>,
    pub platform_prices: BTreeMap<Platform, PricePair>,
    pub discount: f64,
    pub rating: f64,
    pub stock: u32,
    pub is_available: bool,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub trailer: Option<String>,
    pub developer: String,
    pub publisher: String,
    pub release_date: NaiveDate,
    pub requirements: Requirements,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GameRecord {
    /// The platform a price is shown for when the caller picked none:
    /// the first platform the record lists. Validation guarantees the
    /// list is non-empty and fully covered by the price table.
    pub fn display_platform(&self) -> Option<Platform> {
        self.platforms.first().copied()
    }
}

/// Reduced projection returned by the latest-available query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: Uuid,
    pub title: String,
    pub image: Option<String>,
    pub discount: f64,
    pub platform_prices: BTreeMap<Platform, PricePair>,
}

impl From<&GameRecord> for GameSummary {
    fn from(game: &GameRecord) -> Self {
        GameSummary {
            id: game.id,
            title: game.title.clone(),
            image: game.image.clone(),
            discount: game.discount,
            platform_prices: game.platform_prices.clone(),
        }
    }
}
