// Catalog store: the immutable restaurant records plus read-only search,
// sorting and statistics over them.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Price tier, ordered cheapest to most expensive. Serializes as the dollar
/// symbols used everywhere in the data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    FineDining,
}

impl PriceRange {
    pub fn symbol(self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Upscale => "$$$",
            PriceRange::FineDining => "$$$$",
        }
    }

    /// Typical per-person cost, used for the `average_price_per_person` field.
    pub fn typical_cost(self) -> &'static str {
        match self {
            PriceRange::Budget => "$10-20",
            PriceRange::Moderate => "$20-40",
            PriceRange::Upscale => "$40-70",
            PriceRange::FineDining => "$70-150",
        }
    }

    /// Human-readable tier label for display surfaces.
    pub fn describe(self) -> &'static str {
        match self {
            PriceRange::Budget => "Budget-friendly ($10-20)",
            PriceRange::Moderate => "Moderate ($20-40)",
            PriceRange::Upscale => "Upscale ($40-70)",
            PriceRange::FineDining => "Fine Dining ($70-150)",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One restaurant record. Immutable once generated or loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub price_range: PriceRange,
    pub rating: f64,
    pub dietary_options: Vec<String>,
    /// Opening hours keyed by meal period ("lunch", "dinner").
    pub hours: BTreeMap<String, String>,
    pub phone: String,
    pub address: String,
    pub features: Vec<String>,
    pub popular_dishes: Vec<String>,
    pub average_price_per_person: String,
    pub reservations_required: bool,
    pub outdoor_seating: bool,
    pub private_dining: bool,
    pub takeout_available: bool,
    pub delivery_available: bool,
}

/// Optional search criteria; a `None` field matches everything.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub cuisine: Option<String>,
    pub location: Option<String>,
    pub price_range: Option<PriceRange>,
    /// Every requested tag must be present on the restaurant.
    pub dietary_options: Option<Vec<String>>,
    pub min_rating: Option<f64>,
    pub outdoor_seating: Option<bool>,
    pub private_dining: Option<bool>,
}

fn matches_filter(restaurant: &Restaurant, filter: &SearchFilter) -> bool {
    if !filter
        .cuisine
        .as_ref()
        .map_or(true, |c| restaurant.cuisine.eq_ignore_ascii_case(c))
    {
        return false;
    }

    if !filter
        .location
        .as_ref()
        .map_or(true, |l| restaurant.location.eq_ignore_ascii_case(l))
    {
        return false;
    }

    if !filter
        .price_range
        .map_or(true, |p| restaurant.price_range == p)
    {
        return false;
    }

    if !filter.dietary_options.as_ref().map_or(true, |wanted| {
        wanted.iter().all(|option| {
            restaurant
                .dietary_options
                .iter()
                .any(|have| have.eq_ignore_ascii_case(option))
        })
    }) {
        return false;
    }

    if !filter.min_rating.map_or(true, |min| restaurant.rating >= min) {
        return false;
    }

    if !filter
        .outdoor_seating
        .map_or(true, |wanted| restaurant.outdoor_seating == wanted)
    {
        return false;
    }

    if !filter
        .private_dining
        .map_or(true, |wanted| restaurant.private_dining == wanted)
    {
        return false;
    }

    true
}

/// Filter the catalog; input order is preserved.
pub fn search<'a>(restaurants: &'a [Restaurant], filter: &SearchFilter) -> Vec<&'a Restaurant> {
    restaurants
        .iter()
        .filter(|r| matches_filter(r, filter))
        .collect()
}

pub fn find_by_id<'a>(restaurants: &'a [Restaurant], restaurant_id: &str) -> Option<&'a Restaurant> {
    restaurants.iter().find(|r| r.id == restaurant_id)
}

pub fn by_cuisine<'a>(restaurants: &'a [Restaurant], cuisine: &str) -> Vec<&'a Restaurant> {
    restaurants
        .iter()
        .filter(|r| r.cuisine.eq_ignore_ascii_case(cuisine))
        .collect()
}

pub fn by_location<'a>(restaurants: &'a [Restaurant], location: &str) -> Vec<&'a Restaurant> {
    restaurants
        .iter()
        .filter(|r| r.location.eq_ignore_ascii_case(location))
        .collect()
}

pub fn sort_by_rating(restaurants: &[Restaurant], descending: bool) -> Vec<&Restaurant> {
    let mut sorted: Vec<&Restaurant> = restaurants.iter().collect();
    sorted.sort_by(|a, b| {
        if descending {
            b.rating.total_cmp(&a.rating)
        } else {
            a.rating.total_cmp(&b.rating)
        }
    });
    sorted
}

pub fn sort_by_price(restaurants: &[Restaurant]) -> Vec<&Restaurant> {
    let mut sorted: Vec<&Restaurant> = restaurants.iter().collect();
    sorted.sort_by_key(|r| r.price_range);
    sorted
}

/// Catalog-wide counts and the mean rating.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub by_cuisine: BTreeMap<String, usize>,
    pub by_location: BTreeMap<String, usize>,
    pub by_price_range: BTreeMap<String, usize>,
    pub average_rating: f64,
}

pub fn catalog_stats(restaurants: &[Restaurant]) -> CatalogStats {
    let mut stats = CatalogStats {
        total: restaurants.len(),
        ..CatalogStats::default()
    };

    let mut total_rating = 0.0;
    for restaurant in restaurants {
        *stats.by_cuisine.entry(restaurant.cuisine.clone()).or_default() += 1;
        *stats
            .by_location
            .entry(restaurant.location.clone())
            .or_default() += 1;
        *stats
            .by_price_range
            .entry(restaurant.price_range.symbol().to_string())
            .or_default() += 1;
        total_rating += restaurant.rating;
    }

    if !restaurants.is_empty() {
        stats.average_rating = total_rating / restaurants.len() as f64;
    }
    stats
}

pub fn load_restaurants(path: impl AsRef<Path>) -> Result<Vec<Restaurant>, CatalogError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Lenient variant: an unreadable or malformed file yields an empty catalog
/// and a warning instead of an error.
pub fn load_restaurants_or_default(path: impl AsRef<Path>) -> Vec<Restaurant> {
    match load_restaurants(path.as_ref()) {
        Ok(restaurants) => restaurants,
        Err(e) => {
            warn!(
                path = %path.as_ref().display(),
                error = %e,
                "failed to load restaurant catalog, starting empty"
            );
            Vec::new()
        }
    }
}

pub fn save_restaurants(
    restaurants: &[Restaurant],
    path: impl AsRef<Path>,
) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(restaurants)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Multi-line display card for one restaurant.
pub fn format_restaurant_display(restaurant: &Restaurant) -> String {
    format!(
        "{} ({})\n\
         Cuisine: {}\n\
         Location: {}\n\
         Price: {} ({})\n\
         Rating: {}/5.0\n\
         Dietary Options: {}\n\
         Phone: {}\n\
         Address: {}\n\
         Features: {}\n\
         Popular Dishes: {}",
        restaurant.name,
        restaurant.id,
        restaurant.cuisine,
        restaurant.location,
        restaurant.price_range,
        restaurant.average_price_per_person,
        restaurant.rating,
        restaurant.dietary_options.join(", "),
        restaurant.phone,
        restaurant.address,
        restaurant.features.join(", "),
        restaurant.popular_dishes.join(", "),
    )
}
