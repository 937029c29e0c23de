// Synthetic catalog and availability fixtures. Everything here takes an
// explicit random source so seeded runs are reproducible.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use tracing::debug;

use crate::availability::{AvailabilityGrid, CANONICAL_SLOTS};
use crate::catalog::{PriceRange, Restaurant};
use crate::timeutil::{format_date, time_to_minutes};

struct Template {
    name_prefix: &'static str,
    name_suffixes: [&'static str; 5],
    cuisine: &'static str,
    locations: [&'static str; 5],
    price_range: PriceRange,
    dietary_options: &'static [&'static str],
    features: &'static [&'static str],
    dishes: &'static [&'static str],
}

const TEMPLATES: [Template; 8] = [
    Template {
        name_prefix: "Bella",
        name_suffixes: ["Italia", "Napoli", "Roma", "Toscana", "Venezia"],
        cuisine: "Italian",
        locations: ["Downtown", "Midtown", "Uptown", "Old Town", "West End"],
        price_range: PriceRange::Upscale,
        dietary_options: &["vegetarian", "gluten-free", "vegan"],
        features: &[
            "romantic ambiance",
            "wine bar",
            "pasta made fresh daily",
            "outdoor patio",
        ],
        dishes: &["Truffle Carbonara", "Osso Buco", "Margherita Pizza", "Tiramisu"],
    },
    Template {
        name_prefix: "Sakura",
        name_suffixes: ["Sushi", "Japanese Bistro", "Izakaya", "Ramen House", "Sushi Bar"],
        cuisine: "Japanese",
        locations: ["Downtown", "Midtown", "Uptown", "East Side", "Arts District"],
        price_range: PriceRange::Moderate,
        dietary_options: &["vegetarian", "gluten-free", "vegan"],
        features: &[
            "sushi bar seating",
            "sake selection",
            "omakase available",
            "authentic Japanese",
        ],
        dishes: &["Omakase", "Spicy Tuna Roll", "Ramen", "Tempura"],
    },
    Template {
        name_prefix: "The Steakhouse",
        name_suffixes: ["Prime", "Grill", "Chophouse", "& Co", "Club"],
        cuisine: "American Steakhouse",
        locations: ["Financial District", "Downtown", "Uptown", "Business District", "Harbor"],
        price_range: PriceRange::FineDining,
        dietary_options: &["gluten-free"],
        features: &[
            "dry-aged beef",
            "wine cellar",
            "private dining rooms",
            "valet parking",
        ],
        dishes: &["Ribeye Steak", "Filet Mignon", "Lobster Tail", "NY Cheesecake"],
    },
    Template {
        name_prefix: "Spice",
        name_suffixes: ["of India", "Kitchen", "Palace", "Garden", "Tandoor"],
        cuisine: "Indian",
        locations: ["Midtown", "University District", "Downtown", "West End", "Little India"],
        price_range: PriceRange::Moderate,
        dietary_options: &["vegetarian", "vegan", "gluten-free"],
        features: &["tandoor oven", "lunch buffet", "authentic spices", "family-owned"],
        dishes: &["Chicken Tikka Masala", "Palak Paneer", "Biryani", "Naan Bread"],
    },
    Template {
        name_prefix: "Le",
        name_suffixes: ["Bistro", "Café", "Jardin", "Petit", "Bouchon"],
        cuisine: "French",
        locations: ["Downtown", "Arts District", "Old Town", "Riverside", "Historic District"],
        price_range: PriceRange::Upscale,
        dietary_options: &["vegetarian", "gluten-free"],
        features: &[
            "french wine list",
            "outdoor seating",
            "romantic setting",
            "chef-owned",
        ],
        dishes: &["Coq au Vin", "Bouillabaisse", "Crème Brûlée", "Escargot"],
    },
    Template {
        name_prefix: "Taco",
        name_suffixes: ["Loco", "Fiesta", "Cantina", "Casa", "Express"],
        cuisine: "Mexican",
        locations: ["Downtown", "Beach Area", "Midtown", "South Side", "Market District"],
        price_range: PriceRange::Budget,
        dietary_options: &["vegetarian", "vegan", "gluten-free"],
        features: &["margarita bar", "taco tuesday", "fresh ingredients", "casual dining"],
        dishes: &["Street Tacos", "Carnitas", "Guacamole", "Churros"],
    },
    Template {
        name_prefix: "Dragon",
        name_suffixes: ["Palace", "Garden", "Wok", "House", "Kitchen"],
        cuisine: "Chinese",
        locations: ["Chinatown", "Downtown", "Midtown", "East Side", "University Area"],
        price_range: PriceRange::Moderate,
        dietary_options: &["vegetarian", "vegan", "gluten-free"],
        features: &[
            "dim sum",
            "family-style dining",
            "authentic recipes",
            "lunch specials",
        ],
        dishes: &["Peking Duck", "Kung Pao Chicken", "Dumplings", "Fried Rice"],
    },
    Template {
        name_prefix: "Mediterranean",
        name_suffixes: ["Grill", "Kitchen", "Taverna", "Cafe", "Bistro"],
        cuisine: "Mediterranean",
        locations: ["Downtown", "Waterfront", "Old Town", "Arts District", "Beach Area"],
        price_range: PriceRange::Moderate,
        dietary_options: &["vegetarian", "vegan", "gluten-free"],
        features: &["healthy options", "fresh seafood", "outdoor patio", "mezze platters"],
        dishes: &["Lamb Kebab", "Falafel", "Hummus Platter", "Baklava"],
    },
];

/// Generate `count` restaurants by cycling the cuisine templates. Ids are
/// `r1..rN`; ratings land in 4.0-5.0 rounded to one decimal.
pub fn generate_restaurants(count: usize, rng: &mut impl Rng) -> Vec<Restaurant> {
    let restaurants: Vec<Restaurant> = (0..count)
        .map(|i| {
            let template = &TEMPLATES[i % TEMPLATES.len()];
            let suffix =
                template.name_suffixes[(i / TEMPLATES.len()) % template.name_suffixes.len()];
            let location = template.locations[i % template.locations.len()];
            let upscale = template.price_range >= PriceRange::Upscale;

            let mut hours = BTreeMap::new();
            hours.insert("dinner".to_string(), "5:00pm-10:00pm".to_string());
            // Roughly 70% of restaurants serve lunch.
            if rng.gen::<f64>() > 0.3 {
                hours.insert("lunch".to_string(), "11:30am-2:30pm".to_string());
            }

            Restaurant {
                id: format!("r{}", i + 1),
                name: format!("{} {}", template.name_prefix, suffix),
                cuisine: template.cuisine.to_string(),
                location: location.to_string(),
                price_range: template.price_range,
                rating: ((4.0 + rng.gen::<f64>()) * 10.0).round() / 10.0,
                dietary_options: template
                    .dietary_options
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                hours,
                phone: format!(
                    "(555) {}-{}",
                    rng.gen_range(100..=999),
                    rng.gen_range(1000..=9999)
                ),
                address: format!("{} {} Street", rng.gen_range(100..=999), location),
                features: template.features.iter().map(|s| s.to_string()).collect(),
                popular_dishes: template.dishes.iter().map(|s| s.to_string()).collect(),
                average_price_per_person: template.price_range.typical_cost().to_string(),
                reservations_required: upscale,
                outdoor_seating: rng.gen::<f64>() > 0.5,
                private_dining: upscale,
                takeout_available: true,
                delivery_available: rng.gen::<f64>() > 0.3,
            }
        })
        .collect();

    debug!(count = restaurants.len(), "generated restaurant catalog");
    restaurants
}

/// Generate an availability grid covering `days_ahead` days from `today` for
/// the given restaurants.
///
/// Per slot: weekend lunch slots are dropped with probability 0.3; the base
/// count depends on the hour bucket (peak dinner 19/20 draws 0-2, near-peak
/// 18/21 draws 0-4, lunch 2-7, other dinner 1-8); Friday-Sunday dinner loses
/// 2 tables and weekday lunch loses 1, floored at 0; peak dinner hours are
/// then independently forced to 0 with probability 0.2.
pub fn generate_grid(
    restaurant_ids: &[&str],
    days_ahead: u32,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> AvailabilityGrid {
    let mut grid = AvailabilityGrid::new();

    for restaurant_id in restaurant_ids {
        for day_offset in 0..days_ahead {
            let date = today + Duration::days(day_offset as i64);
            let date_string = format_date(date);
            // Monday = 0 .. Sunday = 6.
            let day_of_week = date.weekday().num_days_from_monday();

            for slot in CANONICAL_SLOTS {
                let hour = time_to_minutes(slot).unwrap_or(0) / 60;
                let is_lunch = hour < 15;
                let is_dinner = hour >= 17;

                // Some restaurants skip lunch service on weekends.
                if is_lunch && day_of_week >= 5 && rng.gen::<f64>() < 0.3 {
                    continue;
                }

                let mut tables: u32 = match hour {
                    19 | 20 => rng.gen_range(0..=2),
                    18 | 21 => rng.gen_range(0..=4),
                    _ if is_lunch => rng.gen_range(2..=7),
                    _ => rng.gen_range(1..=8),
                };

                // Friday through Sunday dinners run busier.
                if day_of_week >= 4 && is_dinner {
                    tables = tables.saturating_sub(2);
                }
                // Weekday lunches run busier.
                if day_of_week <= 4 && is_lunch {
                    tables = tables.saturating_sub(1);
                }

                // Peak dinner hours sell out outright 20% of the time.
                if (hour == 19 || hour == 20) && rng.gen::<f64>() < 0.2 {
                    tables = 0;
                }

                grid.set(restaurant_id, &date_string, slot, tables);
            }
        }
    }

    debug!(
        restaurants = restaurant_ids.len(),
        days_ahead, "generated availability grid"
    );
    grid
}
