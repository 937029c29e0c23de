// Recommendation scorer: additive preference scoring over the catalog, plus
// pairwise similarity against a single target restaurant.

use serde::{Deserialize, Serialize};

use crate::catalog::{PriceRange, Restaurant};

/// Sentinel that guarantees exclusion from the recommendation list; only
/// strictly positive scores are kept.
const EXCLUDED_SCORE: f64 = -1.0;

/// Stated preferences; a `None` field contributes nothing to the score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationCriteria {
    pub cuisine: Option<String>,
    pub dietary_options: Option<Vec<String>>,
    pub price_range: Option<PriceRange>,
    /// A restaurant rated below this is excluded outright.
    pub min_rating: Option<f64>,
}

/// Additive preference score: +10 for a cuisine match, +5 per requested
/// dietary option present, +5 for a price tier match, always +2 per rating
/// point. Falling short of `min_rating` forces the exclusion sentinel.
pub fn score(restaurant: &Restaurant, criteria: &RecommendationCriteria) -> f64 {
    if let Some(min_rating) = criteria.min_rating {
        if restaurant.rating < min_rating {
            return EXCLUDED_SCORE;
        }
    }

    let mut score = 0.0;

    if let Some(cuisine) = &criteria.cuisine {
        if restaurant.cuisine.eq_ignore_ascii_case(cuisine) {
            score += 10.0;
        }
    }

    if let Some(options) = &criteria.dietary_options {
        let matched = options
            .iter()
            .filter(|option| {
                restaurant
                    .dietary_options
                    .iter()
                    .any(|have| have.eq_ignore_ascii_case(option))
            })
            .count();
        score += matched as f64 * 5.0;
    }

    if criteria.price_range == Some(restaurant.price_range) {
        score += 5.0;
    }

    score + restaurant.rating * 2.0
}

/// Rank the catalog against the criteria: strictly positive scores only,
/// descending, and stable so equal scores keep their input order.
pub fn recommend<'a>(
    restaurants: &'a [Restaurant],
    criteria: &RecommendationCriteria,
    limit: usize,
) -> Vec<&'a Restaurant> {
    let mut scored: Vec<(&Restaurant, f64)> = restaurants
        .iter()
        .map(|restaurant| (restaurant, score(restaurant, criteria)))
        .filter(|(_, score)| *score > 0.0)
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(limit)
        .map(|(restaurant, _)| restaurant)
        .collect()
}

/// Pairwise similarity: +10 same cuisine, +5 same price tier, +3 same
/// location, +2 rating within 0.5, +1 per shared dietary option.
pub fn similarity(restaurant: &Restaurant, target: &Restaurant) -> f64 {
    let mut score = 0.0;

    if restaurant.cuisine == target.cuisine {
        score += 10.0;
    }
    if restaurant.price_range == target.price_range {
        score += 5.0;
    }
    if restaurant.location == target.location {
        score += 3.0;
    }
    if (restaurant.rating - target.rating).abs() <= 0.5 {
        score += 2.0;
    }

    let shared = restaurant
        .dietary_options
        .iter()
        .filter(|option| target.dietary_options.contains(option))
        .count();
    score + shared as f64
}

/// Restaurants most similar to `target`, which is itself excluded from the
/// candidates. Descending with stable ties, truncated to `limit`.
pub fn find_similar<'a>(
    restaurants: &'a [Restaurant],
    target: &Restaurant,
    limit: usize,
) -> Vec<&'a Restaurant> {
    let mut scored: Vec<(&Restaurant, f64)> = restaurants
        .iter()
        .filter(|restaurant| restaurant.id != target.id)
        .map(|restaurant| (restaurant, similarity(restaurant, target)))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(limit)
        .map(|(restaurant, _)| restaurant)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn restaurant(id: &str, cuisine: &str, price: PriceRange, rating: f64) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: format!("Test {}", id),
            cuisine: cuisine.to_string(),
            location: "Downtown".to_string(),
            price_range: price,
            rating,
            dietary_options: vec!["vegetarian".to_string(), "vegan".to_string()],
            hours: BTreeMap::new(),
            phone: String::new(),
            address: String::new(),
            features: Vec::new(),
            popular_dishes: Vec::new(),
            average_price_per_person: String::new(),
            reservations_required: false,
            outdoor_seating: false,
            private_dining: false,
            takeout_available: true,
            delivery_available: true,
        }
    }

    #[test]
    fn test_score_is_additive() {
        let r = restaurant("r1", "Italian", PriceRange::Moderate, 4.5);
        let criteria = RecommendationCriteria {
            cuisine: Some("italian".to_string()),
            dietary_options: Some(vec!["Vegetarian".to_string(), "halal".to_string()]),
            price_range: Some(PriceRange::Moderate),
            min_rating: None,
        };

        // 10 (cuisine) + 5 (one dietary match) + 5 (price) + 9 (2 * rating).
        assert_eq!(score(&r, &criteria), 29.0);

        // No preferences at all still earns the rating bonus.
        assert_eq!(score(&r, &RecommendationCriteria::default()), 9.0);
    }

    #[test]
    fn test_min_rating_forces_exclusion() {
        let r = restaurant("r1", "Italian", PriceRange::Moderate, 4.0);
        let criteria = RecommendationCriteria {
            cuisine: Some("Italian".to_string()),
            min_rating: Some(4.5),
            ..RecommendationCriteria::default()
        };

        assert_eq!(score(&r, &criteria), -1.0);
        assert!(recommend(&[r], &criteria, 5).is_empty());
    }

    #[test]
    fn test_recommend_orders_descending_and_truncates() {
        let catalog = vec![
            restaurant("r1", "Italian", PriceRange::Moderate, 4.0),
            restaurant("r2", "Japanese", PriceRange::Moderate, 4.9),
            restaurant("r3", "Italian", PriceRange::Moderate, 4.6),
        ];
        let criteria = RecommendationCriteria {
            cuisine: Some("Italian".to_string()),
            ..RecommendationCriteria::default()
        };

        // r3: 10 + 9.2 = 19.2, r1: 10 + 8.0 = 18.0, r2: 9.8.
        let ranked = recommend(&catalog, &criteria, 2);
        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r3", "r1"]);
    }

    #[test]
    fn test_recommend_is_a_stable_sort() {
        // Identical restaurants score identically; input order must survive.
        let catalog = vec![
            restaurant("first", "Italian", PriceRange::Moderate, 4.5),
            restaurant("second", "Italian", PriceRange::Moderate, 4.5),
            restaurant("third", "Italian", PriceRange::Moderate, 4.5),
        ];

        let ranked = recommend(&catalog, &RecommendationCriteria::default(), 5);
        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_similarity_components() {
        let target = restaurant("r1", "Italian", PriceRange::Upscale, 4.5);
        let close = restaurant("r2", "Italian", PriceRange::Upscale, 4.2);

        // 10 (cuisine) + 5 (price) + 3 (location) + 2 (rating within 0.5)
        // + 2 (shared vegetarian + vegan).
        assert_eq!(similarity(&close, &target), 22.0);

        let mut distant = restaurant("r3", "French", PriceRange::Budget, 3.0);
        distant.location = "Harbor".to_string();
        distant.dietary_options = vec!["halal".to_string()];
        assert_eq!(similarity(&distant, &target), 0.0);
    }

    #[test]
    fn test_find_similar_excludes_target_and_ranks() {
        let target = restaurant("r1", "Italian", PriceRange::Upscale, 4.5);
        let catalog = vec![
            target.clone(),
            restaurant("r2", "French", PriceRange::Upscale, 4.4),
            restaurant("r3", "Italian", PriceRange::Upscale, 4.4),
            restaurant("r4", "Italian", PriceRange::Budget, 2.0),
        ];

        let similar = find_similar(&catalog, &target, 2);
        let ids: Vec<&str> = similar.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r3", "r2"]);
        assert!(ids.iter().all(|id| *id != "r1"));
    }
}
