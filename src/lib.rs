// Main library file for the restaurant booking engine

pub mod availability;
pub mod booking;
pub mod catalog;
pub mod fixtures;
pub mod recommend;
pub mod timeutil;

// Re-export key types for convenience
pub use availability::{
    load_grid, load_grid_or_default, save_grid, AvailabilityGrid, GridError, GridStats,
    RestaurantAvailability, SlotOpening, CANONICAL_SLOTS,
};
pub use booking::{
    apply_booking, create_booking, create_booking_now, format_confirmation, validate,
    validate_now, Booking, BookingRequest, BookingStatus, ValidationError, MAX_PARTY_SIZE,
};
pub use catalog::{
    catalog_stats, find_by_id, format_restaurant_display, load_restaurants,
    load_restaurants_or_default, save_restaurants, search, CatalogError, CatalogStats, PriceRange,
    Restaurant, SearchFilter,
};
pub use fixtures::{generate_grid, generate_restaurants};
pub use recommend::{find_similar, recommend, score, RecommendationCriteria};
