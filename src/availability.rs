// Availability grid: the per-restaurant, per-date, per-time table counts that
// every query reads and the booking engine's commit step replaces.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::timeutil::time_to_minutes;

/// The fixed list of bookable times: lunch, early dinner and late dinner on
/// 30-minute boundaries. Generated grids only ever use these keys.
pub const CANONICAL_SLOTS: [&str; 17] = [
    "11:30", "12:00", "12:30", "13:00", "13:30", "14:00", // Lunch
    "17:00", "17:30", "18:00", "18:30", "19:00", "19:30", // Early dinner
    "20:00", "20:30", "21:00", "21:30", "22:00", // Late dinner
];

#[derive(Error, Debug)]
pub enum GridError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One open slot on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOpening {
    pub time: String,
    pub available_tables: u32,
}

/// Result row of a multi-restaurant comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantAvailability {
    pub restaurant_id: String,
    pub available: bool,
    pub tables: u32,
}

/// Per-restaurant slot statistics.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct GridStats {
    pub total_slots: usize,
    pub available_slots: usize,
    pub fully_booked_slots: usize,
    pub availability_rate: f64,
}

type DateSlots = BTreeMap<String, u32>;

/// Three-level mapping: restaurant id -> date (`YYYY-MM-DD`) -> time
/// (`HH:MM`) -> remaining tables. Serializes transparently as the nested JSON
/// object. An absent key is distinct from a zero count, which is why lookups
/// return `Option` rather than defaulting to 0.
///
/// BTreeMaps keep dates and times in ascending order; lexicographic order is
/// correct because both formats are zero-padded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityGrid {
    cells: BTreeMap<String, BTreeMap<String, DateSlots>>,
}

impl AvailabilityGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn restaurant_count(&self) -> usize {
        self.cells.len()
    }

    pub fn restaurant_ids(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Set a single cell, creating the restaurant and date levels as needed.
    pub fn set(&mut self, restaurant_id: &str, date: &str, time: &str, tables: u32) {
        self.cells
            .entry(restaurant_id.to_string())
            .or_default()
            .entry(date.to_string())
            .or_default()
            .insert(time.to_string(), tables);
    }

    /// Direct three-level lookup. `None` means the restaurant, date or time
    /// is missing from the grid, which callers must not conflate with a
    /// present-but-fully-booked `Some(0)`.
    pub fn lookup(&self, restaurant_id: &str, date: &str, time: &str) -> Option<u32> {
        self.cells.get(restaurant_id)?.get(date)?.get(time).copied()
    }

    pub(crate) fn cell_mut(
        &mut self,
        restaurant_id: &str,
        date: &str,
        time: &str,
    ) -> Option<&mut u32> {
        self.cells.get_mut(restaurant_id)?.get_mut(date)?.get_mut(time)
    }

    /// All slots for a restaurant on one date holding at least `min_tables`,
    /// ascending by time of day.
    pub fn slots_for_date(
        &self,
        restaurant_id: &str,
        date: &str,
        min_tables: u32,
    ) -> Vec<SlotOpening> {
        self.cells
            .get(restaurant_id)
            .and_then(|dates| dates.get(date))
            .map(|slots| {
                slots
                    .iter()
                    .filter(|(_, &tables)| tables >= min_tables)
                    .map(|(time, &tables)| SlotOpening {
                        time: time.clone(),
                        available_tables: tables,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Dates with at least one slot holding `min_tables` or more, ascending.
    pub fn available_dates(&self, restaurant_id: &str, min_tables: u32) -> Vec<String> {
        self.cells
            .get(restaurant_id)
            .map(|dates| {
                dates
                    .iter()
                    .filter(|(_, slots)| slots.values().any(|&tables| tables >= min_tables))
                    .map(|(date, _)| date.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Open slots nearest to `preferred_time`, excluding the preferred time
    /// itself. Ranked by absolute distance in minutes since midnight; the
    /// sort is stable, so equally distant slots stay in ascending time order.
    pub fn find_alternatives(
        &self,
        restaurant_id: &str,
        date: &str,
        preferred_time: &str,
        min_tables: u32,
        max_alternatives: usize,
    ) -> Vec<SlotOpening> {
        let Some(preferred) = time_to_minutes(preferred_time) else {
            return Vec::new();
        };

        let mut alternatives: Vec<SlotOpening> = self
            .slots_for_date(restaurant_id, date, min_tables)
            .into_iter()
            .filter(|slot| slot.time != preferred_time)
            .collect();

        alternatives.sort_by_key(|slot| {
            time_to_minutes(&slot.time).map_or(u32::MAX, |minutes| minutes.abs_diff(preferred))
        });
        alternatives.truncate(max_alternatives);
        alternatives
    }

    /// Check one (date, time) cell across several restaurants, in the order
    /// the ids were given. A missing cell counts as zero tables.
    pub fn compare_across(
        &self,
        restaurant_ids: &[&str],
        date: &str,
        time: &str,
        min_tables: u32,
    ) -> Vec<RestaurantAvailability> {
        restaurant_ids
            .iter()
            .map(|id| {
                let tables = self.lookup(id, date, time).unwrap_or(0);
                RestaurantAvailability {
                    restaurant_id: (*id).to_string(),
                    available: tables >= min_tables,
                    tables,
                }
            })
            .collect()
    }

    /// Slot statistics for one restaurant across its whole horizon.
    pub fn stats_for(&self, restaurant_id: &str) -> GridStats {
        let mut stats = GridStats::default();

        if let Some(dates) = self.cells.get(restaurant_id) {
            for slots in dates.values() {
                for &tables in slots.values() {
                    stats.total_slots += 1;
                    if tables > 0 {
                        stats.available_slots += 1;
                    } else {
                        stats.fully_booked_slots += 1;
                    }
                }
            }
        }

        stats.availability_rate = if stats.total_slots > 0 {
            stats.available_slots as f64 / stats.total_slots as f64 * 100.0
        } else {
            0.0
        };
        stats
    }
}

/// Load a grid from its nested JSON form.
pub fn load_grid(path: impl AsRef<Path>) -> Result<AvailabilityGrid, GridError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Lenient variant: an unreadable or malformed file yields an empty grid and
/// a warning instead of an error. Callers that need to distinguish use
/// [`load_grid`].
pub fn load_grid_or_default(path: impl AsRef<Path>) -> AvailabilityGrid {
    match load_grid(path.as_ref()) {
        Ok(grid) => grid,
        Err(e) => {
            warn!(
                path = %path.as_ref().display(),
                error = %e,
                "failed to load availability grid, starting empty"
            );
            AvailabilityGrid::new()
        }
    }
}

pub fn save_grid(grid: &AvailabilityGrid, path: impl AsRef<Path>) -> Result<(), GridError> {
    let json = serde_json::to_string_pretty(grid)?;
    std::fs::write(path, json)?;
    Ok(())
}
