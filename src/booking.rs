// Booking engine: request validation, booking record creation and the commit
// step that decrements grid availability once a booking is confirmed.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::availability::AvailabilityGrid;
use crate::timeutil::{self, day_of_week_name};

pub const MAX_PARTY_SIZE: u32 = 20;

const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A rule a booking request can break. All applicable violations are
/// collected, never just the first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Cannot book for a past date")]
    PastDate,

    #[error("Booking date must use YYYY-MM-DD format")]
    InvalidDateFormat,

    #[error("Party size must be at least 1")]
    PartyTooSmall,

    #[error("Party size cannot exceed 20. Please contact restaurant directly for large groups")]
    PartyTooLarge,

    #[error("Invalid time format. Use HH:MM")]
    InvalidTimeFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Completed,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        };
        f.write_str(status)
    }
}

/// What a customer asks for; validated before a [`Booking`] is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub date: String,
    pub time: String,
    pub party_size: u32,
    pub customer_name: String,
    pub customer_phone: String,
    pub special_requests: Option<String>,
}

/// A confirmed reservation. References one restaurant by id and one grid
/// cell by (restaurant, date, time); the name is denormalized for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub date: String,
    pub time: String,
    pub party_size: u32,
    pub customer_name: String,
    pub customer_phone: String,
    pub special_requests: Option<String>,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
}

/// Check a request against the booking rules, relative to an explicit
/// `today`. Every check runs; the error carries all violations.
///
/// Same-day bookings are allowed; only a strictly earlier calendar day is a
/// past date. The time check accepts any well-formed `HH:MM` with hour < 24
/// and minute < 60, not just canonical slots.
pub fn validate(
    date: &str,
    time: &str,
    party_size: u32,
    today: NaiveDate,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match timeutil::is_date_in_past(date, today) {
        Some(true) => errors.push(ValidationError::PastDate),
        Some(false) => {}
        None => errors.push(ValidationError::InvalidDateFormat),
    }

    if party_size < 1 {
        errors.push(ValidationError::PartyTooSmall);
    }
    if party_size > MAX_PARTY_SIZE {
        errors.push(ValidationError::PartyTooLarge);
    }

    match timeutil::parse_time(time) {
        Some((hours, minutes)) if hours < 24 && minutes < 60 => {}
        _ => errors.push(ValidationError::InvalidTimeFormat),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate against the local wall clock's today.
pub fn validate_now(date: &str, time: &str, party_size: u32) -> Result<(), Vec<ValidationError>> {
    validate(date, time, party_size, timeutil::today())
}

/// Booking identifiers encode the creation time plus a random suffix:
/// `BK<YYYYmmddHHMMSS><4 uppercase alphanumerics>`.
pub fn generate_booking_id(now: NaiveDateTime, rng: &mut impl Rng) -> String {
    let suffix: String = (0..4)
        .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
        .collect();
    format!("BK{}{}", now.format("%Y%m%d%H%M%S"), suffix)
}

/// Turn a validated request into a confirmed booking. Takes the clock and the
/// random source explicitly so tests are deterministic; does not touch the
/// availability grid.
pub fn create_booking(request: BookingRequest, now: NaiveDateTime, rng: &mut impl Rng) -> Booking {
    Booking {
        booking_id: generate_booking_id(now, rng),
        restaurant_id: request.restaurant_id,
        restaurant_name: request.restaurant_name,
        date: request.date,
        time: request.time,
        party_size: request.party_size,
        customer_name: request.customer_name,
        customer_phone: request.customer_phone,
        special_requests: request.special_requests,
        status: BookingStatus::Confirmed,
        created_at: now,
    }
}

/// Convenience wrapper over [`create_booking`] using the local clock and the
/// thread-local random source.
pub fn create_booking_now(request: BookingRequest) -> Booking {
    create_booking(request, Local::now().naive_local(), &mut rand::thread_rng())
}

/// Commit a confirmed booking against the grid: returns an independent copy
/// with the target cell decremented by `tables_booked`, floored at 0. The
/// caller's grid is never mutated, so readers holding the old value keep a
/// consistent snapshot.
///
/// A (restaurant, date, time) path missing from the grid leaves the copy
/// unchanged. The upstream system treated that as a silent success, which
/// hides bookings against never-generated slots, so it is logged here.
pub fn apply_booking(
    grid: &AvailabilityGrid,
    restaurant_id: &str,
    date: &str,
    time: &str,
    tables_booked: u32,
) -> AvailabilityGrid {
    let mut updated = grid.clone();
    match updated.cell_mut(restaurant_id, date, time) {
        Some(tables) => *tables = tables.saturating_sub(tables_booked),
        None => warn!(
            restaurant_id,
            date, time, "booking committed against a slot missing from the grid; no availability was decremented"
        ),
    }
    updated
}

/// Human-readable confirmation summary. Pure display transform over the
/// booking record.
pub fn format_confirmation(booking: &Booking) -> String {
    let weekday = day_of_week_name(&booking.date).unwrap_or_default();
    let special_requests = booking
        .special_requests
        .as_ref()
        .map(|requests| format!("\nSpecial Requests: {}", requests))
        .unwrap_or_default();

    format!(
        "BOOKING CONFIRMATION\n\
         Confirmation Number: {}\n\
         Restaurant: {}\n\
         Date: {} ({})\n\
         Time: {}\n\
         Party Size: {}\n\
         Name: {}\n\
         Phone: {}{}\n\
         Status: {}\n\
         Booked on: {}",
        booking.booking_id,
        booking.restaurant_name,
        booking.date,
        weekday,
        booking.time,
        booking.party_size,
        booking.customer_name,
        booking.customer_phone,
        special_requests,
        booking.status.to_string().to_uppercase(),
        booking.created_at.format("%Y-%m-%dT%H:%M:%S"),
    )
}
