use crate::model::{account::Account, id::BookingId, listing::Listing};
use chrono::{DateTime, NaiveDate, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub custom_number: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub listing: Listing,
    pub client: Account,
    pub tour_guide: Account,
}
