use crate::model::id::{AccountId, BookingId, ReviewId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub review_id: ReviewId,
    pub booking_id: BookingId,
    pub author_id: AccountId,
    pub text: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}
