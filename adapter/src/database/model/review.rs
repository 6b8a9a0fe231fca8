use kernel::model::{
    id::{AccountId, BookingId, ReviewId},
    review::Review,
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct ReviewRow {
    pub review_id: ReviewId,
    pub booking_id: BookingId,
    pub author_id: AccountId,
    pub text: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(value: ReviewRow) -> Self {
        let ReviewRow {
            review_id,
            booking_id,
            author_id,
            text,
            rating,
            created_at,
        } = value;
        Review {
            review_id,
            booking_id,
            author_id,
            text,
            rating,
            created_at,
        }
    }
}
