use crate::model::id::{AccountId, BookingId};
use derive_new::new;

#[derive(new, Debug)]
pub struct CreateReview {
    pub booking_id: BookingId,
    pub author_id: AccountId,
    pub text: String,
    pub rating: i32,
}
