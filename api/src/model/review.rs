use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{AccountId, BookingId, ReviewId},
    review::{event::CreateReview, Review},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[garde(skip)]
    pub author: AccountId,
    #[garde(length(min = 1))]
    pub text: String,
    #[garde(range(min = 1, max = 5))]
    pub rating: i32,
}

// 予約 ID はパスから受け取るため、リクエストと組み合わせてイベントに変換する
#[derive(new)]
pub struct CreateReviewRequestWithBookingId(BookingId, CreateReviewRequest);

impl From<CreateReviewRequestWithBookingId> for CreateReview {
    fn from(value: CreateReviewRequestWithBookingId) -> Self {
        let CreateReviewRequestWithBookingId(
            booking_id,
            CreateReviewRequest {
                author,
                text,
                rating,
            },
        ) = value;
        CreateReview::new(booking_id, author, text, rating)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: ReviewId,
    pub transaction: BookingId,
    pub author: AccountId,
    pub text: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        let Review {
            review_id,
            booking_id,
            author_id,
            text,
            rating,
            created_at,
        } = value;
        Self {
            id: review_id,
            transaction: booking_id,
            author: author_id,
            text,
            rating,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(rating: i32) -> CreateReviewRequest {
        CreateReviewRequest {
            author: AccountId::new(),
            text: "Lovely day out".into(),
            rating,
        }
    }

    #[test]
    fn rating_outside_range_is_rejected() {
        assert!(request(0).validate(&()).is_err());
        assert!(request(6).validate(&()).is_err());
        assert!(request(4).validate(&()).is_ok());
    }

    #[test]
    fn converts_with_booking_id_from_path() {
        let booking_id = BookingId::new();
        let req = request(5);
        let author = req.author;

        let event = CreateReview::from(CreateReviewRequestWithBookingId::new(booking_id, req));

        assert_eq!(event.booking_id, booking_id);
        assert_eq!(event.author_id, author);
        assert_eq!(event.text, "Lovely day out");
        assert_eq!(event.rating, 5);
    }
}
