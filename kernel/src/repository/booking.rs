use crate::model::{
    booking::{event::CreateBooking, Booking},
    id::{AccountId, BookingId},
    review::{event::CreateReview, Review},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 予約を作成し、関連情報を含めて取得し直したものを返す
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    // 予約の総件数を返す
    async fn count(&self) -> AppResult<i64>;
    // ガイドの既存予約と期間（両端を含む）が重ならなければ true
    async fn is_tour_guide_available(
        &self,
        tour_guide_id: AccountId,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> AppResult<bool>;
    // 存在しない ID の場合は None
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    // 作成日時の新しい順
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    // クライアントに紐づく予約を作成日時の新しい順に返す
    async fn find_by_client_id(&self, client_id: AccountId) -> AppResult<Vec<Booking>>;
    // レビューを作成し、保存された行をそのまま返す
    async fn create_review(&self, event: CreateReview) -> AppResult<Review>;
}
