use crate::model::id::{AccountId, ListingId};
use chrono::NaiveDate;
use derive_new::new;

// 日付の前後関係や各 ID の存在確認は行わない
// 不整合はストア側の制約違反としてエラーになる
#[derive(new, Debug)]
pub struct CreateBooking {
    pub custom_number: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub listing_id: ListingId,
    pub client_id: AccountId,
    pub tour_guide_id: AccountId,
}
