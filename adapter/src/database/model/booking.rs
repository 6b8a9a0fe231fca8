use kernel::model::{
    account::{Account, Profile},
    booking::Booking,
    id::{AccountId, BookingId, ImageId, ListingId},
    image::Image,
    listing::{Listing, ListingDay},
};
use sqlx::types::chrono::{DateTime, NaiveDate, Utc};

// 予約 1 件を、掲載・クライアント・ガイドの情報と結合して取得する際に使う型
// アカウントのパスワード列は SELECT しない
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub custom_number: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub post_id: ListingId,
    pub post_title: String,
    pub post_description: String,
    pub client_id: AccountId,
    pub client_email: String,
    pub client_first_name: Option<String>,
    pub client_last_name: Option<String>,
    pub client_image_id: Option<ImageId>,
    pub client_image_url: Option<String>,
    pub tour_guide_id: AccountId,
    pub tour_guide_email: String,
    pub tour_guide_first_name: Option<String>,
    pub tour_guide_last_name: Option<String>,
    pub tour_guide_image_id: Option<ImageId>,
    pub tour_guide_image_url: Option<String>,
}

// 掲載の画像と日程は別クエリで取得するため、From の代わりに引数をとる
impl BookingRow {
    pub fn into_booking(self, images: Vec<Image>, days: Vec<ListingDay>) -> Booking {
        let BookingRow {
            booking_id,
            custom_number,
            from_date,
            to_date,
            created_at,
            post_id,
            post_title,
            post_description,
            client_id,
            client_email,
            client_first_name,
            client_last_name,
            client_image_id,
            client_image_url,
            tour_guide_id,
            tour_guide_email,
            tour_guide_first_name,
            tour_guide_last_name,
            tour_guide_image_id,
            tour_guide_image_url,
        } = self;
        Booking {
            booking_id,
            custom_number,
            from_date,
            to_date,
            created_at,
            listing: Listing {
                listing_id: post_id,
                title: post_title,
                description: post_description,
                images,
                days,
            },
            client: Account {
                account_id: client_id,
                email: client_email,
                profile: profile_from(
                    client_first_name,
                    client_last_name,
                    client_image_id,
                    client_image_url,
                ),
            },
            tour_guide: Account {
                account_id: tour_guide_id,
                email: tour_guide_email,
                profile: profile_from(
                    tour_guide_first_name,
                    tour_guide_last_name,
                    tour_guide_image_id,
                    tour_guide_image_url,
                ),
            },
        }
    }
}

// LEFT JOIN のため、プロフィールが無いアカウントでは名前が NULL になる
fn profile_from(
    first_name: Option<String>,
    last_name: Option<String>,
    image_id: Option<ImageId>,
    image_url: Option<String>,
) -> Option<Profile> {
    let (first_name, last_name) = first_name.zip(last_name)?;
    let image = image_id
        .zip(image_url)
        .map(|(image_id, url)| Image { image_id, url });
    Some(Profile {
        first_name,
        last_name,
        image,
    })
}

// 一覧取得の際に、まず ID だけを並び順つきで取得するための型
#[derive(sqlx::FromRow)]
pub struct BookingIdRow {
    pub booking_id: BookingId,
}
