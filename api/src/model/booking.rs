use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    account::{Account, Profile},
    booking::{event::CreateBooking, Booking},
    id::{AccountId, ActivityId, BookingId, DayId, ImageId, ListingId},
    image::Image,
    listing::{Activity, Listing, ListingDay},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(length(min = 1))]
    pub custom_number: String,
    #[garde(skip)]
    pub from_date: NaiveDate,
    #[garde(skip)]
    pub to_date: NaiveDate,
    #[garde(skip)]
    pub post_id: ListingId,
    #[garde(skip)]
    pub client_id: AccountId,
    #[garde(skip)]
    pub tour_guide_id: AccountId,
}

impl From<CreateBookingRequest> for CreateBooking {
    fn from(value: CreateBookingRequest) -> Self {
        let CreateBookingRequest {
            custom_number,
            from_date,
            to_date,
            post_id,
            client_id,
            tour_guide_id,
        } = value;
        CreateBooking::new(
            custom_number,
            from_date,
            to_date,
            post_id,
            client_id,
            tour_guide_id,
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    #[garde(skip)]
    pub from_date: NaiveDate,
    #[garde(skip)]
    pub to_date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub tour_guide_id: AccountId,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub available: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCountResponse {
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub custom_number: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub post: ListingResponse,
    pub client: AccountResponse,
    pub tour_guide: AccountResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            custom_number,
            from_date,
            to_date,
            created_at,
            listing,
            client,
            tour_guide,
        } = value;
        Self {
            id: booking_id,
            custom_number,
            from_date,
            to_date,
            created_at,
            post: listing.into(),
            client: client.into(),
            tour_guide: tour_guide.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: AccountId,
    pub email: String,
    pub profile: Option<ProfileResponse>,
}

impl From<Account> for AccountResponse {
    fn from(value: Account) -> Self {
        let Account {
            account_id,
            email,
            profile,
        } = value;
        Self {
            id: account_id,
            email,
            profile: profile.map(ProfileResponse::from),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub first_name: String,
    pub last_name: String,
    pub image: Option<ImageResponse>,
}

impl From<Profile> for ProfileResponse {
    fn from(value: Profile) -> Self {
        let Profile {
            first_name,
            last_name,
            image,
        } = value;
        Self {
            first_name,
            last_name,
            image: image.map(ImageResponse::from),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub id: ImageId,
    pub url: String,
}

impl From<Image> for ImageResponse {
    fn from(value: Image) -> Self {
        let Image { image_id, url } = value;
        Self { id: image_id, url }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub id: ListingId,
    pub title: String,
    pub description: String,
    pub images: Vec<ImageResponse>,
    pub days: Vec<ListingDayResponse>,
}

impl From<Listing> for ListingResponse {
    fn from(value: Listing) -> Self {
        let Listing {
            listing_id,
            title,
            description,
            images,
            days,
        } = value;
        Self {
            id: listing_id,
            title,
            description,
            images: images.into_iter().map(ImageResponse::from).collect(),
            days: days.into_iter().map(ListingDayResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDayResponse {
    pub id: DayId,
    pub day_number: i32,
    pub title: String,
    pub activities: Vec<ActivityResponse>,
}

impl From<ListingDay> for ListingDayResponse {
    fn from(value: ListingDay) -> Self {
        let ListingDay {
            day_id,
            day_number,
            title,
            activities,
        } = value;
        Self {
            id: day_id,
            day_number,
            title,
            activities: activities.into_iter().map(ActivityResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub id: ActivityId,
    pub position: i32,
    pub name: String,
    pub description: String,
}

impl From<Activity> for ActivityResponse {
    fn from(value: Activity) -> Self {
        let Activity {
            activity_id,
            position,
            name,
            description,
        } = value;
        Self {
            id: activity_id,
            position,
            name,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn account(email: &str) -> Account {
        Account {
            account_id: AccountId::new(),
            email: email.into(),
            profile: Some(Profile {
                first_name: "Mika".into(),
                last_name: "Tanaka".into(),
                image: None,
            }),
        }
    }

    fn booking() -> Booking {
        Booking {
            booking_id: BookingId::new(),
            custom_number: "TB-0042".into(),
            from_date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 12, 24, 12, 0, 0).unwrap(),
            listing: Listing {
                listing_id: ListingId::new(),
                title: "Island hopping".into(),
                description: "Three islands".into(),
                images: Vec::new(),
                days: vec![ListingDay {
                    day_id: DayId::new(),
                    day_number: 1,
                    title: "Arrival".into(),
                    activities: vec![Activity {
                        activity_id: ActivityId::new(),
                        position: 1,
                        name: "Snorkeling".into(),
                        description: "Reef".into(),
                    }],
                }],
            },
            client: account("client@example.com"),
            tour_guide: account("guide@example.com"),
        }
    }

    #[test]
    fn booking_response_serializes_in_camel_case_without_passwords() {
        let json = serde_json::to_value(BookingResponse::from(booking())).unwrap();

        assert_eq!(json["customNumber"], "TB-0042");
        assert_eq!(json["fromDate"], "2025-01-05");
        assert_eq!(json["toDate"], "2025-01-10");
        assert_eq!(json["post"]["days"][0]["dayNumber"], 1);
        assert_eq!(json["post"]["days"][0]["activities"][0]["name"], "Snorkeling");
        assert_eq!(json["tourGuide"]["email"], "guide@example.com");
        assert_eq!(json["client"]["profile"]["firstName"], "Mika");

        for key in ["client", "tourGuide"] {
            let account = json[key].as_object().unwrap();
            assert!(!account.contains_key("password"));
        }
        assert!(!json.to_string().contains("password"));
    }

    #[test]
    fn create_booking_request_deserializes_and_converts() {
        let post_id = ListingId::new();
        let client_id = AccountId::new();
        let tour_guide_id = AccountId::new();
        let body = serde_json::json!({
            "customNumber": "TB-1000",
            "fromDate": "2025-03-01",
            "toDate": "2025-03-04",
            "postId": post_id,
            "clientId": client_id,
            "tourGuideId": tour_guide_id,
        });

        let req: CreateBookingRequest = serde_json::from_value(body).unwrap();
        assert!(req.validate(&()).is_ok());

        let event = CreateBooking::from(req);
        assert_eq!(event.custom_number, "TB-1000");
        assert_eq!(event.from_date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(event.listing_id, post_id);
        assert_eq!(event.client_id, client_id);
        assert_eq!(event.tour_guide_id, tour_guide_id);
    }

    #[test]
    fn empty_custom_number_is_rejected() {
        let req = CreateBookingRequest {
            custom_number: String::new(),
            from_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            post_id: ListingId::new(),
            client_id: AccountId::new(),
            tour_guide_id: AccountId::new(),
        };
        assert!(req.validate(&()).is_err());
    }
}
