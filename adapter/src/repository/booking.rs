use crate::database::{
    model::{
        booking::{BookingIdRow, BookingRow},
        listing::{assemble_days, DayActivityRow, ImageRow, ListingDayRow},
        review::ReviewRow,
    },
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use futures::future::try_join_all;
use kernel::model::{
    booking::{event::CreateBooking, Booking},
    id::{AccountId, BookingId, ListingId, ReviewId},
    image::Image,
    listing::ListingDay,
    review::{event::CreateReview, Review},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    #[tracing::instrument(skip(self), err)]
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        // ID や日付の整合性はここでは確認しない
        // 外部キー違反などはストアのエラーとしてそのまま返す
        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, custom_number, from_date, to_date,
                post_id, client_id, tour_guide_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ;
            "#,
        )
        .bind(booking_id)
        .bind(&event.custom_number)
        .bind(event.from_date)
        .bind(event.to_date)
        .bind(event.listing_id)
        .bind(event.client_id)
        .bind(event.tour_guide_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        // 関連情報を含めた状態で取得し直して返す
        self.find_by_id(booking_id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!("booking ({booking_id}) was not found"))
        })
    }

    #[tracing::instrument(skip(self), err)]
    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    #[tracing::instrument(skip(self), err)]
    async fn is_tour_guide_available(
        &self,
        tour_guide_id: AccountId,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> AppResult<bool> {
        // 重複条件（両端を含む）：
        //     existing.from_date <= new.to_date AND new.from_date <= existing.to_date
        // 既存予約が新しい期間を包含する場合も、新しい期間が既存予約を包含する場合も検出される
        let overlap = sqlx::query_as::<_, BookingIdRow>(
            r#"
                SELECT booking_id
                FROM bookings
                WHERE tour_guide_id = $1
                  AND from_date <= $3
                  AND $2 <= to_date
                LIMIT 1
                ;
            "#,
        )
        .bind(tour_guide_id)
        .bind(from_date)
        .bind(to_date)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(overlap.is_none())
    }

    #[tracing::instrument(skip(self), err)]
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.custom_number,
                b.from_date,
                b.to_date,
                b.created_at,
                p.post_id,
                p.title AS post_title,
                p.description AS post_description,
                c.account_id AS client_id,
                c.email AS client_email,
                cp.first_name AS client_first_name,
                cp.last_name AS client_last_name,
                ci.image_id AS client_image_id,
                ci.url AS client_image_url,
                g.account_id AS tour_guide_id,
                g.email AS tour_guide_email,
                gp.first_name AS tour_guide_first_name,
                gp.last_name AS tour_guide_last_name,
                gi.image_id AS tour_guide_image_id,
                gi.url AS tour_guide_image_url
                FROM bookings AS b
                INNER JOIN posts AS p ON b.post_id = p.post_id
                INNER JOIN accounts AS c ON b.client_id = c.account_id
                LEFT JOIN profiles AS cp ON cp.account_id = c.account_id
                LEFT JOIN images AS ci ON cp.image_id = ci.image_id
                INNER JOIN accounts AS g ON b.tour_guide_id = g.account_id
                LEFT JOIN profiles AS gp ON gp.account_id = g.account_id
                LEFT JOIN images AS gi ON gp.image_id = gi.image_id
                WHERE b.booking_id = $1
                ;
            "#,
        )
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let images = self.find_listing_images(row.post_id).await?;
        let days = self.find_listing_days(row.post_id).await?;

        Ok(Some(row.into_booking(images, days)))
    }

    #[tracing::instrument(skip(self), err)]
    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let ids = sqlx::query_as::<_, BookingIdRow>(
            r#"
                SELECT booking_id
                FROM bookings
                ORDER BY created_at DESC
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        self.hydrate_all(ids).await
    }

    #[tracing::instrument(skip(self), err)]
    async fn find_by_client_id(&self, client_id: AccountId) -> AppResult<Vec<Booking>> {
        // find_all の SQL に
        // クライアント ID で絞り込む WHERE 句を追加したものである
        let ids = sqlx::query_as::<_, BookingIdRow>(
            r#"
                SELECT booking_id
                FROM bookings
                WHERE client_id = $1
                ORDER BY created_at DESC
                ;
            "#,
        )
        .bind(client_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        self.hydrate_all(ids).await
    }

    #[tracing::instrument(skip(self), err)]
    async fn create_review(&self, event: CreateReview) -> AppResult<Review> {
        sqlx::query_as::<_, ReviewRow>(
            r#"
                INSERT INTO booking_reviews
                (review_id, booking_id, author_id, text, rating)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING review_id, booking_id, author_id, text, rating, created_at
                ;
            "#,
        )
        .bind(ReviewId::new())
        .bind(event.booking_id)
        .bind(event.author_id)
        .bind(&event.text)
        .bind(event.rating)
        .fetch_one(self.db.inner_ref())
        .await
        .map(Review::from)
        .map_err(AppError::SpecificOperationError)
    }
}

impl BookingRepositoryImpl {
    // ID ごとに find_by_id を同時に発行し、ID の並び順のまま結果を返す
    // ID 取得後に消えた予約は結果に含めない
    async fn hydrate_all(&self, ids: Vec<BookingIdRow>) -> AppResult<Vec<Booking>> {
        let bookings = try_join_all(ids.into_iter().map(|row| self.find_by_id(row.booking_id)))
            .await?
            .into_iter()
            .flatten()
            .collect();
        Ok(bookings)
    }

    async fn find_listing_images(&self, listing_id: ListingId) -> AppResult<Vec<Image>> {
        sqlx::query_as::<_, ImageRow>(
            r#"
                SELECT i.image_id, i.url
                FROM post_images AS pi
                INNER JOIN images AS i ON pi.image_id = i.image_id
                WHERE pi.post_id = $1
                ORDER BY i.url ASC
                ;
            "#,
        )
        .bind(listing_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Image::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_listing_days(&self, listing_id: ListingId) -> AppResult<Vec<ListingDay>> {
        let days = sqlx::query_as::<_, ListingDayRow>(
            r#"
                SELECT day_id, day_number, title
                FROM post_days
                WHERE post_id = $1
                ORDER BY day_number ASC
                ;
            "#,
        )
        .bind(listing_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let activities = sqlx::query_as::<_, DayActivityRow>(
            r#"
                SELECT a.activity_id, a.day_id, a.position, a.name, a.description
                FROM day_activities AS a
                INNER JOIN post_days AS d ON a.day_id = d.day_id
                WHERE d.post_id = $1
                ORDER BY d.day_number ASC, a.position ASC
                ;
            "#,
        )
        .bind(listing_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(assemble_days(days, activities))
    }
}
