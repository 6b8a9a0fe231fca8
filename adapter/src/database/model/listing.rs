use kernel::model::{
    id::{ActivityId, DayId, ImageId},
    image::Image,
    listing::{Activity, ListingDay},
};
use std::collections::HashMap;

#[derive(sqlx::FromRow)]
pub struct ImageRow {
    pub image_id: ImageId,
    pub url: String,
}

impl From<ImageRow> for Image {
    fn from(value: ImageRow) -> Self {
        let ImageRow { image_id, url } = value;
        Image { image_id, url }
    }
}

#[derive(sqlx::FromRow)]
pub struct ListingDayRow {
    pub day_id: DayId,
    pub day_number: i32,
    pub title: String,
}

#[derive(sqlx::FromRow)]
pub struct DayActivityRow {
    pub activity_id: ActivityId,
    pub day_id: DayId,
    pub position: i32,
    pub name: String,
    pub description: String,
}

// 日程の行と、全日程分のアクティビティの行を組み立てる
// 日程の並び順と、各日程内のアクティビティの並び順は入力の順序を保つ
pub fn assemble_days(days: Vec<ListingDayRow>, activities: Vec<DayActivityRow>) -> Vec<ListingDay> {
    let mut by_day: HashMap<DayId, Vec<Activity>> = HashMap::new();
    for row in activities {
        let DayActivityRow {
            activity_id,
            day_id,
            position,
            name,
            description,
        } = row;
        by_day.entry(day_id).or_default().push(Activity {
            activity_id,
            position,
            name,
            description,
        });
    }

    days.into_iter()
        .map(|day| {
            let ListingDayRow {
                day_id,
                day_number,
                title,
            } = day;
            ListingDay {
                day_id,
                day_number,
                title,
                activities: by_day.remove(&day_id).unwrap_or_default(),
            }
        })
        .collect()
}
