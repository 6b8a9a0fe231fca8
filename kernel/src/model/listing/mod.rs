use crate::model::{
    id::{ActivityId, DayId, ListingId},
    image::Image,
};

/// A tour product. Days are ordered by `day_number`, activities by `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub listing_id: ListingId,
    pub title: String,
    pub description: String,
    pub images: Vec<Image>,
    pub days: Vec<ListingDay>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDay {
    pub day_id: DayId,
    pub day_number: i32,
    pub title: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub activity_id: ActivityId,
    pub position: i32,
    pub name: String,
    pub description: String,
}
