pub mod account;
pub mod booking;
pub mod id;
pub mod image;
pub mod listing;
pub mod review;
