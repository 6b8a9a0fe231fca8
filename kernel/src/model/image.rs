use crate::model::id::ImageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub image_id: ImageId,
    pub url: String,
}
