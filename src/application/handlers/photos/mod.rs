mod upload_photo;

pub use upload_photo::{UploadPhotoCommand, UploadPhotoError, UploadPhotoHandler};
