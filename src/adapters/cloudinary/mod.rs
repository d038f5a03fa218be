//! Image host adapter.

mod photo_store;

pub use photo_store::CloudinaryPhotoStore;
