pub mod format;
pub mod image;
pub mod pagination;

pub use image::{PayloadError, SearchPage, SearchPayload, SpaceImage, LIST_KEYS};
pub use pagination::{has_more, PageRequest, RequestMode, SearchState, PAGE_SIZE};
