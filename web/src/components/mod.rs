pub mod error;
pub mod fallback_image;
pub mod icons;
pub mod loading;
pub mod navbar;

// Re-export commonly used types
pub use error::ErrorView;
pub use fallback_image::HideOnErrorImage;
pub use icons::{ArrowIcon, SearchIcon};
pub use loading::LoadingView;
pub use navbar::Navbar;
