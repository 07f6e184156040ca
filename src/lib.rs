//! # thecatapi
//!
//! Rust client for [The Cat API](https://thecatapi.com): random cat images,
//! breed metadata, facts and image uploads.
//!
//! ## Quick Start
//!
//! ```no_run
//! use thecatapi::{CatApi, ImageSearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // An API key is optional but lifts the 10 images per request cap
//!     let client = CatApi::with_api_key("live_xxx")?;
//!
//!     let cats = client.search_images(ImageSearchParams::new().with_limit(10)).await?;
//!
//!     for cat in cats {
//!         println!("{}", cat.url);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! ```no_run
//! use thecatapi::{CatApi, CatApiConfig};
//!
//! let client = CatApi::with_config(
//!     CatApiConfig::new()
//!         .with_api_key("live_xxx")
//!         .with_base_url("https://custom.api.url/v1")
//!         .with_timeout(10)
//! )?;
//! # Ok::<(), thecatapi::CatApiError>(())
//! ```
//!
//! ## Error Handling
//!
//! Nothing is retried. Every call either returns the decoded payload or fails
//! straight away:
//!
//! ```no_run
//! use thecatapi::{CatApi, CatApiError};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CatApi::new()?;
//!
//! match client.get_image("0XYvRd7oD").await {
//!     Ok(image) => println!("Image: {}", image.url),
//!     Err(CatApiError::Status { status: 404 }) => eprintln!("No such image"),
//!     Err(e) if e.is_validation() => eprintln!("Bad parameters: {}", e),
//!     Err(e) if e.is_local() => eprintln!("Request not sent: {}", e),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Each request emits one `debug` level [`tracing`] event with the method
//! and full URL. Install a subscriber to see it.

mod client;
mod error;
mod multipart;
mod params;
mod types;

pub use client::{CatApi, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{CatApiError, Result};
pub use params::{
    BreedParams, FactParams, ImageSearchParams, UploadParams, YourImagesParams,
    MAX_YOUR_IMAGES_LIMIT,
};
pub use types::{
    // Configuration
    CatApiConfig,
    StatusPolicy,
    // Enums
    Format,
    ImageSize,
    Order,
    // Breeds
    Breed,
    BreedImage,
    Weight,
    // Images
    Category,
    Image,
    ImageDetails,
    UploadResponse,
    UploadedImage,
    // Facts
    Fact,
};
