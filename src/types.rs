//! The Cat API types

use serde::{Deserialize, Serialize};

// ============ Configuration ============

/// How response status codes are classified as success
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Any 2xx status is a success (default)
    #[default]
    AnySuccess,
    /// Only `200 OK` is a success.
    ///
    /// Older releases checked GET responses this way, which rejects valid
    /// `201 Created` answers. Kept for callers relying on that behavior.
    ExactOk,
}

impl StatusPolicy {
    /// Returns true if `status` counts as a successful response
    pub fn accepts(self, status: u16) -> bool {
        match self {
            StatusPolicy::AnySuccess => (200..300).contains(&status),
            StatusPolicy::ExactOk => status == 200,
        }
    }
}

/// Configuration for the Cat API client
#[derive(Debug, Clone, Default)]
pub struct CatApiConfig {
    /// API key sent as `x-api-key` (unauthenticated when unset or empty)
    pub api_key: Option<String>,
    /// Base URL for the API (default: https://api.thecatapi.com/v1)
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 30, also used for 0)
    pub timeout: Option<u64>,
    /// Pre-built HTTP client, used instead of building one from `timeout`
    pub http_client: Option<reqwest::Client>,
    /// Status classification (default: any 2xx)
    pub status_policy: StatusPolicy,
}

impl CatApiConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a custom timeout in seconds
    ///
    /// `0` means the default of [`DEFAULT_TIMEOUT`](crate::DEFAULT_TIMEOUT)
    /// seconds rather than no time at all.
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a pre-configured HTTP client
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the status classification policy
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }
}

// ============ Enums ============

/// Image size served by the search endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Thumb,
    Small,
    Med,
    Full,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::Thumb => "thumb",
            ImageSize::Small => "small",
            ImageSize::Med => "med",
            ImageSize::Full => "full",
        }
    }
}

/// Response format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Src,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Src => "src",
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Order {
    Random,
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Random => "RANDOM",
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

// ============ Breeds ============

/// Breed weight range
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Weight {
    #[serde(default)]
    pub imperial: String,
    #[serde(default)]
    pub metric: String,
}

/// Reference image attached to a breed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedImage {
    pub id: String,
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Breed metadata
///
/// Trait scores (`adaptability`, `grooming`, ...) are on a 1-5 scale, flags
/// (`indoor`, `hairless`, ...) are 0 or 1. Fields missing from a payload
/// decode as zero or empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Breed {
    pub id: String,
    pub name: String,
    pub cfa_url: Option<String>,
    pub vetstreet_url: Option<String>,
    pub vcahospitals_url: Option<String>,
    pub temperament: String,
    pub origin: String,
    pub country_codes: String,
    pub country_code: String,
    pub description: String,
    pub life_span: String,
    pub indoor: u8,
    pub lap: u8,
    pub alt_names: String,
    pub adaptability: u8,
    pub affection_level: u8,
    pub child_friendly: u8,
    pub dog_friendly: u8,
    pub energy_level: u8,
    pub grooming: u8,
    pub health_issues: u8,
    pub intelligence: u8,
    pub shedding_level: u8,
    pub social_needs: u8,
    pub stranger_friendly: u8,
    pub vocalisation: u8,
    pub experimental: u8,
    pub hairless: u8,
    pub natural: u8,
    pub rare: u8,
    pub rex: u8,
    pub suppressed_tail: u8,
    pub short_legs: u8,
    pub wikipedia_url: Option<String>,
    pub hypoallergenic: u8,
    pub reference_image_id: Option<String>,
    pub image: Option<BreedImage>,
    pub weight: Weight,
}

// ============ Images ============

/// Image returned by a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Only populated when searching with `has_breeds`
    #[serde(default)]
    pub breeds: Vec<Breed>,
}

/// Image category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Single image fetched by ID
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDetails {
    pub id: String,
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub breeds: Vec<Breed>,
    #[serde(default)]
    pub breed_ids: Option<String>,
}

/// Image uploaded by the account owning the API key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedImage {
    pub id: String,
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub sub_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub breed_ids: Option<String>,
    #[serde(default)]
    pub breeds: Vec<Breed>,
}

/// Confirmation returned after an upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: String,
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub sub_id: Option<String>,
    /// 1 while awaiting moderation
    #[serde(default)]
    pub pending: u8,
    /// 1 once the image passed moderation
    #[serde(default)]
    pub approved: u8,
}

// ============ Facts ============

/// Cat fact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    pub id: String,
    pub fact: String,
    #[serde(default)]
    pub breed_ids: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}
