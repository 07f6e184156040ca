//! The Cat API client

use reqwest::{header, Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::error::{CatApiError, Result};
use crate::multipart::encode_upload;
use crate::params::*;
use crate::types::*;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.thecatapi.com/v1";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;
const USER_AGENT: &str = concat!("thecatapi-rust/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-api-key";
const JSON_CONTENT_TYPE: &str = "application/json";

/// The Cat API client
///
/// The client is cheap to clone and can be shared between tasks; nothing in
/// it changes after construction.
///
/// # Example
///
/// ```no_run
/// use thecatapi::{CatApi, ImageSearchParams, ImageSize};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CatApi::with_api_key("live_xxx")?;
///
///     let cats = client.search_images(
///         ImageSearchParams::new()
///             .with_limit(5)
///             .with_size(ImageSize::Small)
///     ).await?;
///
///     for cat in cats {
///         println!("{}", cat.url);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CatApi {
    api_key: Option<String>,
    base_url: String,
    client: Client,
    status_policy: StatusPolicy,
}

/// A single call to the API, built by an endpoint method
#[derive(Debug)]
struct ApiRequest {
    method: Method,
    path: String,
    /// Caller-supplied segment appended to `path`, percent-encoded
    segment: Option<String>,
    query: Option<Query>,
    body: Option<Vec<u8>>,
    content_type: Option<String>,
}

impl ApiRequest {
    fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            segment: None,
            query: None,
            body: None,
            content_type: Some(JSON_CONTENT_TYPE.to_string()),
        }
    }

    fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    fn with_query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }
}

impl CatApi {
    /// Create an unauthenticated client with default settings
    ///
    /// Without a key the API serves at most 10 images per search.
    pub fn new() -> Result<Self> {
        Self::with_config(CatApiConfig::new())
    }

    /// Create a client that sends `api_key` with every request
    ///
    /// # Example
    ///
    /// ```no_run
    /// use thecatapi::CatApi;
    ///
    /// let client = CatApi::with_api_key("live_xxx")?;
    /// # Ok::<(), thecatapi::CatApiError>(())
    /// ```
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(CatApiConfig::new().with_api_key(api_key))
    }

    /// Create a client with custom configuration
    ///
    /// The base URL is not checked here; a malformed one is reported as
    /// `CatApiError::InvalidUrl` by the first request.
    ///
    /// # Errors
    ///
    /// Returns `CatApiError::Network` if the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use thecatapi::{CatApi, CatApiConfig};
    ///
    /// let client = CatApi::with_config(
    ///     CatApiConfig::new()
    ///         .with_api_key("live_xxx")
    ///         .with_timeout(10)
    /// )?;
    /// # Ok::<(), thecatapi::CatApiError>(())
    /// ```
    pub fn with_config(config: CatApiConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let client = match config.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(Duration::from_secs(
                    config
                        .timeout
                        .filter(|&secs| secs > 0)
                        .unwrap_or(DEFAULT_TIMEOUT),
                ))
                .user_agent(USER_AGENT)
                .build()?,
        };

        Ok(Self {
            api_key: config.api_key.filter(|key| !key.is_empty()),
            base_url,
            client,
            status_policy: config.status_policy,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ============ Images ============

    /// Search random cat images
    ///
    /// # Example
    ///
    /// ```no_run
    /// use thecatapi::{CatApi, ImageSearchParams};
    ///
    /// # async fn example() -> thecatapi::Result<()> {
    /// let client = CatApi::new()?;
    /// let cats = client.search_images(
    ///     ImageSearchParams::new()
    ///         .with_mime_types(["jpg", "png"])
    ///         .with_has_breeds(true)
    /// ).await?;
    ///
    /// for cat in cats {
    ///     println!("{}: {}", cat.id, cat.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_images(&self, params: ImageSearchParams) -> Result<Vec<Image>> {
        self.execute(ApiRequest::get("/images/search").with_query(params.to_query()))
            .await
    }

    /// Fetch a single image by its ID
    ///
    /// # Errors
    ///
    /// Returns `CatApiError::Validation` without contacting the API if `id`
    /// is empty, `.` or `..`. Any other ID is sent as a single escaped path
    /// segment, so `/`, `?` and `#` never change the target resource.
    pub async fn get_image(&self, id: &str) -> Result<ImageDetails> {
        if id.is_empty() {
            return Err(CatApiError::validation("image ID is required"));
        }
        if id == "." || id == ".." {
            return Err(CatApiError::validation(format!("invalid image ID {:?}", id)));
        }

        self.execute(ApiRequest::get("/images").with_segment(id))
            .await
    }

    /// List images uploaded with this client's API key
    ///
    /// # Errors
    ///
    /// Returns `CatApiError::Validation` without contacting the API if the
    /// limit is above [`MAX_YOUR_IMAGES_LIMIT`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use thecatapi::{CatApi, YourImagesParams};
    ///
    /// # async fn example() -> thecatapi::Result<()> {
    /// let client = CatApi::with_api_key("live_xxx")?;
    /// let mine = client.get_your_images(
    ///     YourImagesParams::new().with_sub_id("user-42").with_limit(5)
    /// ).await?;
    ///
    /// println!("{} uploads", mine.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_your_images(&self, params: YourImagesParams) -> Result<Vec<UploadedImage>> {
        let query = params.to_query()?;
        self.execute(ApiRequest::get("/images/search").with_query(query))
            .await
    }

    /// Upload an image
    ///
    /// The file part is always labelled `image/jpeg`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use thecatapi::{CatApi, UploadParams};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CatApi::with_api_key("live_xxx")?;
    /// let image = std::fs::read("cat.jpg")?;
    ///
    /// let upload = client.upload_image(
    ///     &image,
    ///     "cat.jpg",
    ///     UploadParams::new().with_sub_id("my-cat")
    /// ).await?;
    ///
    /// println!("Uploaded {}", upload.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload_image(
        &self,
        image: &[u8],
        file_name: &str,
        params: UploadParams,
    ) -> Result<UploadResponse> {
        let body = encode_upload(image, file_name, &params)?;

        self.execute(ApiRequest {
            method: Method::POST,
            path: "/images/upload".to_string(),
            segment: None,
            query: None,
            body: Some(body.bytes),
            content_type: Some(body.content_type),
        })
        .await
    }

    // ============ Breeds & Facts ============

    /// List cat breeds
    ///
    /// # Example
    ///
    /// ```no_run
    /// use thecatapi::{CatApi, BreedParams};
    ///
    /// # async fn example() -> thecatapi::Result<()> {
    /// let client = CatApi::new()?;
    /// let breeds = client.get_breeds(BreedParams::new().with_limit(5)).await?;
    ///
    /// for breed in breeds {
    ///     println!("{} ({})", breed.name, breed.origin);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_breeds(&self, params: BreedParams) -> Result<Vec<Breed>> {
        self.execute(ApiRequest::get("/breeds").with_query(params.to_query()))
            .await
    }

    /// Fetch cat facts
    pub async fn get_facts(&self, params: FactParams) -> Result<Vec<Fact>> {
        self.execute(ApiRequest::get("/facts").with_query(params.to_query()))
            .await
    }

    // ============ Internal Methods ============

    fn build_url(&self, request: &ApiRequest) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, request.path);
        let mut url = Url::parse(&raw).map_err(|source| CatApiError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;

        if let Some(segment) = &request.segment {
            url.path_segments_mut()
                .map_err(|()| CatApiError::InvalidUrl {
                    url: raw.clone(),
                    source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
                })?
                .push(segment);
        }

        if let Some(query) = request.query.as_ref().filter(|q| !q.is_empty()) {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let url = self.build_url(&request)?;

        tracing::debug!(method = %request.method, url = %url, "sending request");

        let mut builder = self.client.request(request.method, url);

        if let Some(content_type) = request.content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        if let Some(api_key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, api_key);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;

        // A rejected status is reported without reading the body
        let status = response.status().as_u16();
        if !self.status_policy.accepts(status) {
            return Err(CatApiError::Status { status });
        }

        let bytes = response.bytes().await.map_err(transport_error)?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn transport_error(e: reqwest::Error) -> CatApiError {
    if e.is_timeout() {
        CatApiError::Timeout
    } else {
        CatApiError::Network(e)
    }
}
