//! Request parameters
//!
//! Every endpoint takes a parameter struct whose `Default` holds the values
//! the API documents. `with_*` methods each set one field; calling the same
//! one twice keeps the last value. Zero numbers, empty strings and unset
//! enums are left out of the query string.

use std::collections::BTreeMap;

use crate::error::{CatApiError, Result};
use crate::types::{Format, ImageSize, Order};

/// Largest `limit` accepted when listing your own images
pub const MAX_YOUR_IMAGES_LIMIT: u32 = 10;

/// Query values keyed by parameter name, encoded in key order
pub(crate) type Query = BTreeMap<&'static str, String>;

fn put_number(query: &mut Query, key: &'static str, value: u32) {
    if value > 0 {
        query.insert(key, value.to_string());
    }
}

fn put_str(query: &mut Query, key: &'static str, value: &str) {
    if !value.is_empty() {
        query.insert(key, value.to_string());
    }
}

// ============ Breeds ============

/// Parameters for listing breeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedParams {
    pub page: u32,
    pub limit: u32,
}

impl Default for BreedParams {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl BreedParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        put_number(&mut query, "page", self.page);
        put_number(&mut query, "limit", self.limit);
        query
    }
}

// ============ Facts ============

/// Parameters for fetching facts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactParams {
    pub limit: u32,
    pub page: u32,
    pub order: Option<Order>,
}

impl Default for FactParams {
    fn default() -> Self {
        Self {
            limit: 10,
            page: 1,
            order: Some(Order::Random),
        }
    }
}

impl FactParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        put_number(&mut query, "limit", self.limit);
        put_number(&mut query, "page", self.page);
        if let Some(order) = self.order {
            query.insert("order", order.as_str().to_string());
        }
        query
    }
}

// ============ Image search ============

/// Parameters for searching images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSearchParams {
    pub page: u32,
    pub limit: u32,
    pub size: Option<ImageSize>,
    /// Accepted file types, e.g. `jpg`, `png`, `gif`
    pub mime_types: Vec<String>,
    pub format: Option<Format>,
    /// Only return images that have breed information
    pub has_breeds: bool,
    pub order: Option<Order>,
}

impl Default for ImageSearchParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 1,
            size: Some(ImageSize::Full),
            mime_types: Vec::new(),
            format: Some(Format::Json),
            has_breeds: false,
            order: Some(Order::Random),
        }
    }
}

impl ImageSearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the number of images (the API caps unauthenticated calls at 10)
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_mime_types<I, S>(mut self, mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mime_types = mime_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_has_breeds(mut self, has_breeds: bool) -> Self {
        self.has_breeds = has_breeds;
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        put_number(&mut query, "page", self.page);
        put_number(&mut query, "limit", self.limit);
        if let Some(size) = self.size {
            query.insert("size", size.as_str().to_string());
        }
        if !self.mime_types.is_empty() {
            query.insert("mime_types", self.mime_types.join(","));
        }
        if let Some(format) = self.format {
            query.insert("format", format.as_str().to_string());
        }
        if self.has_breeds {
            query.insert("has_breeds", "true".to_string());
        }
        if let Some(order) = self.order {
            query.insert("order", order.as_str().to_string());
        }
        query
    }
}

// ============ Your images ============

/// Parameters for listing images uploaded with your API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YourImagesParams {
    /// At most [`MAX_YOUR_IMAGES_LIMIT`]
    pub limit: u32,
    pub page: u32,
    pub order: Option<Order>,
    pub sub_id: String,
    pub breed_ids: String,
    pub category_ids: String,
    pub format: Option<Format>,
    pub original_filename: String,
    pub user_id: String,
}

impl Default for YourImagesParams {
    fn default() -> Self {
        Self {
            limit: 10,
            page: 0,
            order: None,
            sub_id: String::new(),
            breed_ids: String::new(),
            category_ids: String::new(),
            format: None,
            original_filename: String::new(),
            user_id: String::new(),
        }
    }
}

impl YourImagesParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_sub_id(mut self, sub_id: impl Into<String>) -> Self {
        self.sub_id = sub_id.into();
        self
    }

    /// Comma-separated breed IDs
    pub fn with_breed_ids(mut self, breed_ids: impl Into<String>) -> Self {
        self.breed_ids = breed_ids.into();
        self
    }

    /// Comma-separated category IDs
    pub fn with_category_ids(mut self, category_ids: impl Into<String>) -> Self {
        self.category_ids = category_ids.into();
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_original_filename(mut self, original_filename: impl Into<String>) -> Self {
        self.original_filename = original_filename.into();
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub(crate) fn to_query(&self) -> Result<Query> {
        if self.limit > MAX_YOUR_IMAGES_LIMIT {
            return Err(CatApiError::validation(format!(
                "limit must be less than or equal to {}, got {}",
                MAX_YOUR_IMAGES_LIMIT, self.limit
            )));
        }

        let mut query = Query::new();
        put_number(&mut query, "limit", self.limit);
        put_number(&mut query, "page", self.page);
        if let Some(order) = self.order {
            query.insert("order", order.as_str().to_string());
        }
        put_str(&mut query, "sub_id", &self.sub_id);
        put_str(&mut query, "breed_ids", &self.breed_ids);
        put_str(&mut query, "category_ids", &self.category_ids);
        if let Some(format) = self.format {
            query.insert("format", format.as_str().to_string());
        }
        put_str(&mut query, "original_filename", &self.original_filename);
        put_str(&mut query, "user_id", &self.user_id);
        Ok(query)
    }
}

// ============ Upload ============

/// Optional form fields sent with an image upload
///
/// Values are written into the form as plain text. A value containing a
/// carriage return or line feed is rejected with `CatApiError::Validation`
/// before anything is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadParams {
    /// Your own identifier for the image, e.g. a user ID
    pub sub_id: Option<String>,
    /// Breed the image shows
    pub breed_ids: Option<String>,
}

impl UploadParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sub_id(mut self, sub_id: impl Into<String>) -> Self {
        self.sub_id = Some(sub_id.into());
        self
    }

    pub fn with_breed_ids(mut self, breed_ids: impl Into<String>) -> Self {
        self.breed_ids = Some(breed_ids.into());
        self
    }
}
