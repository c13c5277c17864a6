//! Document-store boundary contracts
//!
//! The explain pipeline sits next to a document management surface whose
//! persistence is implemented elsewhere. This module pins down that boundary
//! as explicit Rust contracts: the [`Document`] payload, the tagged
//! [`ApiResult`] envelope, paging types, and the [`DocumentStore`] capability
//! a boundary layer is wired with. Nothing here performs I/O.

use chrono::NaiveDateTime;

/// A document resource as exchanged across the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Option<i64>,
    /// Display name
    pub name: String,
    /// Top-level category (e.g. function reference, snippet)
    pub category: String,
    /// Document type within the category
    pub doc_type: String,
    pub subtype: String,
    pub description: String,
    /// Completion text inserted when the document is applied
    pub fill_value: String,
    /// Dialect version the document applies to
    pub version: String,
    pub like_num: i64,
    pub enabled: bool,
    pub create_time: Option<NaiveDateTime>,
    pub update_time: Option<NaiveDateTime>,
}

/// Status enumerant carried by every boundary result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    SaveSuccess,
    SaveFailed,
    DeleteSuccess,
    DeleteFailed,
    ModifySuccess,
    ModifyFailed,
    NotFound,
}

impl Status {
    /// Numeric status code: 0 for success variants, 1 for failure variants.
    pub fn code(&self) -> i32 {
        match self {
            Status::Success
            | Status::SaveSuccess
            | Status::DeleteSuccess
            | Status::ModifySuccess => 0,
            Status::SaveFailed
            | Status::DeleteFailed
            | Status::ModifyFailed
            | Status::NotFound => 1,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::SaveSuccess => "Save successful",
            Status::SaveFailed => "Save failed",
            Status::DeleteSuccess => "Delete successful",
            Status::DeleteFailed => "Delete failed",
            Status::ModifySuccess => "Modify successful",
            Status::ModifyFailed => "Modify failed",
            Status::NotFound => "Not found",
        }
    }
}

/// Tagged success/failure envelope returned by boundary operations.
///
/// Expected failures (not found, rejected save) are a [`ApiResult::Failure`]
/// value rather than an error return; only unexpected faults propagate as
/// errors at the layer that produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success { status: Status, data: T },
    Failure { status: Status },
}

impl<T> ApiResult<T> {
    pub fn succeed(status: Status, data: T) -> Self {
        ApiResult::Success { status, data }
    }

    pub fn failed(status: Status) -> Self {
        ApiResult::Failure { status }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    pub fn status(&self) -> Status {
        match self {
            ApiResult::Success { status, .. } => *status,
            ApiResult::Failure { status } => *status,
        }
    }

    /// The payload, if the result is a success.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Success { data, .. } => Some(data),
            ApiResult::Failure { .. } => None,
        }
    }
}

/// Paged query request.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    /// 1-based page number
    pub current: u64,
    /// Page size
    pub size: u64,
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub current: u64,
    pub size: u64,
    /// Total records across all pages
    pub total: u64,
    pub records: Vec<T>,
}

/// Capability a document boundary layer is wired with.
///
/// One operation per route of the document surface; implementations own the
/// persistence behavior, which is not specified here.
pub trait DocumentStore {
    /// Insert the document, or update it when its id already exists.
    fn save_or_update(&mut self, document: Document) -> ApiResult<()>;

    /// Paged listing of documents.
    fn list_documents(&self, params: &PageParams) -> Page<Document>;

    /// Delete the document with the given id.
    fn delete_by_id(&mut self, id: i64) -> ApiResult<()>;

    /// Toggle the enabled flag of the document with the given id.
    fn modify_status(&mut self, id: i64) -> ApiResult<()>;

    /// All documents recorded for a dialect version.
    fn get_all_by_version(&self, version: &str) -> ApiResult<Vec<Document>>;
}
