//! Shapes shared across resource domains.

use serde::{Deserialize, Serialize};

/// One page of a server-side paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> PagedResponse<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// `{ success, message, data }` wrapper used by a few staff endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Page selection for listing endpoints; unset fields use server defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }
}

/// Date-bounded report filter scoped to a branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilter {
    pub branch_id: String,
    pub from_date: Option<chrono::NaiveDate>,
    pub to_date: Option<chrono::NaiveDate>,
}

impl ReportFilter {
    #[must_use]
    pub fn for_branch(branch_id: impl Into<String>) -> Self {
        Self {
            branch_id: branch_id.into(),
            from_date: None,
            to_date: None,
        }
    }

    #[must_use]
    pub fn since(mut self, date: chrono::NaiveDate) -> Self {
        self.from_date = Some(date);
        self
    }

    #[must_use]
    pub fn until(mut self, date: chrono::NaiveDate) -> Self {
        self.to_date = Some(date);
        self
    }
}
