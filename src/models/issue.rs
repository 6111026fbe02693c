//! Issue (checkout) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Status of a recorded checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum IssueStatus {
    Active,
}

/// A recorded checkout of one book copy by one student
///
/// The book title is a denormalized copy taken at checkout time; deleting the
/// book later does not rewrite outstanding issues.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: Uuid,
    pub student_id: String,
    pub isbn: String,
    pub book_title: String,
    pub issue_date: NaiveDate,
    pub status: IssueStatus,
}

impl Issue {
    pub fn new(student_id: String, isbn: String, book_title: String, issue_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            isbn,
            book_title,
            issue_date,
            status: IssueStatus::Active,
        }
    }
}
