//! Student (roster member) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Student record as stored in the roster collection
///
/// The id is caller-supplied and treated as the unique key. The password is
/// stored in clear text, so the full record never leaves the server; wire
/// responses use [`StudentPublic`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    /// Registration date; absent on seed records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Student view with the password stripped
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentPublic {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Student {
    pub fn into_public(self) -> StudentPublic {
        StudentPublic {
            id: self.id,
            name: self.name,
            email: self.email,
            date: self.date,
        }
    }
}

/// New roster member payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudent {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl CreateStudent {
    /// Materialize a roster record with the default password and today's date
    pub fn into_student(self, date: NaiveDate) -> Student {
        Student {
            id: self.id,
            name: self.name,
            email: self.email,
            password: "pass123".to_string(),
            date: Some(date),
        }
    }
}
