use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::expenses::repo::Expense;

/// Fields are optional so that a missing key is a 400 from our validation
/// rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Absent (or null) fields keep their stored value; a present empty string
/// for `description` overwrites.
#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Expense as the client sees it; the owner id stays internal.
#[derive(Debug, Serialize)]
pub struct ExpenseData {
    pub id: Uuid,
    pub amount: f64,
    pub category: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Expense> for ExpenseData {
    fn from(e: Expense) -> Self {
        Self {
            id: e.id,
            amount: e.amount,
            category: e.category,
            description: e.description,
            created_at: e.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExpenseListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<ExpenseData>,
}

#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub success: bool,
    pub data: ExpenseData,
}

#[derive(Debug, Serialize)]
pub struct DeletedExpense {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct DeleteExpenseResponse {
    pub success: bool,
    pub data: DeletedExpense,
}
