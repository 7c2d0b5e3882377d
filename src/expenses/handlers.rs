use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{auth::jwt::AuthUser, error::ApiError, state::AppState};

use super::dto::{
    CreateExpenseRequest, DeleteExpenseResponse, DeletedExpense, ExpenseData,
    ExpenseListResponse, ExpenseResponse, UpdateExpenseRequest,
};
use super::repo::Expense;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses))
        .route("/expenses/:id", get(get_expense))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", post(create_expense))
        .route(
            "/expenses/:id",
            axum::routing::put(update_expense).delete(delete_expense),
        )
}

fn is_positive_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

/// Existence is checked before ownership: an id that exists under another
/// owner is a 403, not a 404. Kept deliberately, see DESIGN.md.
fn check_owned(found: Option<Expense>, caller: Uuid) -> Result<Expense, ApiError> {
    match found {
        None => Err(ApiError::NotFound("Expense not found".into())),
        Some(e) if e.user_id != caller => {
            Err(ApiError::Forbidden("Expense belongs to another user".into()))
        }
        Some(e) => Ok(e),
    }
}

async fn find_owned(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<Expense, ApiError> {
    check_owned(Expense::find_by_id(db, id).await?, user_id)
}

#[instrument(skip(state))]
pub async fn list_expenses(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ExpenseListResponse>, ApiError> {
    let expenses = Expense::list_by_user(&state.db, user_id).await?;
    let data: Vec<ExpenseData> = expenses.into_iter().map(Into::into).collect();
    Ok(Json(ExpenseListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

#[instrument(skip(state))]
pub async fn get_expense(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let expense = find_owned(&state.db, user_id, id).await?;
    Ok(Json(ExpenseResponse {
        success: true,
        data: expense.into(),
    }))
}

#[instrument(skip(state, body))]
pub async fn create_expense(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseResponse>), ApiError> {
    let required = || ApiError::Validation("Amount and category are required".into());

    let amount = body.amount.ok_or_else(required)?;
    let category = body
        .category
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(required)?;

    if !is_positive_amount(amount) {
        return Err(ApiError::Validation(
            "Amount must be a positive number".into(),
        ));
    }

    let description = body.description.unwrap_or_default();

    // Owner comes from the verified token, never from the body.
    let expense = Expense::insert(&state.db, user_id, amount, &category, &description).await?;

    info!(user_id = %user_id, expense_id = %expense.id, "expense created");
    Ok((
        StatusCode::CREATED,
        Json(ExpenseResponse {
            success: true,
            data: expense.into(),
        }),
    ))
}

#[instrument(skip(state, body))]
pub async fn update_expense(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateExpenseRequest>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    find_owned(&state.db, user_id, id).await?;

    if let Some(amount) = body.amount {
        if !is_positive_amount(amount) {
            return Err(ApiError::Validation(
                "Amount must be a positive number".into(),
            ));
        }
    }
    if let Some(category) = &body.category {
        if category.trim().is_empty() {
            return Err(ApiError::Validation("Category must not be empty".into()));
        }
    }

    let expense = Expense::update(
        &state.db,
        id,
        body.amount,
        body.category.as_deref(),
        body.description.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Expense not found".into()))?;

    info!(user_id = %user_id, expense_id = %id, "expense updated");
    Ok(Json(ExpenseResponse {
        success: true,
        data: expense.into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_expense(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteExpenseResponse>, ApiError> {
    find_owned(&state.db, user_id, id).await?;

    let expense = Expense::delete(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Expense not found".into()))?;

    info!(user_id = %user_id, expense_id = %expense.id, "expense deleted");
    Ok(Json(DeleteExpenseResponse {
        success: true,
        data: DeletedExpense { id: expense.id },
    }))
}
