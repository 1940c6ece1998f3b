//! Expenses API endpoints.

use api_types::expense::{ExpenseNew, ExpenseView};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use engine::Expense;

use crate::{ServerError, server::ServerState};

fn map_expense(expense: Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        amount: expense.amount,
        category: expense.category,
        note: expense.note,
        date: expense.date,
    }
}

fn parse_id(id: Result<Path<u64>, PathRejection>) -> Result<u64, ServerError> {
    id.map(|Path(id)| id)
        .map_err(|_| ServerError::Generic("invalid id".to_string()))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let expenses = state
        .with_engine(|engine| Ok(engine.list()))
        .await?
        .into_iter()
        .map(map_expense)
        .collect();

    Ok(Json(expenses))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let Json(payload) = payload.map_err(|rejection| ServerError::Generic(rejection.body_text()))?;

    let expense = Expense::new(payload.amount, payload.category, payload.note, payload.date);
    expense.validate()?;

    let created = state.with_engine(move |engine| engine.create(expense)).await?;
    tracing::info!("recorded expense {created}");

    Ok((StatusCode::CREATED, Json(map_expense(created))))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<ExpenseView>, ServerError> {
    let id = parse_id(id)?;
    let expense = state.with_engine(move |engine| engine.get(id)).await?;
    Ok(Json(map_expense(expense)))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(id)?;
    state.with_engine(move |engine| engine.delete(id)).await?;
    tracing::info!("deleted expense {id}");
    Ok(StatusCode::NO_CONTENT)
}
