use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::Result;
use crate::server::AppState;

/// The operation envelope: an operation name plus its declared arguments.
///
/// Deserialization enforces the argument schema before any resolver runs:
/// unknown operations, missing required arguments, and wrongly typed values
/// are rejected at the transport boundary. `title` and `author` are optional
/// on `updateBook` only.
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", content = "arguments", rename_all = "camelCase")]
pub enum OperationRequest {
    Books,
    Book {
        id: i64,
    },
    AddBook {
        title: String,
        author: String,
    },
    UpdateBook {
        id: i64,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        author: Option<String>,
    },
    DeleteBook {
        id: i64,
    },
}

async fn dispatch(state: &AppState, request: OperationRequest) -> Result<Value> {
    let resolvers = &state.resolvers;
    let data = match request {
        OperationRequest::Books => serde_json::to_value(resolvers.books().await?)?,
        OperationRequest::Book { id } => serde_json::to_value(resolvers.book(id).await?)?,
        OperationRequest::AddBook { title, author } => {
            serde_json::to_value(resolvers.add_book(title, author).await?)?
        }
        OperationRequest::UpdateBook { id, title, author } => {
            serde_json::to_value(resolvers.update_book(id, title, author).await?)?
        }
        OperationRequest::DeleteBook { id } => {
            serde_json::to_value(resolvers.delete_book(id).await?)?
        }
    };
    Ok(data)
}

/// Run one operation and wrap the outcome in the response envelope
///
/// Success is `{"data": ...}` (with `null` data for an absent entity);
/// failure is `{"errors": [{"message": ...}]}`. Either way the transport
/// status is 200; only envelope parse failures surface as 4xx upstream.
pub async fn handle_operation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OperationRequest>,
) -> Json<Value> {
    match dispatch(&state, request).await {
        Ok(data) => Json(json!({ "data": data })),
        Err(e) => {
            tracing::error!("operation failed: {}", e);
            Json(json!({ "errors": [{ "message": e.to_string() }] }))
        }
    }
}
