//! 统一错误处理
//!
//! 所有错误在接口边界被转换为 JSON 错误信封 [`ErrorBody`]：
//!
//! ```json
//! { "error": "Invalid type", "code": "E0006" }
//! ```
//!
//! # 错误码规范
//!
//! | 错误码 | 状态 | 说明 |
//! |--------|------|------|
//! | E0002 | 400 | 请求体无法解析 |
//! | E0006 | 400 | 未知的 `type` |
//! | E9002 | 500 | 数据库错误 (不暴露细节) |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::{ErrorBody, UnknownEntityKind};
use tracing::error;

use crate::db::repository::RepoError;

/// Message used when a store failure reaches the boundary without a
/// verb-specific context
const DATABASE_ERROR: &str = "Database error";

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid type: {0}")]
    /// 未知的实体类型 (400)
    InvalidType(String),

    #[error("Validation failed: {0}")]
    /// 请求体验证失败 (400)
    Validation(String),

    #[error("{context}: {detail}")]
    /// 数据库错误 (500)，`context` 是返回给客户端的唯一信息
    Database {
        context: &'static str,
        detail: String,
    },
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(context: &'static str, detail: impl ToString) -> Self {
        Self::Database {
            context,
            detail: detail.to_string(),
        }
    }

    /// Replace the client-facing message of a store error.
    ///
    /// Other variants pass through untouched.
    pub fn in_context(self, context: &'static str) -> Self {
        match self {
            Self::Database { detail, .. } => Self::Database { context, detail },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidType(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::InvalidType(_) => ("E0006", "Invalid type".to_string()),
            AppError::Validation(msg) => ("E0002", msg.clone()),
            AppError::Database { context, detail } => {
                error!(target: "database", error = %detail, "Database error occurred");
                ("E9002", context.to_string())
            }
        };

        (status, Json(ErrorBody::new(code, message))).into_response()
    }
}

impl From<UnknownEntityKind> for AppError {
    fn from(e: UnknownEntityKind) -> Self {
        AppError::InvalidType(e.0)
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        AppError::database(DATABASE_ERROR, e)
    }
}
