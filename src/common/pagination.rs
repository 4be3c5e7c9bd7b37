// src/common/pagination.rs

use serde::Deserialize;
use utoipa::IntoParams;

use crate::common::error::{AppError, INVALID_PAGE};

/// `?page=&size=` as sent by clients. `page` is 1-based.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number (default 1)
    pub page: Option<i64>,
    /// Rows per page (default from `DEFAULT_PAGE_SIZE`)
    pub size: Option<i64>,
}

/// Zero-based window handed to the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl PageQuery {
    pub fn resolve(&self, default_size: i64) -> Result<Page, AppError> {
        let page = self.page.unwrap_or(1);
        let size = self.size.unwrap_or(default_size);

        if page < 1 || size < 1 {
            return Err(AppError::Validation(INVALID_PAGE.to_string()));
        }

        let offset = (page - 1)
            .checked_mul(size)
            .ok_or_else(|| AppError::Validation(INVALID_PAGE.to_string()))?;

        Ok(Page { limit: size, offset })
    }
}
