//! Filtered, newest-first, fixed-size page queries.

use sea_orm::{
    sea_query::IntoCondition, ConnectionTrait, DbErr, EntityTrait, FromQueryResult,
    IntoSimpleExpr, PaginatorTrait, QueryFilter, QueryOrder, Select,
};
use serde::{Deserialize, Serialize};

/// Rows per page for every list endpoint.
pub const PAGE_SIZE: u64 = 50;

/// Query string accepted by the list endpoints: `?wd=<term>&page=<n>`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub wd: Option<String>,
    pub page: Option<u64>,
}

impl SearchQuery {
    /// Search term; an empty `wd` counts as absent.
    pub fn term(&self) -> Option<&str> {
        self.wd.as_deref().filter(|wd| !wd.is_empty())
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based
    pub page_index: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Page 0 and a missing page both mean the first page.
    pub fn new(page: Option<u64>) -> Self {
        Self::with_size(page, PAGE_SIZE)
    }

    pub fn with_size(page: Option<u64>, page_size: u64) -> Self {
        Self {
            page_index: page.filter(|p| *p > 0).unwrap_or(1),
            page_size: page_size.max(1),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None)
    }
}

/// One page of results plus the totals needed to navigate the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page_index: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub data: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total_count: u64) -> Self {
        let total_pages = total_count.div_ceil(request.page_size);
        Self {
            page_index: request.page_index,
            page_size: request.page_size,
            total_count,
            total_pages,
            has_previous_page: request.page_index > 1,
            has_next_page: request.page_index < total_pages,
            data,
        }
    }
}

/// Runs `select` with the optional `filter`, ordered by `order_key`
/// descending, and returns the requested page projected into `M`.
///
/// A page past the end yields empty `data` with the real totals.
pub async fn paginate<C, E, M, F>(
    db: &C,
    select: Select<E>,
    filter: Option<F>,
    order_key: impl IntoSimpleExpr,
    request: PageRequest,
) -> Result<Page<M>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    M: FromQueryResult + Sized + Send + Sync,
    F: IntoCondition,
{
    let select = match filter {
        Some(condition) => select.filter(condition),
        None => select,
    };

    let paginator = select
        .order_by_desc(order_key)
        .into_model::<M>()
        .paginate(db, request.page_size);

    let total_count = paginator.num_items().await?;

    // Past the last page there is nothing to fetch, and a huge index would
    // overflow the offset.
    let past_end = request.page_index > total_count.div_ceil(request.page_size);
    let offset = (request.page_index - 1).checked_mul(request.page_size);
    if past_end || offset.is_none() {
        return Ok(Page::new(Vec::new(), request, total_count));
    }

    let data = paginator.fetch_page(request.page_index - 1).await?;
    Ok(Page::new(data, request, total_count))
}
