pub mod client;
pub mod consultas;
pub mod medicos;
pub mod pacientes;

pub use client::{ApiBody, ApiClient, ApiError, BearerToken, NoToken, TokenSource};

use serde::de::DeserializeOwned;

use crate::models::page::Page;

/// Page size used when walking every page of a resource.
pub const FETCH_ALL_PAGE_SIZE: i64 = 100;

/// Collect every row of a paginated resource, one page at a time.
/// Stops at the reported last page or at the first empty page.
pub async fn fetch_all<T: DeserializeOwned>(
    client: &ApiClient,
    auth: &dyn TokenSource,
    path: &str,
) -> Result<Vec<T>, ApiError> {
    let mut rows = Vec::new();
    let mut page = 0;
    loop {
        let batch: Page<T> = client
            .get(auth, &format!("{path}?page={page}&size={FETCH_ALL_PAGE_SIZE}"))
            .await?;
        let last = batch.content.is_empty() || page + 1 >= batch.total_pages;
        rows.extend(batch.content);
        if last {
            break;
        }
        page += 1;
    }
    log::debug!("Fetched {} rows from {path} in {} page(s)", rows.len(), page + 1);
    Ok(rows)
}
