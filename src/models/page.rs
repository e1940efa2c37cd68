use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// The backend's pagination envelope, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub size: i64,
    /// 0-based.
    pub number: i64,
    pub total_pages: i64,
    pub total_elements: i64,
}

/// `page`/`size` as they arrive in a list page's query string.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl ListQuery {
    /// Unparseable values fall back to page 0, size 10.
    pub fn page_request(&self) -> PageRequest {
        let parse = |raw: &Option<String>| raw.as_deref().and_then(|v| v.trim().parse::<i64>().ok());
        PageRequest {
            page: parse(&self.page).unwrap_or(0).max(0),
            size: parse(&self.size).unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }
}

/// State of the prev/next control under a list table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_elements: i64,
    pub size: i64,
}

impl Pagination {
    pub fn of<T>(page: &Page<T>) -> Self {
        Self {
            current_page: page.number,
            total_pages: page.total_pages,
            total_elements: page.total_elements,
            size: page.size,
        }
    }

    /// 1-based index of the first row shown.
    pub fn first_row(&self) -> i64 {
        self.current_page.saturating_mul(self.size).saturating_add(1)
    }

    /// 1-based index of the last row shown.
    pub fn last_row(&self) -> i64 {
        (self.current_page.saturating_add(1))
            .saturating_mul(self.size)
            .min(self.total_elements)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page != 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page.saturating_add(1) < self.total_pages
    }

    /// Render-ready values; links keep every other query parameter of the
    /// current request and only rewrite `page`.
    pub fn view(&self, path: &str, query: &str) -> PaginationView {
        PaginationView {
            first_row: self.first_row(),
            last_row: self.last_row(),
            total_elements: self.total_elements,
            page_number: self.current_page.saturating_add(1),
            total_pages: self.total_pages,
            prev_href: self
                .has_previous()
                .then(|| page_href(path, query, self.current_page - 1)),
            next_href: self
                .has_next()
                .then(|| page_href(path, query, self.current_page + 1)),
        }
    }
}

pub struct PaginationView {
    pub first_row: i64,
    pub last_row: i64,
    pub total_elements: i64,
    pub page_number: i64,
    pub total_pages: i64,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

/// `path?query` with `page` set to `page`: the first existing `page`
/// parameter is replaced in place and any duplicates dropped, otherwise it
/// is appended.
pub fn page_href(path: &str, query: &str, page: i64) -> String {
    let mut pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();
    let value = page.to_string();

    match pairs.iter().position(|(key, _)| key == "page") {
        Some(first) => {
            pairs[first].1 = value;
            let mut seen = 0;
            pairs.retain(|(key, _)| {
                if key != "page" {
                    return true;
                }
                seen += 1;
                seen == 1
            });
        }
        None => pairs.push(("page".to_string(), value)),
    }

    let encoded = serde_urlencoded::to_string(&pairs).unwrap_or_else(|_| format!("page={page}"));
    format!("{path}?{encoded}")
}
