mod collection;
mod config;
mod number;
mod page;
mod paginator;
mod request;
mod resolve;

pub use collection::{Collection, Counted};
pub use config::{PaginationConfig, DEFAULT_PER_PAGE};
pub use number::IntoPageNumber;
pub use page::{Page, PageBounds, PageSummary};
pub use paginator::Paginator;
pub use request::{PageRequest, QueryParams, PAGE_PARAM};
pub use resolve::{resolve_default_page, resolve_page, resolve_page_with};
