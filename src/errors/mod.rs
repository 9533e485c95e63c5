use thiserror::Error;

/// Why a syntactically valid page number has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPageReason {
    LessThanOne,
    NoResults,
}

impl EmptyPageReason {
    pub fn as_str(&self) -> &str {
        match self {
            EmptyPageReason::LessThanOne => "That page number is less than 1",
            EmptyPageReason::NoResults => "That page contains no results",
        }
    }
}

/// Any page request the paginator refuses to serve
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPage {
    #[error("That page number is not an integer")]
    PageNotAnInteger,
    #[error("{}", .0.as_str())]
    EmptyPage(EmptyPageReason),
}

impl InvalidPage {
    pub fn is_empty_page(&self) -> bool {
        matches!(self, InvalidPage::EmptyPage(_))
    }

    pub fn is_not_an_integer(&self) -> bool {
        matches!(self, InvalidPage::PageNotAnInteger)
    }
}

/// Add context to configuration errors
pub fn config_context(key: &str) -> String {
    format!("Failed to read configuration value: {}", key)
}

/// Add context to input errors
pub fn input_context(source: &str) -> String {
    format!("Failed to read items from: {}", source)
}
