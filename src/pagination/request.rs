use std::collections::{BTreeMap, HashMap};

/// Name of the query parameter that carries the page number
pub const PAGE_PARAM: &str = "page";

/// Anything that can carry a textual `page` parameter
pub trait PageRequest {
    fn page_param(&self) -> Option<&str>;
}

impl PageRequest for HashMap<String, String> {
    fn page_param(&self) -> Option<&str> {
        self.get(PAGE_PARAM).map(String::as_str)
    }
}

impl PageRequest for BTreeMap<String, String> {
    fn page_param(&self) -> Option<&str> {
        self.get(PAGE_PARAM).map(String::as_str)
    }
}

impl PageRequest for Option<&str> {
    fn page_param(&self) -> Option<&str> {
        *self
    }
}

/// Decoded `key=value` pairs of a URL query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse `a=1&b=two+words`, with or without a leading `?`
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|part| !part.is_empty())
            .map(split_pair)
            .collect();
        Self { pairs }
    }

    /// Last value given for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl PageRequest for QueryParams {
    fn page_param(&self) -> Option<&str> {
        self.get(PAGE_PARAM)
    }
}

fn split_pair(part: &str) -> (String, String) {
    match part.split_once('=') {
        Some((key, value)) => (decode_component(key), decode_component(value)),
        None => (decode_component(part), String::new()),
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
