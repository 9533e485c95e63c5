use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::errors::input_context;

/// Read items one per line from `path`, or from stdin when no path is given
pub fn read_items(path: Option<&Path>) -> Result<Vec<String>> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| input_context(&path.display().to_string()))?,
        None => read_stdin()?,
    };
    let items = split_items(&raw);
    info!("Loaded {} items", items.len());
    Ok(items)
}

fn read_stdin() -> Result<String> {
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .with_context(|| input_context("stdin"))?;
    Ok(raw)
}

fn split_items(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
