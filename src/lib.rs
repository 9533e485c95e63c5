pub mod cli;
pub mod config;
pub mod errors;
pub mod input;
pub mod pagination;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, SourceArgs};
use log::info;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::pagination::{resolve_page_with, PageSummary, Paginator, PaginationConfig};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_show(
    source: &SourceArgs,
    page: &str,
    show_first_page_when_invalid: bool,
    lenient: bool,
) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if show_first_page_when_invalid {
        config.pagination = config.pagination.with_show_first_page_when_invalid(true);
    }
    let items = input::read_items(source.file.as_deref())?;
    let summary = show_page(&items, source, config.pagination, page, lenient)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

pub fn handle_info(source: &SourceArgs) -> Result<()> {
    let config = AppConfig::from_env()?;
    let items = input::read_items(source.file.as_deref())?;
    let paginator = build_paginator(&items, source, config.pagination);
    let range = paginator.page_range();
    println!("count: {}", paginator.count());
    println!("pages: {}", paginator.num_pages());
    if !range.is_empty() {
        println!("range: {}..={}", range.start(), range.end());
    }
    Ok(())
}

fn build_paginator<'c>(
    items: &'c [String],
    source: &SourceArgs,
    config: PaginationConfig,
) -> Paginator<'c, [String]> {
    let per_page = source.per_page.unwrap_or(config.default_per_page);
    let orphans = source.orphans.unwrap_or(config.default_orphans);
    Paginator::new(items, per_page)
        .with_orphans(orphans)
        .allow_empty_first_page(!source.no_empty_first_page)
        .with_config(config)
}

fn show_page(
    items: &[String],
    source: &SourceArgs,
    config: PaginationConfig,
    requested: &str,
    lenient: bool,
) -> Result<PageSummary<String>> {
    let paginator = build_paginator(items, source, config);
    let page = if lenient {
        resolve_page_with(&Some(requested), &paginator)
    } else {
        paginator.page(requested)
    }
    .with_context(|| format!("Invalid page {:?}", requested))?;
    info!("Showing page {} of {}", page.number(), page.num_pages());
    Ok(page.summary())
}
