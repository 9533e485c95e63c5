use log::debug;
use std::num::NonZeroUsize;

use super::collection::Collection;
use super::config::DEFAULT_PER_PAGE;
use super::page::Page;
use super::paginator::Paginator;
use super::request::PageRequest;
use crate::errors::InvalidPage;

/// Page requested by `request`, or page 1 if that page is invalid.
///
/// The only error left is page 1 itself being invalid, which happens when the
/// paginator disallows an empty first page and the collection is empty.
pub fn resolve_page<'c, Q, C>(
    request: &Q,
    objects: &'c C,
    per_page: NonZeroUsize,
) -> Result<Page<C::Slice<'c>>, InvalidPage>
where
    Q: PageRequest + ?Sized,
    C: Collection + ?Sized,
{
    let paginator = Paginator::new(objects, per_page).with_request(request);
    resolve_page_with(request, &paginator)
}

/// `resolve_page` with twelve items per page
pub fn resolve_default_page<'c, Q, C>(
    request: &Q,
    objects: &'c C,
) -> Result<Page<C::Slice<'c>>, InvalidPage>
where
    Q: PageRequest + ?Sized,
    C: Collection + ?Sized,
{
    resolve_page(request, objects, DEFAULT_PER_PAGE)
}

/// `resolve_page` over a paginator the caller has already configured
pub fn resolve_page_with<'c, Q, C, R>(
    request: &Q,
    paginator: &Paginator<'c, C, R>,
) -> Result<Page<C::Slice<'c>>, InvalidPage>
where
    Q: PageRequest + ?Sized,
    C: Collection + ?Sized,
{
    let requested = requested_page(request);
    paginator.page(requested).or_else(|err| {
        debug!("Page {:?} rejected ({}), falling back to page 1", requested, err);
        paginator.page(1)
    })
}

fn requested_page<Q: PageRequest + ?Sized>(request: &Q) -> &str {
    request
        .page_param()
        .filter(|page| !page.is_empty())
        .unwrap_or("1")
}
