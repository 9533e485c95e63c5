use log::trace;
use std::cell::OnceCell;
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

use super::collection::{clamp_range, Collection};
use super::config::PaginationConfig;
use super::number::IntoPageNumber;
use super::page::{Page, PageBounds};
use crate::errors::{EmptyPageReason, InvalidPage};

/// Splits a borrowed collection into fixed-size pages.
///
/// `count` and `num_pages` are computed on first use and then memoized; the
/// collection is borrowed immutably so both stay valid for the paginator's
/// lifetime. `R` is an opaque request context that the paginator only
/// carries around for the caller.
#[derive(Debug)]
pub struct Paginator<'c, C: Collection + ?Sized, R = ()> {
    object_list: &'c C,
    per_page: NonZeroUsize,
    orphans: usize,
    allow_empty_first_page: bool,
    config: PaginationConfig,
    request: Option<R>,
    count: OnceCell<usize>,
    num_pages: OnceCell<usize>,
}

impl<'c, C: Collection + ?Sized> Paginator<'c, C> {
    pub fn new(object_list: &'c C, per_page: NonZeroUsize) -> Self {
        Self {
            object_list,
            per_page,
            orphans: 0,
            allow_empty_first_page: true,
            config: PaginationConfig::default(),
            request: None,
            count: OnceCell::new(),
            num_pages: OnceCell::new(),
        }
    }

    /// Paginator using the page size and orphan threshold from `config`
    pub fn from_config(object_list: &'c C, config: PaginationConfig) -> Self {
        let per_page = config.default_per_page;
        let orphans = config.default_orphans;
        Self::new(object_list, per_page)
            .with_orphans(orphans)
            .with_config(config)
    }
}

impl<'c, C: Collection + ?Sized, R> Paginator<'c, C, R> {
    pub fn with_orphans(mut self, orphans: usize) -> Self {
        self.orphans = orphans;
        self.num_pages = OnceCell::new();
        self
    }

    pub fn allow_empty_first_page(mut self, allow: bool) -> Self {
        self.allow_empty_first_page = allow;
        self.num_pages = OnceCell::new();
        self
    }

    pub fn with_config(mut self, config: PaginationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_request<Q>(self, request: Q) -> Paginator<'c, C, Q> {
        Paginator {
            object_list: self.object_list,
            per_page: self.per_page,
            orphans: self.orphans,
            allow_empty_first_page: self.allow_empty_first_page,
            config: self.config,
            request: Some(request),
            count: self.count,
            num_pages: self.num_pages,
        }
    }

    pub fn object_list(&self) -> &'c C {
        self.object_list
    }

    pub fn per_page(&self) -> usize {
        self.per_page.get()
    }

    pub fn orphans(&self) -> usize {
        self.orphans
    }

    pub fn allows_empty_first_page(&self) -> bool {
        self.allow_empty_first_page
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn request(&self) -> Option<&R> {
        self.request.as_ref()
    }

    /// Total number of objects across all pages
    pub fn count(&self) -> usize {
        *self.count.get_or_init(|| {
            self.object_list
                .count()
                .unwrap_or_else(|| self.object_list.len())
        })
    }

    /// Total number of pages
    pub fn num_pages(&self) -> usize {
        *self.num_pages.get_or_init(|| {
            let count = self.count();
            if count == 0 && !self.allow_empty_first_page {
                return 0;
            }
            let hits = count.saturating_sub(self.orphans).max(1);
            hits.div_ceil(self.per_page.get())
        })
    }

    /// 1-based range of page numbers
    pub fn page_range(&self) -> RangeInclusive<usize> {
        1..=self.num_pages()
    }

    /// Validates a 1-based page number, clamping to 1 when the config asks for it.
    pub fn validate_number<N: IntoPageNumber>(&self, number: N) -> Result<usize, InvalidPage> {
        let show_first_page = self.config.show_first_page_when_invalid;

        let mut number = number.into_page_number()?;
        if number < 1 {
            if show_first_page {
                number = 1;
            } else {
                return Err(InvalidPage::EmptyPage(EmptyPageReason::LessThanOne));
            }
        }

        // Positive here, so only a value wider than usize can fail.
        let number = usize::try_from(number).unwrap_or(usize::MAX);
        if number > self.num_pages() {
            if number == 1 && self.allow_empty_first_page {
                return Ok(1);
            }
            if show_first_page {
                return Ok(1);
            }
            return Err(InvalidPage::EmptyPage(EmptyPageReason::NoResults));
        }
        Ok(number)
    }

    /// Returns the page for the given 1-based page number.
    pub fn page<N: IntoPageNumber>(&self, number: N) -> Result<Page<C::Slice<'c>>, InvalidPage> {
        let number = self.validate_number(number)?;
        let per_page = self.per_page.get();
        let count = self.count();

        let bottom = (number - 1) * per_page;
        let mut top = bottom.saturating_add(per_page);
        if top.saturating_add(self.orphans) >= count {
            top = count;
        }

        let range = clamp_range(bottom..top, self.object_list.len());
        trace!("Page {} covers items {}..{} of {}", number, range.start, range.end, count);

        let len = range.len();
        let bounds = PageBounds {
            count,
            per_page,
            num_pages: self.num_pages(),
        };
        Ok(Page::new(self.object_list.slice(range), number, len, bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Counted;

    fn per_page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn items(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    fn strict(n: usize) -> PaginationConfig {
        PaginationConfig::new()
            .with_default_per_page(per_page(n))
            .with_show_first_page_when_invalid(false)
    }

    #[test]
    fn test_num_pages_formula() {
        for count in 0..40u32 {
            for size in 1..12 {
                for orphans in 0..size {
                    for allow in [true, false] {
                        let list = items(count);
                        let paginator = Paginator::new(&list, per_page(size))
                            .with_orphans(orphans)
                            .allow_empty_first_page(allow);
                        let expected = if count == 0 && !allow {
                            0
                        } else {
                            (count as usize).saturating_sub(orphans).max(1).div_ceil(size)
                        };
                        assert_eq!(paginator.num_pages(), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_pages_partition_collection() {
        for count in 0..40u32 {
            for size in 1..9 {
                for orphans in 0..size {
                    let list = items(count);
                    let paginator = Paginator::new(&list, per_page(size)).with_orphans(orphans);
                    let mut seen = Vec::new();
                    for number in paginator.page_range() {
                        let page = paginator.page(number).unwrap();
                        seen.extend_from_slice(page.object_list());
                    }
                    assert_eq!(seen, list);
                }
            }
        }
    }

    #[test]
    fn test_orphans_fold_into_last_page() {
        let list = items(23);
        let paginator = Paginator::new(&list, per_page(10)).with_orphans(5);
        assert_eq!(paginator.num_pages(), 2);

        let last = paginator.page(2).unwrap();
        assert_eq!(*last.object_list(), &list[10..23]);
        assert_eq!(last.len(), 13);
        assert!(!last.has_next());
        assert!(paginator.page(3).is_err());
    }

    #[test]
    fn test_twenty_five_items() {
        let list = items(25);
        let paginator = Paginator::new(&list, per_page(10));
        assert_eq!(paginator.count(), 25);
        assert_eq!(paginator.num_pages(), 3);
        assert_eq!(paginator.page_range().collect::<Vec<_>>(), vec![1, 2, 3]);

        let first = paginator.page(1).unwrap();
        assert_eq!(*first.object_list(), &list[0..10]);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let third = paginator.page("3").unwrap();
        assert_eq!(*third.object_list(), &list[20..25]);
        assert!(!third.has_next());
        assert!(third.has_previous());
    }

    #[test]
    fn test_validate_rejects_non_integer() {
        let list = items(5);
        let paginator = Paginator::new(&list, per_page(2));
        assert_eq!(
            paginator.validate_number("abc"),
            Err(InvalidPage::PageNotAnInteger)
        );
    }

    #[test]
    fn test_validate_below_one() {
        let list = items(5);
        let paginator = Paginator::from_config(&list, strict(2));
        assert_eq!(
            paginator.validate_number(0),
            Err(InvalidPage::EmptyPage(EmptyPageReason::LessThanOne))
        );
        assert_eq!(
            paginator.validate_number("-3"),
            Err(InvalidPage::EmptyPage(EmptyPageReason::LessThanOne))
        );

        let lenient =
            Paginator::from_config(&list, strict(2).with_show_first_page_when_invalid(true));
        assert_eq!(lenient.validate_number(0), Ok(1));
        // Clamping does not cover text that is not a number.
        assert_eq!(lenient.validate_number("x"), Err(InvalidPage::PageNotAnInteger));
    }

    #[test]
    fn test_validate_above_last_page() {
        let list = items(25);
        let paginator = Paginator::from_config(&list, strict(10));
        assert_eq!(paginator.validate_number(3), Ok(3));
        assert_eq!(
            paginator.validate_number(999),
            Err(InvalidPage::EmptyPage(EmptyPageReason::NoResults))
        );

        let lenient =
            Paginator::from_config(&list, strict(10).with_show_first_page_when_invalid(true));
        assert_eq!(lenient.validate_number(999), Ok(1));
        assert_eq!(lenient.page(999).unwrap().number(), 1);
    }

    #[test]
    fn test_oversized_numbers_are_out_of_range() {
        let list = items(25);
        let paginator = Paginator::from_config(&list, strict(10));
        assert_eq!(
            paginator.validate_number("99999999999999999999"),
            Err(InvalidPage::EmptyPage(EmptyPageReason::NoResults))
        );
        assert_eq!(
            paginator.validate_number("-99999999999999999999"),
            Err(InvalidPage::EmptyPage(EmptyPageReason::LessThanOne))
        );
        assert_eq!(
            paginator.validate_number(u64::MAX),
            Err(InvalidPage::EmptyPage(EmptyPageReason::NoResults))
        );

        let lenient =
            Paginator::from_config(&list, strict(10).with_show_first_page_when_invalid(true));
        assert_eq!(lenient.validate_number("99999999999999999999"), Ok(1));
        assert_eq!(lenient.validate_number("-99999999999999999999"), Ok(1));
        assert_eq!(lenient.validate_number(u64::MAX), Ok(1));
    }

    #[test]
    fn test_empty_collection_first_page() {
        let list: Vec<u32> = Vec::new();
        let paginator = Paginator::new(&list, per_page(10));
        assert_eq!(paginator.num_pages(), 1);
        let page = paginator.page(1).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.start_index(), 0);
        assert_eq!(page.end_index(), 0);
        assert!(!page.has_other_pages());

        let strict = Paginator::new(&list, per_page(10)).allow_empty_first_page(false);
        assert_eq!(strict.num_pages(), 0);
        assert!(strict.page_range().next().is_none());
        assert_eq!(
            strict.page(1).unwrap_err(),
            InvalidPage::EmptyPage(EmptyPageReason::NoResults)
        );
    }

    #[test]
    fn test_first_page_of_empty_collection_is_valid() {
        let list: Vec<u32> = Vec::new();
        let paginator = Paginator::from_config(&list, strict(10)).with_orphans(3);
        assert_eq!(paginator.validate_number(1), Ok(1));
        assert_eq!(
            paginator.validate_number(2),
            Err(InvalidPage::EmptyPage(EmptyPageReason::NoResults))
        );
    }

    #[test]
    fn test_explicit_count_takes_precedence() {
        let window = Counted::new(items(4), 40);
        let paginator = Paginator::new(&window, per_page(10));
        assert_eq!(paginator.count(), 40);
        assert_eq!(paginator.num_pages(), 4);
        let page = paginator.page(1).unwrap();
        assert_eq!(page.len(), 4);
        assert_eq!(page.end_index(), 10);

        let past_stored = paginator.page(2).unwrap();
        assert!(past_stored.is_empty());
        assert_eq!(past_stored.start_index(), 0);
        assert_eq!(past_stored.end_index(), 0);
    }

    #[test]
    fn test_settings_reset_cached_page_count() {
        let list = items(23);
        let paginator = Paginator::new(&list, per_page(10));
        assert_eq!(paginator.num_pages(), 3);
        let paginator = paginator.with_orphans(5);
        assert_eq!(paginator.num_pages(), 2);
    }

    #[test]
    fn test_request_context_is_carried() {
        let list = items(3);
        let paginator = Paginator::new(&list, per_page(2)).with_request("ctx");
        assert_eq!(paginator.request(), Some(&"ctx"));
        assert_eq!(*paginator.page(2).unwrap().object_list(), &[3]);
    }

    #[test]
    fn test_slice_paginator() {
        let list = [1u8, 2, 3, 4, 5];
        let paginator = Paginator::new(&list[..], per_page(2));
        assert_eq!(*paginator.page(3).unwrap().object_list(), &[5]);
    }
}
