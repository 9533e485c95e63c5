use std::collections::VecDeque;
use std::ops::Range;

/// Anything a [`Paginator`](super::Paginator) can split into pages.
///
/// Implementors report their structural length and hand out half-open
/// sub-ranges. A collection that knows its total up front (for example one
/// backed by a `COUNT(*)` query) overrides [`Collection::count`]; the
/// paginator prefers that value over `len`.
pub trait Collection {
    type Slice<'a>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Explicit total, if the collection has one.
    fn count(&self) -> Option<usize> {
        None
    }

    /// Items in `range`, clamped to the collection bounds.
    fn slice(&self, range: Range<usize>) -> Self::Slice<'_>;
}

pub(crate) fn clamp_range(range: Range<usize>, len: usize) -> Range<usize> {
    let end = range.end.min(len);
    let start = range.start.min(end);
    start..end
}

impl<T> Collection for [T] {
    type Slice<'a>
        = &'a [T]
    where
        Self: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn slice(&self, range: Range<usize>) -> &[T] {
        &self[clamp_range(range, <[T]>::len(self))]
    }
}

impl<T> Collection for Vec<T> {
    type Slice<'a>
        = &'a [T]
    where
        Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn slice(&self, range: Range<usize>) -> &[T] {
        self.as_slice().slice(range)
    }
}

impl<T> Collection for VecDeque<T> {
    type Slice<'a>
        = Vec<&'a T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn slice(&self, range: Range<usize>) -> Vec<&T> {
        self.range(clamp_range(range, VecDeque::len(self))).collect()
    }
}

/// Wraps a collection together with a total that was counted elsewhere.
#[derive(Debug, Clone)]
pub struct Counted<C> {
    inner: C,
    total: usize,
}

impl<C> Counted<C> {
    pub fn new(inner: C, total: usize) -> Self {
        Self { inner, total }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Collection> Collection for Counted<C> {
    type Slice<'a>
        = C::Slice<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn count(&self) -> Option<usize> {
        Some(self.total)
    }

    fn slice(&self, range: Range<usize>) -> Self::Slice<'_> {
        self.inner.slice(range)
    }
}
