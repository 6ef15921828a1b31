use std::fmt;
use std::iter::{Fuse, FusedIterator};

use log::trace;

use crate::error::{Result, SeqError};
use crate::lending::LendingIterator;

/// Non-overlapping chunks of `section_size` elements.
///
/// The same buffer is cleared and refilled for every section. The final
/// section may be shorter but is never empty.
#[derive(Clone, Debug)]
pub struct Sections<I: Iterator> {
    source: Fuse<I>,
    section_size: usize,
    buffer: Vec<I::Item>,
}

pub fn sections<S>(source: S, section_size: usize) -> Result<Sections<S::IntoIter>>
where
    S: IntoIterator,
{
    if section_size == 0 {
        return Err(SeqError::invalid(
            "section_size",
            "section size must be greater than zero",
        ));
    }
    Ok(Sections {
        source: source.into_iter().fuse(),
        section_size,
        buffer: Vec::with_capacity(section_size),
    })
}

impl<I: Iterator> Sections<I> {
    pub fn section_size(&self) -> usize {
        self.section_size
    }

    pub fn owned(self) -> OwnedSections<I>
    where
        I::Item: Clone,
    {
        OwnedSections { inner: self }
    }
}

impl<I: Iterator> LendingIterator for Sections<I> {
    type Item<'a>
        = &'a [I::Item]
    where
        Self: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        self.buffer.clear();
        self.buffer
            .extend(self.source.by_ref().take(self.section_size));
        if self.buffer.is_empty() {
            return None;
        }
        if self.buffer.len() < self.section_size {
            trace!(
                "section engine: short final section of {} elements",
                self.buffer.len()
            );
        }
        Some(&self.buffer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.source.size_hint();
        let count = |n: usize| n.div_ceil(self.section_size);
        (count(lo), hi.map(count))
    }
}

/// Sections moved into fresh `Vec`s; see [`Sections::owned`].
pub struct OwnedSections<I: Iterator> {
    inner: Sections<I>,
}

impl<I> Clone for OwnedSections<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<I> fmt::Debug for OwnedSections<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedSections").field("inner", &self.inner).finish()
    }
}

impl<I> Iterator for OwnedSections<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(<[I::Item]>::to_vec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> FusedIterator for OwnedSections<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
