use std::fmt;
use std::iter::{Fuse, FusedIterator};

/// Skips `start` elements on the first pull, then yields at most `count`.
#[derive(Clone, Debug)]
pub struct SubSet<I> {
    source: I,
    skip: usize,
    remaining: Option<usize>,
}

pub fn sub_set<S: IntoIterator>(
    source: S,
    start: usize,
    count: Option<usize>,
) -> SubSet<S::IntoIter> {
    SubSet {
        source: source.into_iter(),
        skip: start,
        remaining: count,
    }
}

impl<I: Iterator> Iterator for SubSet<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == Some(0) {
            return None;
        }
        if self.skip > 0 {
            let skip = std::mem::take(&mut self.skip);
            if self.source.nth(skip - 1).is_none() {
                self.remaining = Some(0);
                return None;
            }
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        self.source.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.source.size_hint();
        let lo = lo.saturating_sub(self.skip);
        let hi = hi.map(|hi| hi.saturating_sub(self.skip));
        match self.remaining {
            Some(n) => (lo.min(n), Some(hi.map_or(n, |hi| hi.min(n)))),
            None => (lo, hi),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PushToEnd<I: Iterator> {
    source: Fuse<I>,
    item: Option<I::Item>,
}

pub fn push_to_end<S: IntoIterator>(source: S, item: S::Item) -> PushToEnd<S::IntoIter> {
    PushToEnd {
        source: source.into_iter().fuse(),
        item: Some(item),
    }
}

impl<I: Iterator> Iterator for PushToEnd<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.source.next().or_else(|| self.item.take())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        add_pending(self.source.size_hint(), self.item.is_some() as usize)
    }
}

impl<I: Iterator> FusedIterator for PushToEnd<I> {}

/// Yields `item` before the source is pulled at all.
#[derive(Clone, Debug)]
pub struct PushToStart<I: Iterator> {
    item: Option<I::Item>,
    source: I,
}

pub fn push_to_start<S: IntoIterator>(source: S, item: S::Item) -> PushToStart<S::IntoIter> {
    PushToStart {
        item: Some(item),
        source: source.into_iter(),
    }
}

impl<I: Iterator> Iterator for PushToStart<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.item.take().or_else(|| self.source.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        add_pending(self.source.size_hint(), self.item.is_some() as usize)
    }
}

/// Yields `item` immediately before the source element at `index`.
///
/// If the source has no element at `index` the item is silently dropped.
#[derive(Clone, Debug)]
pub struct InsertAt<I: Iterator> {
    source: I,
    item: Option<I::Item>,
    held: Option<I::Item>,
    index: usize,
    position: usize,
}

pub fn insert_at<S: IntoIterator>(
    source: S,
    item: S::Item,
    index: usize,
) -> InsertAt<S::IntoIter> {
    InsertAt {
        source: source.into_iter(),
        item: Some(item),
        held: None,
        index,
        position: 0,
    }
}

impl<I: Iterator> Iterator for InsertAt<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(held) = self.held.take() {
            return Some(held);
        }
        let element = self.source.next()?;
        let at = self.position;
        self.position += 1;
        if at == self.index {
            if let Some(item) = self.item.take() {
                self.held = Some(element);
                return Some(item);
            }
        }
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = add_pending(self.source.size_hint(), self.held.is_some() as usize);
        let pending = self.item.is_some() && self.position <= self.index;
        let lo = if pending && lo > self.index - self.position {
            lo + 1
        } else {
            lo
        };
        let hi = if pending {
            hi.and_then(|hi| hi.checked_add(1))
        } else {
            hi
        };
        (lo, hi)
    }
}

/// Drops every element whose 0-based position satisfies `predicate`.
#[derive(Clone, Debug)]
pub struct SkipWhereIndex<I, P> {
    source: I,
    predicate: P,
    index: usize,
}

pub fn skip_where_index<S, P>(source: S, predicate: P) -> SkipWhereIndex<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(usize) -> bool,
{
    SkipWhereIndex {
        source: source.into_iter(),
        predicate,
        index: 0,
    }
}

impl<I, P> Iterator for SkipWhereIndex<I, P>
where
    I: Iterator,
    P: FnMut(usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let element = self.source.next()?;
            let index = self.index;
            self.index += 1;
            if !(self.predicate)(index) {
                return Some(element);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

#[derive(Clone, Debug)]
pub struct Modify<I, F> {
    source: I,
    f: F,
}

pub fn modify<S, F>(source: S, f: F) -> Modify<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> S::Item,
{
    Modify {
        source: source.into_iter(),
        f,
    }
}

impl<I, F> Iterator for Modify<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.source.next().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

#[derive(Clone, Debug)]
pub struct ModifyByIndex<I, F> {
    source: I,
    f: F,
    index: usize,
}

pub fn modify_by_index<S, F>(source: S, f: F) -> ModifyByIndex<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(usize, S::Item) -> S::Item,
{
    ModifyByIndex {
        source: source.into_iter(),
        f,
        index: 0,
    }
}

impl<I, F> Iterator for ModifyByIndex<I, F>
where
    I: Iterator,
    F: FnMut(usize, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let element = self.source.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.f)(index, element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

/// Lazy concatenation of a sequence of sequences.
///
/// The outer sequence is pulled only once the current inner one is
/// exhausted.
pub struct Merge<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    outer: Fuse<O>,
    current: Option<<O::Item as IntoIterator>::IntoIter>,
}

impl<O> Clone for Merge<O>
where
    O: Iterator + Clone,
    O::Item: IntoIterator,
    <O::Item as IntoIterator>::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            current: self.current.clone(),
        }
    }
}

impl<O> fmt::Debug for Merge<O>
where
    O: Iterator + fmt::Debug,
    O::Item: IntoIterator,
    <O::Item as IntoIterator>::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Merge")
            .field("outer", &self.outer)
            .field("current", &self.current)
            .finish()
    }
}

pub fn merge<S>(sequences: S) -> Merge<S::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Merge {
        outer: sequences.into_iter().fuse(),
        current: None,
    }
}

impl<O> Iterator for Merge<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    type Item = <O::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(element) = current.next() {
                    return Some(element);
                }
                self.current = None;
            }
            self.current = Some(self.outer.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.current.as_ref().map_or((0, Some(0)), Iterator::size_hint);
        match self.outer.size_hint() {
            (0, Some(0)) => (lo, hi),
            _ => (lo, None),
        }
    }
}

impl<O> FusedIterator for Merge<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
}

/// `source` followed by each of `others`, in order.
pub struct Chain<I, O>
where
    I: Iterator,
    O: Iterator,
    O::Item: IntoIterator<Item = I::Item>,
{
    head: Option<I>,
    rest: Merge<O>,
}

impl<I, O> Clone for Chain<I, O>
where
    I: Iterator + Clone,
    O: Iterator + Clone,
    O::Item: IntoIterator<Item = I::Item>,
    <O::Item as IntoIterator>::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            rest: self.rest.clone(),
        }
    }
}

impl<I, O> fmt::Debug for Chain<I, O>
where
    I: Iterator + fmt::Debug,
    O: Iterator + fmt::Debug,
    O::Item: IntoIterator<Item = I::Item>,
    <O::Item as IntoIterator>::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("head", &self.head)
            .field("rest", &self.rest)
            .finish()
    }
}

pub fn chain<S, O>(source: S, others: O) -> Chain<S::IntoIter, O::IntoIter>
where
    S: IntoIterator,
    O: IntoIterator,
    O::Item: IntoIterator<Item = S::Item>,
{
    Chain {
        head: Some(source.into_iter()),
        rest: merge(others),
    }
}

impl<I, O> Iterator for Chain<I, O>
where
    I: Iterator,
    O: Iterator,
    O::Item: IntoIterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(head) = self.head.as_mut() {
            if let Some(element) = head.next() {
                return Some(element);
            }
            self.head = None;
        }
        self.rest.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.rest.size_hint();
        match &self.head {
            Some(head) => {
                let (head_lo, head_hi) = head.size_hint();
                let hi = match (head_hi, hi) {
                    (Some(a), Some(b)) => a.checked_add(b),
                    _ => None,
                };
                (head_lo.saturating_add(lo), hi)
            }
            None => (lo, hi),
        }
    }
}

/// First item that is `Some`.
pub fn coalesce<S, T>(source: S) -> Option<T>
where
    S: IntoIterator<Item = Option<T>>,
{
    source.into_iter().flatten().next()
}

pub fn to_text<S>(chars: S) -> String
where
    S: IntoIterator<Item = char>,
{
    chars.into_iter().collect()
}

fn add_pending((lo, hi): (usize, Option<usize>), pending: usize) -> (usize, Option<usize>) {
    (
        lo.saturating_add(pending),
        hi.and_then(|hi| hi.checked_add(pending)),
    )
}
