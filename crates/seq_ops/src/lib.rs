mod adapters;
mod aggregate;
mod error;
mod lending;
mod section;
mod slice;
mod window;

pub use adapters::{
    Chain, InsertAt, Merge, Modify, ModifyByIndex, PushToEnd, PushToStart, SkipWhereIndex, SubSet,
    chain, coalesce, insert_at, merge, modify, modify_by_index, push_to_end, push_to_start,
    skip_where_index, sub_set, to_text,
};
pub use aggregate::{aggregate_changes, aggregate_changes_from};
pub use error::{Result, SeqError};
pub use lending::LendingIterator;
pub use section::{OwnedSections, Sections, sections};
pub use slice::{Slice, SliceArgs, slice, slice_range};
pub use window::{OwnedWindows, Windows, windows};

/// Lazy sequence operators as methods on any iterator.
///
/// Every method is a thin forward to the free function of the same name.
/// Operators with static preconditions return `Result` and check them before
/// the source is pulled.
pub trait SeqOps: Iterator + Sized {
    fn windows(self, window_size: usize) -> Result<Windows<Self>> {
        window::windows(self, window_size)
    }

    fn sections(self, section_size: usize) -> Result<Sections<Self>> {
        section::sections(self, section_size)
    }

    fn slice(self, args: SliceArgs) -> Result<Slice<Self>> {
        slice::slice(self, args)
    }

    fn aggregate_changes<R, F, C>(self, selector: F, combine: C) -> Option<Self::Item>
    where
        R: PartialEq + Clone,
        F: FnMut(&Self::Item) -> R,
        C: FnMut(R, R) -> R,
    {
        aggregate::aggregate_changes(self, selector, combine)
    }

    fn sub_set(self, start: usize, count: Option<usize>) -> SubSet<Self> {
        adapters::sub_set(self, start, count)
    }

    fn push_to_end(self, item: Self::Item) -> PushToEnd<Self> {
        adapters::push_to_end(self, item)
    }

    fn push_to_start(self, item: Self::Item) -> PushToStart<Self> {
        adapters::push_to_start(self, item)
    }

    fn insert_at(self, item: Self::Item, index: usize) -> InsertAt<Self> {
        adapters::insert_at(self, item, index)
    }

    fn skip_where_index<P>(self, predicate: P) -> SkipWhereIndex<Self, P>
    where
        P: FnMut(usize) -> bool,
    {
        adapters::skip_where_index(self, predicate)
    }

    fn modify<F>(self, f: F) -> Modify<Self, F>
    where
        F: FnMut(Self::Item) -> Self::Item,
    {
        adapters::modify(self, f)
    }

    fn modify_by_index<F>(self, f: F) -> ModifyByIndex<Self, F>
    where
        F: FnMut(usize, Self::Item) -> Self::Item,
    {
        adapters::modify_by_index(self, f)
    }

    /// Named `chain_all` to stay clear of [`Iterator::chain`].
    fn chain_all<O>(self, others: O) -> Chain<Self, O::IntoIter>
    where
        O: IntoIterator,
        O::Item: IntoIterator<Item = Self::Item>,
    {
        adapters::chain(self, others)
    }

    fn merge(self) -> Merge<Self>
    where
        Self::Item: IntoIterator,
    {
        adapters::merge(self)
    }
}

impl<I: Iterator> SeqOps for I {}
