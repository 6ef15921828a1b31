/// A pull-based cursor whose items may borrow from the cursor itself.
///
/// `Iterator` cannot hand out a reference into its own state, which is
/// exactly what the window and section engines do: they reuse a single
/// buffer and expose it on every step. The borrow returned by `next` must
/// end before `next` is called again.
pub trait LendingIterator {
    type Item<'a>
    where
        Self: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>>;

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut n = 0;
        while self.next().is_some() {
            n += 1;
        }
        n
    }
}
