use std::fmt;
use std::iter::FusedIterator;

use log::trace;

use crate::error::{Result, SeqError};
use crate::lending::LendingIterator;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Unprimed,
    Running,
    Done,
}

/// Sliding window of fixed width over a source sequence.
///
/// Every yielded window is the *same* backing buffer: it is rotated by one
/// slot and refilled in place on each pull. The borrow checker forces a
/// window to be released before the next pull; use [`Windows::owned`] to get
/// an independent `Vec` per step instead.
///
/// The first pull reads exactly `window_size` elements. If the source runs
/// dry before that, the first item is `Err(SeqError::SourceTooSmall)` and the
/// cursor is exhausted afterwards.
#[derive(Clone, Debug)]
pub struct Windows<I: Iterator> {
    source: I,
    window_size: usize,
    buffer: Vec<I::Item>,
    state: State,
}

pub fn windows<S>(source: S, window_size: usize) -> Result<Windows<S::IntoIter>>
where
    S: IntoIterator,
{
    if window_size == 0 {
        return Err(SeqError::invalid(
            "window_size",
            "window size must be greater than zero",
        ));
    }
    Ok(Windows {
        source: source.into_iter(),
        window_size,
        buffer: Vec::new(),
        state: State::Unprimed,
    })
}

impl<I: Iterator> Windows<I> {
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Copying variant: each window is cloned into its own `Vec`.
    pub fn owned(self) -> OwnedWindows<I>
    where
        I::Item: Clone,
    {
        OwnedWindows { inner: self }
    }

    fn prime(&mut self) -> Result<()> {
        self.buffer.reserve_exact(self.window_size);
        while self.buffer.len() < self.window_size {
            match self.source.next() {
                Some(item) => self.buffer.push(item),
                None => {
                    return Err(SeqError::SourceTooSmall {
                        required: self.window_size,
                        found: self.buffer.len(),
                    });
                }
            }
        }
        trace!("window engine primed with {} elements", self.window_size);
        Ok(())
    }
}

impl<I: Iterator> LendingIterator for Windows<I> {
    type Item<'a>
        = Result<&'a [I::Item]>
    where
        Self: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        match self.state {
            State::Unprimed => match self.prime() {
                Ok(()) => {
                    self.state = State::Running;
                    Some(Ok(&self.buffer))
                }
                Err(err) => {
                    self.state = State::Done;
                    self.buffer = Vec::new();
                    Some(Err(err))
                }
            },
            State::Running => match self.source.next() {
                Some(item) => {
                    self.buffer.rotate_left(1);
                    let last = self.buffer.len() - 1;
                    self.buffer[last] = item;
                    Some(Ok(&self.buffer))
                }
                None => {
                    self.state = State::Done;
                    None
                }
            },
            State::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Unprimed => {
                // A too-short source still produces one error item.
                let fill = self.window_size - 1;
                let (lo, hi) = self.source.size_hint();
                let count = |n: usize| if n > fill { n - fill } else { 1 };
                (count(lo), hi.map(count))
            }
            State::Running => self.source.size_hint(),
            State::Done => (0, Some(0)),
        }
    }
}

/// Windows cloned into fresh `Vec`s; see [`Windows::owned`].
pub struct OwnedWindows<I: Iterator> {
    inner: Windows<I>,
}

impl<I> Clone for OwnedWindows<I>
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

impl<I> fmt::Debug for OwnedWindows<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedWindows").field("inner", &self.inner).finish()
    }
}

impl<I> Iterator for OwnedWindows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Result<Vec<I::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|window| window.map(<[I::Item]>::to_vec))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> FusedIterator for OwnedWindows<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn collect(source: &[i32], w: usize) -> Result<Vec<Vec<i32>>> {
        windows(source.iter().copied(), w)?.owned().collect()
    }

    #[test]
    fn zero_width_fails_before_touching_source() {
        let source = std::iter::from_fn(|| -> Option<i32> { panic!("source was pulled") });
        let err = windows(source, 0).unwrap_err();
        assert_eq!(err.param(), Some("window_size"));
    }

    #[test]
    fn known_cases() {
        assert_eq!(collect(&[1, 2, 3], 3), Ok(vec![vec![1, 2, 3]]));
        assert_eq!(
            collect(&[1, 2, 3, 4, 5], 2),
            Ok(vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]])
        );
        assert_eq!(
            collect(&[7, 8, 9], 1),
            Ok(vec![vec![7], vec![8], vec![9]])
        );
    }

    #[test]
    fn short_source_errors_lazily_then_ends() {
        let mut w = windows([1, 2], 3).unwrap();
        match w.next() {
            Some(Err(SeqError::SourceTooSmall { required, found })) => {
                assert_eq!((required, found), (3, 2));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(w.next().is_none());
        assert!(w.next().is_none());
    }

    #[test]
    fn empty_source_reports_too_small() {
        let got = collect(&[], 2);
        assert_eq!(
            got,
            Err(SeqError::SourceTooSmall {
                required: 2,
                found: 0
            })
        );
    }

    #[test]
    fn first_pull_reads_exactly_one_window() {
        let pulled = Cell::new(0_usize);
        let source = (0..100).inspect(|_| pulled.set(pulled.get() + 1));
        let mut w = windows(source, 4).unwrap();
        assert_eq!(pulled.get(), 0);
        assert_eq!(w.next().unwrap().unwrap(), &[0, 1, 2, 3]);
        assert_eq!(pulled.get(), 4);
        assert_eq!(w.next().unwrap().unwrap(), &[1, 2, 3, 4]);
        assert_eq!(pulled.get(), 5);
    }

    #[test]
    fn yields_the_same_buffer_every_step() {
        let mut w = windows(0..10, 3).unwrap();
        let first = w.next().unwrap().unwrap().as_ptr();
        while let Some(window) = w.next() {
            assert_eq!(window.unwrap().as_ptr(), first);
        }
    }

    #[test]
    fn works_on_infinite_sources() {
        let got: Vec<Vec<u32>> = windows(0_u32.., 2)
            .unwrap()
            .owned()
            .take(3)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(got, vec![vec![0, 1], vec![1, 2], vec![2, 3]]);
    }

    #[test]
    fn size_hint_is_exact_for_exact_sources() {
        let mut w = windows(0..10, 4).unwrap();
        assert_eq!(w.size_hint(), (7, Some(7)));
        w.next();
        assert_eq!(w.size_hint(), (6, Some(6)));
        assert_eq!(w.count(), 6);

        let short = windows(0..2, 4).unwrap();
        assert_eq!(short.size_hint(), (1, Some(1)));
    }

    #[test]
    fn owned_windows_clone_resumes_independently() {
        let w = windows(0..5, 3).unwrap();
        assert_eq!(w.window_size(), 3);
        let mut a = w.owned();
        assert_eq!(a.next(), Some(Ok(vec![0, 1, 2])));
        let b = a.clone();
        assert_eq!(a.next(), Some(Ok(vec![1, 2, 3])));
        let rest: Result<Vec<Vec<i32>>> = b.collect();
        assert_eq!(rest, Ok(vec![vec![1, 2, 3], vec![2, 3, 4]]));
        assert_eq!(a.count(), 1);

        let shown = format!("{:?}", windows([7, 8], 2).unwrap().owned());
        assert!(shown.starts_with("OwnedWindows"), "{shown}");
    }
}
