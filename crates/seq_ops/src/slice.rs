use std::iter::{Fuse, FusedIterator};

use log::debug;

use crate::adapters::{SubSet, sub_set};
use crate::error::{Result, SeqError};

/// Range and stride of a [`slice`].
///
/// - `start` is inclusive, `end` exclusive; `end = None` means "to the end".
/// - `step` is the distance between yielded positions. A negative step walks
///   the selected range backwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SliceArgs {
    pub start: usize,
    pub end: Option<usize>,
    pub step: isize,
}

impl Default for SliceArgs {
    fn default() -> Self {
        Self {
            start: 0,
            end: None,
            step: 1,
        }
    }
}

impl SliceArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: usize) -> Self {
        self.end = Some(end);
        self
    }

    pub fn step(mut self, step: isize) -> Self {
        self.step = step;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(SeqError::invalid("step", "step must not be zero"));
        }
        if self.end.is_some_and(|end| end <= self.start) {
            return Err(SeqError::invalid(
                "end",
                "end index must be greater than start index",
            ));
        }
        Ok(())
    }

    fn is_identity(&self) -> bool {
        self.start == 0 && self.end.is_none()
    }
}

#[derive(Clone, Debug)]
enum Order<I> {
    Forward(Fuse<SubSet<I>>),
    // Holds the range until the first pull reads it into the buffer.
    Reverse(Option<SubSet<I>>),
}

/// Elements of `[start, end)` taken every `|step|` positions.
///
/// With a negative step the whole range is materialized on the first pull
/// and then walked from its last element.
#[derive(Clone, Debug)]
pub struct Slice<I: Iterator> {
    stride: usize,
    started: bool,
    order: Order<I>,
    // Reverse order only: popped from the back, so `buffer.last()` is the
    // next candidate.
    buffer: Vec<I::Item>,
}

pub fn slice<S>(source: S, args: SliceArgs) -> Result<Slice<S::IntoIter>>
where
    S: IntoIterator,
{
    args.validate()?;
    let source = source.into_iter();
    if args.step < 0 && args.end.is_none() && source.size_hint().0 == usize::MAX {
        return Err(SeqError::invalid(
            "step",
            "cannot walk an infinite sequence backwards",
        ));
    }

    let range = sub_set(source, args.start, args.end.map(|end| end - args.start));
    if !args.is_identity() {
        debug!(
            "slice restricted to [{}, {:?}) with step {}",
            args.start, args.end, args.step
        );
    }
    let order = if args.step > 0 {
        Order::Forward(range.fuse())
    } else {
        Order::Reverse(Some(range))
    };
    Ok(Slice {
        stride: args.step.unsigned_abs(),
        started: false,
        order,
        buffer: Vec::new(),
    })
}

/// Shorthand for `slice(source, SliceArgs { start, end, step })`.
pub fn slice_range<S>(
    source: S,
    start: usize,
    end: Option<usize>,
    step: isize,
) -> Result<Slice<S::IntoIter>>
where
    S: IntoIterator,
{
    slice(source, SliceArgs { start, end, step })
}

impl<I: Iterator> Iterator for Slice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let first = !self.started;
        self.started = true;
        match &mut self.order {
            Order::Forward(range) => {
                if first {
                    range.next()
                } else {
                    range.nth(self.stride - 1)
                }
            }
            Order::Reverse(pending) => {
                if let Some(range) = pending.take() {
                    self.buffer = range.collect();
                    debug!(
                        "slice materialized {} elements to walk backwards",
                        self.buffer.len()
                    );
                }
                if !first {
                    let Some(len) = self.buffer.len().checked_sub(self.stride - 1) else {
                        self.buffer.clear();
                        return None;
                    };
                    self.buffer.truncate(len);
                }
                self.buffer.pop()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = match &self.order {
            Order::Forward(range) => range.size_hint(),
            Order::Reverse(Some(range)) => range.size_hint(),
            Order::Reverse(None) => (self.buffer.len(), Some(self.buffer.len())),
        };
        let count = |n: usize| {
            if !self.started {
                n.div_ceil(self.stride)
            } else {
                n / self.stride
            }
        };
        (count(lo), hi.map(count))
    }
}

impl<I: Iterator> FusedIterator for Slice<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &[i32], args: SliceArgs) -> Vec<i32> {
        slice(source.iter().copied(), args).unwrap().collect()
    }

    #[test]
    fn known_cases() {
        let v = [0, 1, 2, 3, 4, 5];
        assert_eq!(run(&v, SliceArgs::new().start(1).end(5).step(2)), [1, 3]);
        assert_eq!(run(&v[..5], SliceArgs::new().step(-1)), [4, 3, 2, 1, 0]);
        assert_eq!(run(&v, SliceArgs::new().step(2)), [0, 2, 4]);
        assert_eq!(run(&v, SliceArgs::new().step(3)), [0, 3]);
        assert_eq!(run(&v, SliceArgs::new().step(-2)), [5, 3, 1]);
        assert_eq!(run(&v, SliceArgs::new().start(1).end(5).step(-3)), [4, 1]);
        assert_eq!(run(&v, SliceArgs::new().start(4)), [4, 5]);
        assert_eq!(run(&v, SliceArgs::new().end(2)), [0, 1]);
        assert_eq!(run(&v, SliceArgs::new().step(100)), [0]);
        assert_eq!(run(&v, SliceArgs::new().step(-100)), [5]);
    }

    #[test]
    fn range_past_the_end_is_empty() {
        let v = [0, 1, 2];
        assert!(run(&v, SliceArgs::new().start(5)).is_empty());
        assert!(run(&v, SliceArgs::new().start(5).step(-1)).is_empty());
        assert!(run(&[], SliceArgs::new().step(-2)).is_empty());
    }

    #[test]
    fn rejects_bad_arguments_at_call_time() {
        let source = std::iter::from_fn(|| -> Option<i32> { panic!("source was pulled") });
        let err = slice(source, SliceArgs::new().step(0)).unwrap_err();
        assert_eq!(err.param(), Some("step"));

        for args in [
            SliceArgs::new().start(3).end(3),
            SliceArgs::new().start(3).end(1),
            SliceArgs::new().end(0),
        ] {
            assert_eq!(slice(0..10, args).unwrap_err().param(), Some("end"));
        }

        // Zero step wins over every other violation.
        let args = SliceArgs::new().start(3).end(1).step(0);
        assert_eq!(slice(0..10, args).unwrap_err().param(), Some("step"));
    }

    #[test]
    fn reversing_an_infinite_source_is_rejected() {
        let err = slice(0_u32.., SliceArgs::new().step(-1)).unwrap_err();
        assert_eq!(err.param(), Some("step"));
        let err = slice(std::iter::repeat(7), SliceArgs::new().start(2).step(-1)).unwrap_err();
        assert_eq!(err.param(), Some("step"));

        // A bounded range of an infinite source is fine.
        let got: Vec<u32> = slice(0_u32.., SliceArgs::new().start(2).end(6).step(-1))
            .unwrap()
            .collect();
        assert_eq!(got, [5, 4, 3, 2]);
    }

    #[test]
    fn forward_stride_is_lazy() {
        let got: Vec<u64> = slice(0_u64.., SliceArgs::new().start(1).step(10))
            .unwrap()
            .take(3)
            .collect();
        assert_eq!(got, [1, 11, 21]);
    }

    #[test]
    fn identity_slice() {
        let v: Vec<i32> = (0..17).collect();
        assert_eq!(run(&v, SliceArgs::default()), v);
        assert_eq!(slice_range(&v, 0, None, 1).unwrap().count(), v.len());
    }

    #[test]
    fn size_hint_matches_len() {
        for step in [-4, -3, -1, 1, 2, 5] {
            let mut it = slice(0..11, SliceArgs::new().start(1).step(step)).unwrap();
            loop {
                let expected = it.clone().count();
                assert_eq!(it.size_hint(), (expected, Some(expected)), "step={step}");
                if it.next().is_none() {
                    break;
                }
            }
        }
    }
}
