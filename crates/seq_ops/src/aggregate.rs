/// Folds `selector(element)` with `combine` and returns the last element
/// whose application changed the running aggregate.
///
/// The first element seeds the aggregate and counts as a change, so the
/// result is `None` only for an empty source. Changes are detected by value
/// (`!=`), so an element that reproduces the current aggregate is not
/// recorded.
///
/// ```
/// use seq_ops::aggregate_changes;
///
/// let max = aggregate_changes([3, 1, 4, 1, 5], |&x| x, i32::max);
/// assert_eq!(max, Some(5));
/// ```
pub fn aggregate_changes<S, R, F, C>(source: S, mut selector: F, combine: C) -> Option<S::Item>
where
    S: IntoIterator,
    R: PartialEq + Clone,
    F: FnMut(&S::Item) -> R,
    C: FnMut(R, R) -> R,
{
    let mut source = source.into_iter();
    let first = source.next()?;
    let seed = selector(&first);
    track(source, seed, Some(first), selector, combine).1
}

/// Like [`aggregate_changes`], but the aggregate starts at `seed` and the
/// first element is only recorded if it moves the aggregate away from it.
///
/// `None` means no element changed the aggregate.
pub fn aggregate_changes_from<S, R, F, C>(
    source: S,
    seed: R,
    selector: F,
    combine: C,
) -> Option<S::Item>
where
    S: IntoIterator,
    R: PartialEq + Clone,
    F: FnMut(&S::Item) -> R,
    C: FnMut(R, R) -> R,
{
    track(source.into_iter(), seed, None, selector, combine).1
}

fn track<I, R, F, C>(
    source: I,
    seed: R,
    changed: Option<I::Item>,
    mut selector: F,
    mut combine: C,
) -> (R, Option<I::Item>)
where
    I: Iterator,
    R: PartialEq + Clone,
    F: FnMut(&I::Item) -> R,
    C: FnMut(R, R) -> R,
{
    source.fold((seed, changed), |(aggregate, changed), element| {
        let current = selector(&element);
        let next = combine(aggregate.clone(), current);
        if next != aggregate {
            (next, Some(element))
        } else {
            (aggregate, changed)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_and_min_track_the_changing_element() {
        let v = [3, 1, 4, 1, 5];
        assert_eq!(aggregate_changes(v, |&x| x, i32::max), Some(5));
        assert_eq!(aggregate_changes(v, |&x| x, i32::min), Some(1));
    }

    #[test]
    fn equal_aggregate_is_not_a_change() {
        let tagged = [(1, 'a'), (3, 'b'), (2, 'c'), (3, 'd')];
        let got = aggregate_changes(tagged, |&(k, _)| k, i32::max);
        assert_eq!(got, Some((3, 'b')));

        let got = aggregate_changes([(1, 'a'), (1, 'b')], |&(k, _)| k, i32::min);
        assert_eq!(got, Some((1, 'a')));
    }

    #[test]
    fn empty_source_has_no_change() {
        assert_eq!(aggregate_changes(Vec::<i32>::new(), |&x| x, i32::max), None);
        assert_eq!(aggregate_changes_from(Vec::<i32>::new(), 0, |&x| x, i32::max), None);
    }

    #[test]
    fn seeded_form_reports_no_change() {
        let v = [3, 1, 4, 1, 5];
        assert_eq!(aggregate_changes_from(v, 0, |&x| x, i32::max), Some(5));
        assert_eq!(aggregate_changes_from(v, 0, |&x| x, i32::min), None);
        assert_eq!(aggregate_changes_from(v, 2, |&x| x, i32::min), Some(1));
    }

    #[test]
    fn selector_projects_to_another_type() {
        let words = ["pear", "fig", "banana", "kiwi", "cherry"];
        let longest = aggregate_changes(words, |w| w.len(), usize::max);
        assert_eq!(longest, Some("banana"));

        // Running sum changes on every non-zero element.
        let last_nonzero = aggregate_changes([0, 4, 0, 2, 0], |&x| x, |a, b| a + b);
        assert_eq!(last_nonzero, Some(2));
    }
}
