use std::iter;

use crate::chunks::Chunks;
use crate::cycle::Cycle;
use crate::error::{Error, Result};
use crate::extend::ExtendTarget;
use crate::fuse::Fuse;
use crate::insert::Insert;
use crate::validate;
use crate::windows::Windows;
use crate::zip_longest::ZipLongest;

/// A fluent, lazily evaluated wrapper around an iteration source.
///
/// Chainable combinators consume the receiver and return a new
/// `LazySequence` whose source pulls from the previous one; nothing is
/// drawn until a terminal operation drives the chain. The source is owned
/// exclusively and traversed at most once.
#[derive(Debug, Clone)]
pub struct LazySequence<I> {
    pub(crate) source: I,
}

impl<I: Iterator> LazySequence<I> {
    pub fn new<C>(source: C) -> Self
    where
        C: IntoIterator<IntoIter = I>,
    {
        Self {
            source: source.into_iter(),
        }
    }

    // ---- chainable combinators -------------------------------------------

    /// Concatenates `other` after this sequence.
    pub fn chain<C>(self, other: C) -> LazySequence<iter::Chain<I, C::IntoIter>>
    where
        C: IntoIterator<Item = I::Item>,
    {
        LazySequence {
            source: self.source.chain(other),
        }
    }

    /// Groups of `n` consecutive elements; the final group may be shorter.
    pub fn chunks(self, n: usize) -> Result<LazySequence<Chunks<I>>> {
        validate::require_positive(n, "chunk size must be positive")?;
        Ok(LazySequence {
            source: Chunks::new(self.source, n, false),
        })
    }

    /// Like [`chunks`](Self::chunks), but a short final group is dropped.
    pub fn chunks_exact(self, n: usize) -> Result<LazySequence<Chunks<I>>> {
        validate::require_positive(n, "chunk size must be positive")?;
        Ok(LazySequence {
            source: Chunks::new(self.source, n, true),
        })
    }

    /// Repeats the sequence forever, buffering one full pass of the
    /// single-pass source.
    pub fn cycle(self) -> LazySequence<Cycle<I>>
    where
        I::Item: Clone,
    {
        LazySequence {
            source: Cycle::new(self.source),
        }
    }

    /// Pairs each element with its zero-based index.
    pub fn enumerate(self) -> LazySequence<iter::Enumerate<I>> {
        LazySequence {
            source: self.source.enumerate(),
        }
    }

    /// Keeps the elements for which `predicate` holds, in order.
    pub fn filter<P>(self, predicate: P) -> LazySequence<iter::Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        LazySequence {
            source: self.source.filter(predicate),
        }
    }

    /// Applies `transform` and drops the `None` results.
    pub fn filter_map<U, F>(self, transform: F) -> LazySequence<iter::FilterMap<I, F>>
    where
        F: FnMut(I::Item) -> Option<U>,
    {
        LazySequence {
            source: self.source.filter_map(transform),
        }
    }

    /// Flattens one level of nesting, preserving sub-element order.
    pub fn flatten(self) -> LazySequence<iter::Flatten<I>>
    where
        I::Item: IntoIterator,
    {
        LazySequence {
            source: self.source.flatten(),
        }
    }

    /// Ends the sequence just before the first element equal to
    /// `stop_value`.
    pub fn fuse(self, stop_value: I::Item) -> LazySequence<Fuse<I>>
    where
        I::Item: PartialEq,
    {
        LazySequence {
            source: Fuse::new(self.source, stop_value),
        }
    }

    /// Splices `value` in immediately before the element at `index`, or
    /// after the final element if the sequence is shorter than that.
    pub fn insert(self, index: usize, value: I::Item) -> LazySequence<Insert<I>> {
        LazySequence {
            source: Insert::new(self.source, index, value),
        }
    }

    /// Runs `action` on a reference to each element as it passes through,
    /// without altering the element.
    pub fn inspect<F>(self, action: F) -> LazySequence<iter::Inspect<I, F>>
    where
        F: FnMut(&I::Item),
    {
        LazySequence {
            source: self.source.inspect(action),
        }
    }

    /// Transforms every element; the element type may change.
    pub fn map<U, F>(self, transform: F) -> LazySequence<iter::Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        LazySequence {
            source: self.source.map(transform),
        }
    }

    /// Adjacent overlapping pairs; shorthand for windows of size two.
    pub fn pairs(self) -> LazySequence<Windows<I>>
    where
        I::Item: Clone,
    {
        LazySequence {
            source: Windows::new(self.source, 2, false),
        }
    }

    /// Drops the first `n` elements.
    pub fn skip(self, n: usize) -> LazySequence<iter::Skip<I>> {
        LazySequence {
            source: self.source.skip(n),
        }
    }

    /// Drops the contiguous prefix for which `predicate` holds; the first
    /// failing element and everything after it pass through unchanged.
    pub fn skip_while<P>(self, predicate: P) -> LazySequence<iter::SkipWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        LazySequence {
            source: self.source.skip_while(predicate),
        }
    }

    /// Every `n`th element, starting from the first.
    pub fn step_by(self, n: usize) -> Result<LazySequence<iter::StepBy<I>>> {
        validate::require_positive(n, "step must be positive")?;
        Ok(LazySequence {
            source: self.source.step_by(n),
        })
    }

    /// At most the first `n` elements.
    pub fn take(self, n: usize) -> LazySequence<iter::Take<I>> {
        LazySequence {
            source: self.source.take(n),
        }
    }

    /// The contiguous prefix for which `predicate` holds; stops for good at
    /// the first failure.
    pub fn take_while<P>(self, predicate: P) -> LazySequence<iter::TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        LazySequence {
            source: self.source.take_while(predicate),
        }
    }

    /// Overlapping windows of `n` elements. A source shorter than `n`
    /// yields exactly one short window with everything in it; an empty
    /// source yields nothing.
    pub fn windows(self, n: usize) -> Result<LazySequence<Windows<I>>>
    where
        I::Item: Clone,
    {
        validate::require_positive(n, "window size must be positive")?;
        Ok(LazySequence {
            source: Windows::new(self.source, n, false),
        })
    }

    /// Like [`windows`](Self::windows), but short windows are dropped.
    pub fn windows_exact(self, n: usize) -> Result<LazySequence<Windows<I>>>
    where
        I::Item: Clone,
    {
        validate::require_positive(n, "window size must be positive")?;
        Ok(LazySequence {
            source: Windows::new(self.source, n, true),
        })
    }

    /// Positional pairs with `other`, stopping at the shorter side.
    pub fn zip<C>(self, other: C) -> LazySequence<iter::Zip<I, C::IntoIter>>
    where
        C: IntoIterator,
    {
        LazySequence {
            source: self.source.zip(other),
        }
    }

    /// Positional pairs with `other`, continuing to the longer side and
    /// filling the exhausted one with copies of `fill`.
    pub fn zip_longest<C>(self, other: C, fill: I::Item) -> LazySequence<ZipLongest<I, C::IntoIter>>
    where
        C: IntoIterator<Item = I::Item>,
        I::Item: Clone,
    {
        LazySequence {
            source: ZipLongest::new(self.source, other.into_iter(), fill),
        }
    }

    // ---- terminal operations ---------------------------------------------

    /// Whether every element satisfies `predicate`; short-circuits on the
    /// first failure.
    pub fn all<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        self.source.all(predicate)
    }

    /// Whether some element satisfies `predicate`; short-circuits on the
    /// first match.
    pub fn any<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        self.source.any(predicate)
    }

    /// Whether some element compares equal to `item`. Never returns on an
    /// infinite sequence that lacks the item.
    pub fn contains(self, item: I::Item) -> bool
    where
        I::Item: PartialEq,
    {
        self.filter(move |x| *x == item).any(|_| true)
    }

    /// Materializes the sequence into any `FromIterator` container.
    pub fn collect<C>(self) -> C
    where
        C: FromIterator<I::Item>,
    {
        self.source.collect()
    }

    /// Drains the sequence into an existing container, appending,
    /// key-overwriting, or set-inserting according to the target's
    /// capability.
    pub fn collect_into<C>(self, target: &mut C)
    where
        C: ExtendTarget<I::Item>,
    {
        target.extend_from(self.source);
    }

    /// Number of elements. O(1) when the source reports an exact size,
    /// otherwise the sequence is consumed and counted.
    pub fn count(self) -> usize {
        match self.source.size_hint() {
            (lower, Some(upper)) if lower == upper => lower,
            _ => self.source.count(),
        }
    }

    /// Number of elements satisfying `predicate`; always consumes.
    pub fn count_where<P>(self, predicate: P) -> usize
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.source.filter(predicate).count()
    }

    /// The first element satisfying `predicate`.
    pub fn find<P>(mut self, predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.source
            .find(predicate)
            .ok_or(Error::ItemNotFound("no element matched the predicate"))
    }

    /// Left fold with a seed; the accumulator type may differ from the
    /// element type.
    pub fn fold<B, F>(self, initial: B, combine: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.source.fold(initial, combine)
    }

    /// Applies `action` to every element, in traversal order.
    pub fn for_each<F>(self, action: F)
    where
        F: FnMut(I::Item),
    {
        self.source.for_each(action);
    }

    /// The final element.
    pub fn last(self) -> Result<I::Item> {
        self.source
            .last()
            .ok_or(Error::ItemNotFound("sequence is empty"))
    }

    /// The largest element under the natural ordering.
    pub fn max(self) -> Result<I::Item>
    where
        I::Item: Ord,
    {
        self.source
            .max()
            .ok_or(Error::ItemNotFound("sequence is empty"))
    }

    /// The element whose `key` is largest.
    pub fn max_by_key<K, F>(self, key: F) -> Result<I::Item>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        self.source
            .max_by_key(key)
            .ok_or(Error::ItemNotFound("sequence is empty"))
    }

    /// The smallest element under the natural ordering.
    pub fn min(self) -> Result<I::Item>
    where
        I::Item: Ord,
    {
        self.source
            .min()
            .ok_or(Error::ItemNotFound("sequence is empty"))
    }

    /// The element whose `key` is smallest.
    pub fn min_by_key<K, F>(self, key: F) -> Result<I::Item>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        self.source
            .min_by_key(key)
            .ok_or(Error::ItemNotFound("sequence is empty"))
    }

    /// The element at zero-based position `n`.
    pub fn nth(self, n: usize) -> Result<I::Item> {
        self.enumerate()
            .find(|(index, _)| *index == n)
            .map(|(_, item)| item)
            .map_err(|_| Error::ItemNotFound("sequence ended before the requested index"))
    }

    /// Splits the elements by `predicate` in a single pass, preserving
    /// order within each part: (matching, non-matching).
    pub fn partition<P>(self, predicate: P) -> (Vec<I::Item>, Vec<I::Item>)
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.source.partition(predicate)
    }

    /// Zero-based position of the first element equal to `item`.
    pub fn position(self, item: I::Item) -> Result<usize>
    where
        I::Item: PartialEq,
    {
        self.enumerate()
            .find(move |(_, x)| *x == item)
            .map(|(index, _)| index)
            .map_err(|_| Error::ItemNotFound("item is not in the sequence"))
    }

    /// Left fold without a seed; fails on an empty sequence.
    pub fn reduce<F>(self, combine: F) -> Result<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        self.source
            .reduce(combine)
            .ok_or(Error::ItemNotFound("reduce of an empty sequence"))
    }
}

impl<I: Iterator> IntoIterator for LazySequence<I> {
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self.source
    }
}
