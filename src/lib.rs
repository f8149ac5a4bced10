//! Fluent, lazily evaluated sequence combinators.
//!
//! [`LazySequence`] wraps any iteration source and exposes chainable lazy
//! transformations alongside eager terminal operations. Chainable
//! combinators never consume the source at call time; a terminal operation
//! drives the whole chain in a single pass.
//!
//! ```
//! use lazyseq::wrap;
//!
//! let doubled_evens: Vec<i32> = wrap(vec![1, 2, 3, 4, 5])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .collect();
//! assert_eq!(doubled_evens, vec![20, 40]);
//! ```
//!
//! Size arguments are checked eagerly: a zero chunk, window, or step size
//! fails with [`Error::InvalidArgument`] before any lazy producer is
//! built, and must-exist queries (`find`, `nth`, `last`, ...) fail with
//! [`Error::ItemNotFound`]. Sequences hold no external resources, so
//! abandoning a partially-drawn chain is always safe.

mod chunks;
mod cycle;
mod error;
mod extend;
mod fuse;
mod insert;
mod par;
mod seq;
mod validate;
mod windows;
mod zip_longest;

pub use crate::chunks::Chunks;
pub use crate::cycle::Cycle;
pub use crate::error::{Error, Result};
pub use crate::extend::ExtendTarget;
pub use crate::fuse::Fuse;
pub use crate::insert::Insert;
pub use crate::par::ParOptions;
pub use crate::seq::LazySequence;
pub use crate::windows::Windows;
pub use crate::zip_longest::ZipLongest;

use std::iter;

use itertools::structs::MultiProduct;
use itertools::Itertools;

/// Wraps an iteration source; shorthand for [`LazySequence::new`].
pub fn wrap<C: IntoIterator>(source: C) -> LazySequence<C::IntoIter> {
    LazySequence::new(source)
}

/// Yields `value` indefinitely.
pub fn repeat<T: Clone>(value: T) -> LazySequence<iter::Repeat<T>> {
    LazySequence::new(iter::repeat(value))
}

/// Yields `value` exactly `n` times.
pub fn repeat_n<T: Clone>(value: T, n: usize) -> LazySequence<iter::Take<iter::Repeat<T>>> {
    LazySequence::new(iter::repeat(value).take(n))
}

/// Concatenates the given sequences front to back.
pub fn chain<C>(sequences: C) -> LazySequence<iter::Flatten<C::IntoIter>>
where
    C: IntoIterator,
    C::Item: IntoIterator,
{
    LazySequence::new(sequences.into_iter().flatten())
}

/// Cartesian product of the given sequences, in lexicographic order of the
/// input order.
pub fn product<C>(sequences: C) -> LazySequence<MultiProduct<<C::Item as IntoIterator>::IntoIter>>
where
    C: IntoIterator,
    C::Item: IntoIterator,
    <C::Item as IntoIterator>::IntoIter: Clone,
    <C::Item as IntoIterator>::Item: Clone,
{
    LazySequence::new(sequences.into_iter().multi_cartesian_product())
}

#[cfg(test)]
mod tests {
    use super::{chain, product, repeat, repeat_n, wrap};

    #[test]
    fn repeat_is_infinite() {
        let sevens: Vec<i32> = repeat(7).take(4).collect();
        assert_eq!(sevens, vec![7, 7, 7, 7]);
    }

    #[test]
    fn repeat_n_is_bounded() {
        let sevens: Vec<i32> = repeat_n(7, 3).collect();
        assert_eq!(sevens, vec![7, 7, 7]);
        let none: Vec<i32> = repeat_n(7, 0).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn chain_concatenates_in_argument_order() {
        let joined: Vec<i32> = chain(vec![vec![1, 2], vec![], vec![3, 4]]).collect();
        assert_eq!(joined, vec![1, 2, 3, 4]);
    }

    #[test]
    fn product_is_lexicographic_in_input_order() {
        let pairs: Vec<Vec<i32>> = product(vec![vec![1, 2], vec![10, 20]]).collect();
        assert_eq!(
            pairs,
            vec![vec![1, 10], vec![1, 20], vec![2, 10], vec![2, 20]]
        );
    }

    #[test]
    fn product_with_an_empty_factor_is_empty() {
        let empty: Vec<Vec<i32>> = product(vec![vec![1, 2], vec![]]).collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn wrap_accepts_any_iteration_source() {
        assert_eq!(wrap(0..3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(wrap("hi".chars()).collect::<String>(), "hi");
    }
}
