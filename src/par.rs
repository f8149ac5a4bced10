//! Best-effort parallel mapping. Not part of the lazy core: the whole
//! source is drawn up front and the result is handed back as a new
//! sequence over an owned buffer.

use log::debug;
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;

use crate::error::{Error, Result};
use crate::seq::LazySequence;
use crate::validate;

/// Tuning knobs for [`LazySequence::par_map`].
#[derive(Debug, Clone)]
pub struct ParOptions {
    /// Worker threads to run on; `None` uses the global pool.
    pub workers: Option<usize>,
    /// Minimum number of consecutive items handed to one worker at a time.
    pub chunk_size: usize,
}

impl Default for ParOptions {
    fn default() -> Self {
        Self {
            workers: None,
            chunk_size: 5,
        }
    }
}

impl<I: Iterator> LazySequence<I> {
    /// Eagerly maps `transform` across the sequence on a bounded worker
    /// pool, splitting the input into disjoint chunks and reassembling the
    /// results in input order.
    pub fn par_map<U, F>(
        self,
        options: &ParOptions,
        transform: F,
    ) -> Result<LazySequence<std::vec::IntoIter<U>>>
    where
        I::Item: Send,
        U: Send,
        F: Fn(I::Item) -> U + Send + Sync,
    {
        validate::require_positive(options.chunk_size, "parallel chunk size must be positive")?;
        let items: Vec<I::Item> = self.source.collect();
        debug!(
            "par_map over {} items (chunk size {})",
            items.len(),
            options.chunk_size
        );
        let run = || {
            items
                .into_par_iter()
                .with_min_len(options.chunk_size)
                .map(&transform)
                .collect::<Vec<U>>()
        };
        let mapped = match options.workers {
            Some(workers) => {
                validate::require_positive(workers, "worker count must be positive")?;
                let pool = ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .build()
                    .map_err(|_| Error::InvalidArgument("worker pool could not be built"))?;
                pool.install(run)
            }
            None => run(),
        };
        Ok(LazySequence::new(mapped))
    }
}

#[cfg(test)]
mod tests {
    use super::ParOptions;
    use crate::error::Error;
    use crate::wrap;

    #[test]
    fn results_come_back_in_input_order() {
        let options = ParOptions {
            workers: Some(2),
            chunk_size: 3,
        };
        let mapped: Vec<i32> = wrap(0..100)
            .par_map(&options, |x| x * 2)
            .unwrap()
            .collect();
        assert_eq!(mapped, (0..100).map(|x| x * 2).collect::<Vec<_>>());
    }

    #[test]
    fn default_options_use_the_global_pool() {
        let mapped: Vec<i32> = wrap(vec![3, 1, 2])
            .par_map(&ParOptions::default(), |x| x + 1)
            .unwrap()
            .collect();
        assert_eq!(mapped, vec![4, 2, 3]);
    }

    #[test]
    fn zero_sized_options_are_rejected() {
        let zero_chunk = ParOptions {
            workers: None,
            chunk_size: 0,
        };
        assert!(matches!(
            wrap(vec![1]).par_map(&zero_chunk, |x| x),
            Err(Error::InvalidArgument(_))
        ));
        let zero_workers = ParOptions {
            workers: Some(0),
            chunk_size: 1,
        };
        assert!(matches!(
            wrap(vec![1]).par_map(&zero_workers, |x| x),
            Err(Error::InvalidArgument(_))
        ));
    }
}
