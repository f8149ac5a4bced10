/// Consecutive groups of `size` elements, in source order.
///
/// The final group may be shorter than `size`; with `exact` set it is
/// dropped instead.
pub struct Chunks<I> {
    source: I,
    size: usize,
    exact: bool,
}

impl<I: Iterator> Chunks<I> {
    pub(crate) fn new(source: I, size: usize, exact: bool) -> Self {
        Self { source, size, exact }
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            match self.source.next() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }
        if chunk.is_empty() || (self.exact && chunk.len() < self.size) {
            None
        } else {
            Some(chunk)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Chunks;

    #[test]
    fn last_chunk_may_be_short() {
        assert_eq!(
            Chunks::new(0..5, 2, false).collect::<Vec<_>>(),
            vec![vec![0, 1], vec![2, 3], vec![4]]
        );
    }

    #[test]
    fn exact_drops_the_short_tail() {
        assert_eq!(
            Chunks::new(0..5, 2, true).collect::<Vec<_>>(),
            vec![vec![0, 1], vec![2, 3]]
        );
    }

    #[test]
    fn concatenation_restores_the_source() {
        for len in 0..9_usize {
            for size in 1..5_usize {
                let chunks = Chunks::new(0..len, size, false).collect::<Vec<_>>();
                for chunk in chunks.iter().rev().skip(1) {
                    assert_eq!(chunk.len(), size);
                }
                let rebuilt = chunks.into_iter().flatten().collect::<Vec<_>>();
                assert_eq!(rebuilt, (0..len).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn empty_source_yields_nothing() {
        assert!(Chunks::new(0..0, 3, false).next().is_none());
    }
}
