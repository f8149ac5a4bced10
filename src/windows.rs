use std::collections::VecDeque;

/// Sliding windows of fixed size over a source.
///
/// Every full window of `size` elements is emitted, advancing by one
/// element at a time (oldest evicted first). If the source runs dry before
/// the first full window, exactly one short window holding everything seen
/// is emitted; an empty source emits nothing. With `exact` set, short
/// windows are dropped instead.
pub struct Windows<I: Iterator> {
    source: I,
    size: usize,
    exact: bool,
    buf: VecDeque<I::Item>,
    emitted_full: bool,
    done: bool,
}

impl<I: Iterator> Windows<I> {
    pub(crate) fn new(source: I, size: usize, exact: bool) -> Self {
        Self {
            source,
            size,
            exact,
            buf: VecDeque::with_capacity(size),
            emitted_full: false,
            done: false,
        }
    }
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.source.next() {
                Some(item) => {
                    self.buf.push_back(item);
                    if self.buf.len() == self.size {
                        self.emitted_full = true;
                        let window = self.buf.iter().cloned().collect();
                        self.buf.pop_front();
                        return Some(window);
                    }
                }
                None => {
                    self.done = true;
                    if !self.emitted_full && !self.exact && !self.buf.is_empty() {
                        return Some(self.buf.drain(..).collect());
                    }
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Windows;

    #[test]
    fn full_windows_slide_by_one() {
        assert_eq!(
            Windows::new(0..7, 3, false).collect::<Vec<_>>(),
            vec![
                vec![0, 1, 2],
                vec![1, 2, 3],
                vec![2, 3, 4],
                vec![3, 4, 5],
                vec![4, 5, 6]
            ]
        );
    }

    #[test]
    fn short_source_yields_one_short_window() {
        assert_eq!(
            Windows::new(vec![1, 2].into_iter(), 3, false).collect::<Vec<_>>(),
            vec![vec![1, 2]]
        );
        assert!(Windows::new(Vec::<i32>::new().into_iter(), 3, false)
            .collect::<Vec<_>>()
            .is_empty());
    }

    #[test]
    fn exact_drops_short_windows() {
        assert!(Windows::new(vec![1, 2].into_iter(), 3, true)
            .collect::<Vec<_>>()
            .is_empty());
        assert_eq!(
            Windows::new(0..4, 3, true).collect::<Vec<_>>(),
            vec![vec![0, 1, 2], vec![1, 2, 3]]
        );
    }

    #[test]
    fn window_counts() {
        for len in 0..8_usize {
            for size in 1..5_usize {
                let windows = Windows::new(0..len, size, false).collect::<Vec<_>>();
                if len >= size {
                    assert_eq!(windows.len(), len - size + 1);
                    assert!(windows.iter().all(|w| w.len() == size));
                } else if len == 0 {
                    assert!(windows.is_empty());
                } else {
                    assert_eq!(windows, vec![(0..len).collect::<Vec<_>>()]);
                }
                let exact = Windows::new(0..len, size, true).collect::<Vec<_>>();
                let expected = if len >= size { len - size + 1 } else { 0 };
                assert_eq!(exact.len(), expected);
            }
        }
    }

    #[test]
    fn lazy_over_an_infinite_source() {
        assert_eq!(
            Windows::new(0.., 3, false).take(2).collect::<Vec<_>>(),
            vec![vec![0, 1, 2], vec![1, 2, 3]]
        );
    }
}
