/// Splices one value into the source immediately before position `index`.
///
/// If the source ends before reaching `index`, the value is appended after
/// the final element.
pub struct Insert<I: Iterator> {
    source: I,
    value: Option<I::Item>,
    index: usize,
    pos: usize,
}

impl<I: Iterator> Insert<I> {
    pub(crate) fn new(source: I, index: usize, value: I::Item) -> Self {
        Self {
            source,
            value: Some(value),
            index,
            pos: 0,
        }
    }
}

impl<I: Iterator> Iterator for Insert<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.index {
            if let Some(value) = self.value.take() {
                return Some(value);
            }
        }
        match self.source.next() {
            Some(item) => {
                self.pos += 1;
                Some(item)
            }
            None => self.value.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Insert;

    #[test]
    fn splices_before_the_indexed_element() {
        assert_eq!(
            Insert::new(vec![1, 2, 3].into_iter(), 0, 9).collect::<Vec<_>>(),
            vec![9, 1, 2, 3]
        );
        assert_eq!(
            Insert::new(vec![1, 2, 3].into_iter(), 2, 9).collect::<Vec<_>>(),
            vec![1, 2, 9, 3]
        );
    }

    #[test]
    fn index_past_the_end_appends() {
        assert_eq!(
            Insert::new(vec![1, 2].into_iter(), 2, 9).collect::<Vec<_>>(),
            vec![1, 2, 9]
        );
        assert_eq!(
            Insert::new(vec![1, 2].into_iter(), 7, 9).collect::<Vec<_>>(),
            vec![1, 2, 9]
        );
        assert_eq!(
            Insert::new(Vec::new().into_iter(), 3, 9).collect::<Vec<_>>(),
            vec![9]
        );
    }
}
