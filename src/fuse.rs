/// Passes elements through until the first one equal to the stop value,
/// then ends the sequence for good (it does not resume past the stop).
pub struct Fuse<I: Iterator> {
    source: I,
    stop_value: I::Item,
    done: bool,
}

impl<I: Iterator> Fuse<I> {
    pub(crate) fn new(source: I, stop_value: I::Item) -> Self {
        Self {
            source,
            stop_value,
            done: false,
        }
    }
}

impl<I> Iterator for Fuse<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.next() {
            Some(item) if item != self.stop_value => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Fuse;

    #[test]
    fn stops_before_the_stop_value() {
        assert_eq!(
            Fuse::new(vec![1, 2, 0, 3].into_iter(), 0).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn does_not_resume_after_stopping() {
        let mut fused = Fuse::new(vec![1, 0, 2].into_iter(), 0);
        assert_eq!(fused.next(), Some(1));
        assert_eq!(fused.next(), None);
        assert_eq!(fused.next(), None);
    }

    #[test]
    fn absent_stop_value_is_the_identity() {
        assert_eq!(
            Fuse::new(vec![1, 2, 3].into_iter(), 9).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
