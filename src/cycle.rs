use log::trace;

/// Repeats the source indefinitely.
///
/// Sources are single-pass, so the first traversal is buffered as it is
/// drawn; every later pass replays the buffer. An empty source stays empty.
pub struct Cycle<I: Iterator> {
    source: Option<I>,
    buf: Vec<I::Item>,
    next_idx: usize,
}

impl<I: Iterator> Cycle<I> {
    pub(crate) fn new(source: I) -> Self {
        Self {
            source: Some(source),
            buf: Vec::new(),
            next_idx: 0,
        }
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = &mut self.source {
            match source.next() {
                Some(item) => {
                    self.buf.push(item.clone());
                    return Some(item);
                }
                None => {
                    trace!("cycle buffered {} elements, replaying", self.buf.len());
                    self.source = None;
                }
            }
        }
        if self.buf.is_empty() {
            return None;
        }
        let item = self.buf[self.next_idx].clone();
        self.next_idx = (self.next_idx + 1) % self.buf.len();
        Some(item)
    }
}
