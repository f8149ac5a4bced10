/// Positional pairs running to the longer of two sources.
///
/// Once one side is exhausted its slot is filled with a copy of `fill`
/// until the other side ends too.
pub struct ZipLongest<I: Iterator, J> {
    left: I,
    right: J,
    fill: I::Item,
}

impl<I: Iterator, J> ZipLongest<I, J> {
    pub(crate) fn new(left: I, right: J, fill: I::Item) -> Self {
        Self { left, right, fill }
    }
}

impl<I, J> Iterator for ZipLongest<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.left.next(), self.right.next()) {
            (None, None) => None,
            (left, right) => Some((
                left.unwrap_or_else(|| self.fill.clone()),
                right.unwrap_or_else(|| self.fill.clone()),
            )),
        }
    }
}
