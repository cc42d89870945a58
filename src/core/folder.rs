/// Sequential accumulator behind every reduction.
///
/// Each chunk is folded by one folder on its worker. The partials are then
/// merged by another folder on the calling thread, seeded with `init`.
pub trait Folder<Item>: Sized {
    type Result;

    /// Folds one more item into the accumulator.
    fn consume(self, item: Item) -> Self;

    /// Folds `iter` until it is exhausted or [`is_full`](Folder::is_full)
    /// reports that the folder stopped accepting items.
    fn consume_iter<I>(self, iter: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        let mut folder = self;

        for item in iter {
            folder = folder.consume(item);

            if folder.is_full() {
                break;
            }
        }

        folder
    }

    fn complete(self) -> Self::Result;

    /// `true` once further items would be ignored, e.g. after a failed combine.
    fn is_full(&self) -> bool {
        false
    }
}
