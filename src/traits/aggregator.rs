/// Folds a stream of evidence into a single result.
///
/// `add` accepts an `Item` or anything that converts into one, and
/// `finalize` consumes the aggregator to produce the `Output`.
pub trait Aggregator: Send + Sync {
    type Item: Send + Sync + Clone;
    type Output: Send + Sync;

    fn add(&mut self, item: impl Into<Self::Item>);
    fn finalize(self) -> Self::Output;

    fn add_all<T: Into<Self::Item>>(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            self.add(item);
        }
    }
}
