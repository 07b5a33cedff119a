use std::convert::Infallible;

/// A source of raw collections.
///
/// List views do not care where their records come from: a static dataset,
/// a file, a remote fetch or a contract read all look the same through this
/// trait. Loading is asynchronous because most real sources are.
pub trait Catalog<R> {
    /// Error type for failed loads
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the full collection, in its natural order
    fn load(&self) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send;
}

/// An in-memory collection is its own catalog
impl<R: Clone + Send + 'static> Catalog<R> for Vec<R> {
    type Error = Infallible;

    fn load(&self) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send {
        let records = self.clone();
        async move { Ok(records) }
    }
}
