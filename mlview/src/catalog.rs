use crate::PathOrStd;
use medialane_core::ports::Catalog;
use serde::de::DeserializeOwned;
use std::{marker::PhantomData, time::Duration};
use tracing::{Instrument as _, Level, event, span};

/// The ways loading a JSON collection can fail
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read {source_name}: {err}")]
    Read {
        source_name: String,
        #[source]
        err: std::io::Error,
    },
    #[error("malformed collection in {source_name}: {err}")]
    Parse {
        source_name: String,
        #[source]
        err: serde_json::Error,
    },
}

/// A collection stored as a JSON array in a file or on stdin
#[derive(Debug)]
pub struct JsonCatalog<R> {
    source: PathOrStd,
    _records: PhantomData<fn() -> R>,
}

impl<R> JsonCatalog<R> {
    pub fn new(source: PathOrStd) -> Self {
        Self {
            source,
            _records: PhantomData,
        }
    }
}

impl<R: DeserializeOwned + Send> Catalog<R> for JsonCatalog<R> {
    type Error = CatalogError;

    fn load(&self) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send {
        let source = self.source.clone();
        async move {
            let source_name = source.to_string();
            let bytes = source.read_bytes().await.map_err(|err| CatalogError::Read {
                source_name: source_name.clone(),
                err,
            })?;

            let records: Vec<R> = serde_json::from_slice(&bytes)
                .map_err(|err| CatalogError::Parse { source_name, err })?;
            event!(Level::DEBUG, source = %source, records = records.len(), "loaded collection");
            Ok(records)
        }
    }
}

/// A catalog that answers only after a fixed delay.
///
/// This stands in for the latency of a remote marketplace backend, so loading
/// behaves like the asynchronous fetch it replaces.
#[derive(Debug, Clone)]
pub struct Simulated<C> {
    inner: C,
    latency: Option<Duration>,
}

impl<C> Simulated<C> {
    pub fn new(inner: C, latency: Option<Duration>) -> Self {
        Self { inner, latency }
    }
}

impl<R, C> Catalog<R> for Simulated<C>
where
    C: Catalog<R> + Sync,
{
    type Error = C::Error;

    fn load(&self) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send {
        let latency = self.latency;
        let span = span!(Level::DEBUG, "simulated fetch");
        async move {
            if let Some(latency) = latency {
                event!(Level::DEBUG, latency = ?latency, "waiting");
                tokio::time::sleep(latency).await;
            }
            self.inner.load().await
        }
        .instrument(span)
    }
}
