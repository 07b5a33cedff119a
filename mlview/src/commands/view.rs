use crate::{CatalogError, IOArgs, JsonCatalog, PathOrStd, Simulated};
use clap::ValueEnum;
use medialane_core::{
    models::{
        Asset, Campaign, Criteria, License, PageRequest, RevenueRecord, Token, ViewPage,
        ViewSummary,
    },
    ports::{Catalog as _, Listable},
};
use medialane_view::{derive_page, derive_view, summarize};
use schemars::{Schema, schema_for};
use serde::{Serialize, de::DeserializeOwned};
use std::{io::Write, time::Duration};

// The datasets the tool understands. Each variant selects the record type
// the input is parsed as; the derivation itself is the same for all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Assets,
    Campaigns,
    Licenses,
    Revenue,
    Tokens,
}

impl RecordKind {
    /// Print one page of the derived view
    pub async fn view(
        &self,
        io: &IOArgs,
        latency: Option<Duration>,
        criteria: &Criteria,
        request: PageRequest,
    ) -> anyhow::Result<()> {
        match self {
            Self::Assets => print_page::<Asset>(io, latency, criteria, request).await,
            Self::Campaigns => print_page::<Campaign>(io, latency, criteria, request).await,
            Self::Licenses => print_page::<License>(io, latency, criteria, request).await,
            Self::Revenue => print_page::<RevenueRecord>(io, latency, criteria, request).await,
            Self::Tokens => print_page::<Token>(io, latency, criteria, request).await,
        }
    }

    /// Print the summary of the derived view
    pub async fn summary(
        &self,
        io: &IOArgs,
        latency: Option<Duration>,
        criteria: &Criteria,
    ) -> anyhow::Result<()> {
        match self {
            Self::Assets => print_summary::<Asset>(io, latency, criteria).await,
            Self::Campaigns => print_summary::<Campaign>(io, latency, criteria).await,
            Self::Licenses => print_summary::<License>(io, latency, criteria).await,
            Self::Revenue => print_summary::<RevenueRecord>(io, latency, criteria).await,
            Self::Tokens => print_summary::<Token>(io, latency, criteria).await,
        }
    }

    /// The JSON schema of a page of these records, or of their summary
    pub fn schema(&self, summary: bool) -> Schema {
        if summary {
            return schema_for!(ViewSummary);
        }
        match self {
            Self::Assets => schema_for!(ViewPage<Asset>),
            Self::Campaigns => schema_for!(ViewPage<Campaign>),
            Self::Licenses => schema_for!(ViewPage<License>),
            Self::Revenue => schema_for!(ViewPage<RevenueRecord>),
            Self::Tokens => schema_for!(ViewPage<Token>),
        }
    }
}

async fn load<R: DeserializeOwned + Send>(
    source: &PathOrStd,
    latency: Option<Duration>,
) -> Result<Vec<R>, CatalogError> {
    Simulated::new(JsonCatalog::new(source.clone()), latency)
        .load()
        .await
}

async fn print_page<R>(
    io: &IOArgs,
    latency: Option<Duration>,
    criteria: &Criteria,
    request: PageRequest,
) -> anyhow::Result<()>
where
    R: Listable + Serialize + DeserializeOwned + Send,
{
    let records = load::<R>(&io.input, latency).await?;
    let page = derive_page(&records, criteria, request);
    emit(&io.output, &page)
}

async fn print_summary<R>(
    io: &IOArgs,
    latency: Option<Duration>,
    criteria: &Criteria,
) -> anyhow::Result<()>
where
    R: Listable + DeserializeOwned + Send,
{
    let records = load::<R>(&io.input, latency).await?;
    let summary = summarize(derive_view(&records, criteria));
    emit(&io.output, &summary)
}

pub(crate) fn emit<T: Serialize>(output: &PathOrStd, value: &T) -> anyhow::Result<()> {
    let mut output = output.write()?;
    serde_json::to_writer_pretty(&mut output, value)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
