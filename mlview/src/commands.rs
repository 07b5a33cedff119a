use super::{IOArgs, PathOrStd};
use clap::Subcommand;
use std::path::PathBuf;

mod filters;
mod trade;
mod view;

pub use filters::{FilterArgs, PageArgs};
pub use trade::replay;
pub use view::RecordKind;
pub(crate) use view::emit;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter, sort and paginate a collection
    View {
        #[command(flatten)]
        io: IOArgs,

        /// The kind of records in the collection
        #[arg(short, long)]
        kind: RecordKind,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Report count, total value and category breakdown of a filtered collection
    Summary {
        #[command(flatten)]
        io: IOArgs,

        /// The kind of records in the collection
        #[arg(short, long)]
        kind: RecordKind,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Replay token marketplace actions against a market state
    Trade {
        #[command(flatten)]
        io: IOArgs,

        /// A JSON file holding the list of actions to apply in order
        #[arg(short, long)]
        actions: PathBuf,
    },

    /// Print the JSON schema of the documents `view` and `summary` write
    Schema {
        /// The kind of records the schema describes
        #[arg(short, long)]
        kind: RecordKind,

        /// Describe the summary document instead of a page
        #[arg(long)]
        summary: bool,

        /// The output file ("-" implies stdout)
        #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
        output: PathOrStd,
    },
}
