use clap::{ArgAction, Parser, Subcommand, ValueEnum, value_parser};
use jobgestion::{
    applications::Status, attachments::Attachment, pagination::DEFAULT_PAGE_SIZE, query::SortKey,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Applications file to use instead of ~/applications.json
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Rows shown per page
    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE as u32, value_parser = value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// More output, repeat for more detail
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Record a new application, dated today
    Add {
        /// Company applied to
        #[arg(long)]
        company: String,

        /// Job title
        #[arg(long)]
        title: String,

        /// Path to the cover letter
        #[arg(long)]
        cover_letter: String,

        /// Path to a screenshot of the application
        #[arg(long)]
        screenshot: String,

        /// Status (pending, accepted, rejected)
        #[arg(long, default_value = "pending")]
        status: Status,

        /// Free text, up to 1500 characters
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Change fields of an application, others keep their value
    Edit {
        /// Position shown by `list`
        number: usize,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        cover_letter: Option<String>,

        #[arg(long)]
        screenshot: Option<String>,

        #[arg(long)]
        status: Option<Status>,

        #[arg(long)]
        comment: Option<String>,
    },
    /// Remove an application
    Remove {
        /// Position shown by `list`
        number: usize,
    },
    /// List applications one page at a time
    List {
        /// Only show companies or titles containing this text
        #[arg(long, short = 's', default_value = "")]
        search: String,

        /// Column to order by
        #[arg(long)]
        sort: Option<SortColumn>,

        /// Order from last to first
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Page to show, starting at 1
        #[arg(long, short = 'p', default_value_t = 1, conflicts_with = "last")]
        page: usize,

        /// Show the last page
        #[arg(long)]
        last: bool,
    },
    /// Show every field of an application
    Show {
        /// Position shown by `list`
        number: usize,
    },
    /// Check an attachment is still on disk and print its path
    Open {
        /// Position shown by `list`
        number: usize,

        which: AttachmentKind,
    },
}

#[derive(ValueEnum, Clone, Copy)]
pub enum SortColumn {
    Date,
    Status,
}

#[derive(ValueEnum, Clone, Copy)]
pub enum AttachmentKind {
    CoverLetter,
    Screenshot,
}

impl From<SortColumn> for SortKey {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Date => SortKey::ApplicationDate,
            SortColumn::Status => SortKey::Status,
        }
    }
}

impl From<AttachmentKind> for Attachment {
    fn from(kind: AttachmentKind) -> Self {
        match kind {
            AttachmentKind::CoverLetter => Attachment::CoverLetter,
            AttachmentKind::Screenshot => Attachment::Screenshot,
        }
    }
}
