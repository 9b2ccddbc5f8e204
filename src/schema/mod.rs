//! Record schema for ingested papers.

mod paper;

pub use paper::{
    Content, ExternalIdentifiers, Metadata, Paper, PaperAnalysis, PaperEngagement, PaperEntry,
    PaperRelations, Tier,
};
