//! Paper record types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Collection priority / quality tier for an ingested paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Award-level conference papers.
    P0,
    /// High community-interest papers.
    P1,
    /// Papers manually marked important by the user.
    P2,
}

/// Identifiers the paper carries in external systems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalIdentifiers {
    /// arXiv id without version suffix (e.g., "2301.12345").
    pub arxiv: Option<String>,
    /// DOI.
    pub doi: Option<String>,
    /// ACL Anthology id.
    pub acl: Option<String>,
}

/// Bibliographic metadata merged from the fetch sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Paper title.
    pub title: String,

    /// Author names in listed order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Publication year.
    pub year: Option<i32>,

    /// Full publication timestamp when the source provides one.
    pub publish_date: Option<DateTime<Utc>>,

    /// Venue (ACL, NeurIPS, arXiv, ...).
    pub venue: Option<String>,

    /// Paper type: conference, journal, preprint.
    pub paper_type: Option<String>,

    /// Which fetch source produced this record (arxiv / huggingface / manual).
    pub source: String,

    /// Source-specific enrichments that have no dedicated field
    /// (HuggingFace upvotes, GitHub stars, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Textual content and user-curated pointers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Abstract text.
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    /// Section outline, when extracted.
    pub outline: Option<String>,

    /// Keywords, from the source or the user.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// User tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Repo, dataset, or demo links. User-editable.
    #[serde(default)]
    pub resources: Vec<String>,
}

/// Analysis fields filled in after ingestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperAnalysis {
    /// Main contribution and the problem it solves.
    pub contribution: Option<String>,
    /// Novelty relative to prior work.
    pub novelty: Option<String>,
    /// Limitations or open weaknesses.
    pub limitations: Option<String>,
    /// Core theoretical assumptions or experimental premises.
    pub assumptions: Option<String>,
    /// 1-5 rigor score.
    pub rigor_score: Option<u8>,
    /// Relevance to the user's focus areas.
    pub relevance: Option<String>,
}

/// A fully ingested paper record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// Internal id.
    pub id: Uuid,
    /// External identifiers.
    pub identifiers: ExternalIdentifiers,
    /// Bibliographic metadata.
    pub metadata: Metadata,
    /// Content fields.
    pub content: Content,
    /// Analysis fields.
    pub analysis: PaperAnalysis,
}

/// Relations between papers, by internal id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperRelations {
    #[serde(default)]
    pub cites: Vec<Uuid>,
    #[serde(default)]
    pub cited_by: Vec<Uuid>,
    #[serde(default)]
    pub based_on: Vec<Uuid>,
    #[serde(default)]
    pub related: Vec<Uuid>,
}

/// User engagement with a paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperEngagement {
    /// Collection tier.
    pub tier: Tier,
    /// Why the paper entered the collection.
    pub entry_reason: Option<String>,
    /// Context captured at entry time.
    pub context_at_entry: Option<String>,
    /// User rating, 1-5 stars.
    pub rating: Option<u8>,
    /// Whether the user starred the paper.
    #[serde(default)]
    pub starred: bool,
    /// User-defined labels.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Internal ids of attached notes.
    #[serde(default)]
    pub notes: Vec<String>,
}

/// A paper plus its relations and engagement state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperEntry {
    pub paper: Paper,
    pub paper_relations: Option<PaperRelations>,
    pub engagement: Option<PaperEngagement>,
}
