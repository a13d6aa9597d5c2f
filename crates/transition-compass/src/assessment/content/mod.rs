//! Static assessment content: question pools, narrative text, classifier tables, and the
//! action/technique catalogs.
//!
//! Content is loaded once at startup and treated as read-only afterwards. The standard
//! catalog is embedded in the crate; a content directory with the same file names can
//! replace it.

mod csv_catalog;

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::classify::{ArchetypeTable, FailurePattern};
use super::config::AssessmentVariant;
use super::insights::InsightCatalog;
use super::questions::QuestionBank;
use super::recommend::RecommendationCatalog;
use super::validation::CatalogValidationError;

pub const CONTENT_FILE: &str = "content.json";
pub const ACTIONS_FILE: &str = "actions.csv";
pub const TECHNIQUES_FILE: &str = "techniques.csv";

const STANDARD_CONTENT: &str = include_str!("standard/content.json");
const STANDARD_ACTIONS: &str = include_str!("standard/actions.csv");
const STANDARD_TECHNIQUES: &str = include_str!("standard/techniques.csv");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid content document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {catalog} catalog: {source}")]
    Csv {
        catalog: &'static str,
        source: csv::Error,
    },
    #[error("{catalog} entry {entry} names unknown domain '{value}'")]
    UnknownDomain {
        catalog: &'static str,
        entry: String,
        value: String,
    },
}

#[derive(Debug, Deserialize)]
struct ContentDocument {
    questions: QuestionBank,
    #[serde(default)]
    insights: InsightCatalog,
    #[serde(default)]
    archetypes: ArchetypeTable,
    #[serde(default)]
    failure_patterns: Vec<FailurePattern>,
}

/// Every static table the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentCatalog {
    pub questions: QuestionBank,
    pub insights: InsightCatalog,
    pub archetypes: ArchetypeTable,
    pub failure_patterns: Vec<FailurePattern>,
    pub actions: RecommendationCatalog,
    pub techniques: RecommendationCatalog,
}

impl ContentCatalog {
    /// The catalog shipped with the crate.
    pub fn standard() -> Result<Self, ContentError> {
        Self::from_readers(
            Cursor::new(STANDARD_CONTENT),
            Cursor::new(STANDARD_ACTIONS),
            Cursor::new(STANDARD_TECHNIQUES),
        )
    }

    /// Load `content.json`, `actions.csv`, and `techniques.csv` from `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ContentError> {
        let dir = dir.as_ref();
        debug!(dir = %dir.display(), "loading assessment content");
        Self::from_readers(
            open(dir.join(CONTENT_FILE))?,
            open(dir.join(ACTIONS_FILE))?,
            open(dir.join(TECHNIQUES_FILE))?,
        )
    }

    pub fn from_readers<C, A, T>(content: C, actions: A, techniques: T) -> Result<Self, ContentError>
    where
        C: Read,
        A: Read,
        T: Read,
    {
        let document: ContentDocument = serde_json::from_reader(content)?;
        let actions = csv_catalog::parse_catalog("actions", actions)?;
        let techniques = csv_catalog::parse_catalog("techniques", techniques)?;

        Ok(Self {
            questions: document.questions,
            insights: document.insights,
            archetypes: document.archetypes,
            failure_patterns: document.failure_patterns,
            actions,
            techniques,
        })
    }

    /// Check the catalog against a variant before it serves any submission.
    pub fn validate(&self, variant: &AssessmentVariant) -> Result<(), CatalogValidationError> {
        let scoring = &variant.scoring;
        scoring.validate()?;

        for domain in scoring.domains.iter() {
            if self.questions.universal(domain).is_empty() {
                return Err(CatalogValidationError::MissingUniversalPool(domain));
            }
        }

        self.questions.validate(scoring.max_option_score)?;
        for pattern in &self.failure_patterns {
            pattern.validate()?;
        }
        self.actions.validate("actions")?;
        self.techniques.validate("techniques")?;
        Ok(())
    }
}

fn open(path: PathBuf) -> Result<File, ContentError> {
    File::open(&path).map_err(|source| ContentError::Io { path, source })
}
