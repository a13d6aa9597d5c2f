use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::super::domain::{BilingualText, Domain};
use super::super::recommend::{CatalogEntry, RecommendationCatalog};
use super::ContentError;

/// Parse `id,domains,title_en,title_es,detail_en,detail_es` rows. `domains` is a
/// pipe-separated list of domain keys.
pub(crate) fn parse_catalog<R: Read>(
    catalog: &'static str,
    reader: R,
) -> Result<RecommendationCatalog, ContentError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for record in csv_reader.deserialize::<CatalogRow>() {
        let row = record.map_err(|source| ContentError::Csv { catalog, source })?;
        entries.push(row.into_entry(catalog)?);
    }

    Ok(RecommendationCatalog::new(entries))
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    domains: String,
    title_en: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    title_es: Option<String>,
    #[serde(default)]
    detail_en: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    detail_es: Option<String>,
}

impl CatalogRow {
    fn into_entry(self, catalog: &'static str) -> Result<CatalogEntry, ContentError> {
        let mut domains = Vec::new();
        for key in self.domains.split('|').filter(|key| !key.trim().is_empty()) {
            let domain = Domain::from_key(key).ok_or_else(|| ContentError::UnknownDomain {
                catalog,
                entry: self.id.clone(),
                value: key.trim().to_string(),
            })?;
            if !domains.contains(&domain) {
                domains.push(domain);
            }
        }

        // Rows without a Spanish translation reuse the English text.
        let title_es = self.title_es.unwrap_or_else(|| self.title_en.clone());
        let detail_es = self.detail_es.unwrap_or_else(|| self.detail_en.clone());

        Ok(CatalogEntry {
            id: self.id,
            domains,
            title: BilingualText::new(self.title_en, title_es),
            detail: BilingualText::new(self.detail_en, detail_es),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
