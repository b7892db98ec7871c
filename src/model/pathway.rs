use serde::Serialize;

/// One row of the enrichment table. `core_genes[i]` and `core_entrez_ids[i]`
/// always name the same gene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathwayRecord {
    pub id: String,
    pub name: String,
    pub p_value: String,
    pub p_adjusted: String,
    pub enrichment_score: String,
    pub normalized_enrichment_score: String,
    pub set_size: String,
    pub core_genes: Vec<String>,
    pub core_entrez_ids: Vec<String>,
}

impl PathwayRecord {
    pub fn leading_edge_size(&self) -> usize {
        self.core_genes.len()
    }

    pub fn entrez_to_symbol(&self) -> impl Iterator<Item = (&str, &str)> {
        self.core_entrez_ids
            .iter()
            .map(String::as_str)
            .zip(self.core_genes.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayView<'a> {
    pub pathway_id: &'a str,
    pub pathway_name: &'a str,
    pub p_value: &'a str,
    pub p_adjusted: &'a str,
    pub enrichment_score: &'a str,
    pub normalized_enrichment_score: &'a str,
    pub gene_set_size: &'a str,
    pub leading_edge_size: String,
    pub core_enriched_genes: &'a [String],
}

impl<'a> From<&'a PathwayRecord> for PathwayView<'a> {
    fn from(p: &'a PathwayRecord) -> Self {
        PathwayView {
            pathway_id: &p.id,
            pathway_name: &p.name,
            p_value: &p.p_value,
            p_adjusted: &p.p_adjusted,
            enrichment_score: &p.enrichment_score,
            normalized_enrichment_score: &p.normalized_enrichment_score,
            gene_set_size: &p.set_size,
            leading_edge_size: p.leading_edge_size().to_string(),
            core_enriched_genes: &p.core_genes,
        }
    }
}
