use crate::input::contrast::parse_contrast_csv;
use crate::input::pathways::parse_pathway_table;
use crate::model::ContrastTable;
use crate::model::pathway::PathwayRecord;
use crate::pipeline::{PipelineError, RunConfig, WorkLayout};

#[derive(Debug, Clone)]
pub struct EnrichmentTables {
    pub pathways: Vec<PathwayRecord>,
    pub contrast: ContrastTable,
}

/// `None` when the script produced no pathway table: the report is then
/// rendered without its pathway section.
#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub tables: Option<EnrichmentTables>,
}

pub fn run_stage2(config: &RunConfig, layout: &WorkLayout) -> Result<Stage2Output, PipelineError> {
    let table_path = layout.pathway_table();
    let pathways = match parse_pathway_table(&table_path) {
        Ok(p) => p,
        Err(e) if e.is_not_found() => {
            tracing::warn!(
                path = %table_path.display(),
                "no pathway table; report will omit the pathway section"
            );
            return Ok(Stage2Output { tables: None });
        }
        Err(e) => return Err(e.into()),
    };
    let contrast = parse_contrast_csv(&config.contrast_csv)?;
    Ok(Stage2Output {
        tables: Some(EnrichmentTables { pathways, contrast }),
    })
}
