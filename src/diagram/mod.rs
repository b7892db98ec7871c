use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node, ParsingOptions};

use crate::input::image::image_width;
use crate::input::{InputError, ensure_exists};
use crate::model::annotation::{EntryGenes, GeneAnnotationGroup};
use crate::model::pathway::PathwayRecord;

pub mod geometry;

use geometry::{NativeBox, scale_factor, to_view_rect};

pub const IMAGE_SUFFIX: &str = ".pathview.png";
const XML_SUFFIX: &str = ".xml";
const TRUNCATION_MARK: &str = "...";

pub fn diagram_image_path(work_dir: &Path, pathway_id: &str) -> PathBuf {
    work_dir.join(format!("{pathway_id}{IMAGE_SUFFIX}"))
}

/// `hsa04110.pathview.png` -> `hsa04110.xml`.
pub fn sidecar_xml_path(image_path: &Path) -> PathBuf {
    let stem = image_path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(IMAGE_SUFFIX));
    match stem {
        Some(stem) => image_path.with_file_name(format!("{stem}{XML_SUFFIX}")),
        None => image_path.with_extension("xml"),
    }
}

/// Everything an extraction needs besides the diagram files themselves.
#[derive(Debug, Clone, Copy)]
pub struct DiagramContext<'a> {
    pub contrast_genes: &'a BTreeSet<&'a str>,
    pub kegg_code: &'a str,
}

pub fn extract_gene_groups(
    pathway: &PathwayRecord,
    ctx: &DiagramContext<'_>,
    image_path: &Path,
) -> Result<Vec<GeneAnnotationGroup>, InputError> {
    let width = image_width(image_path)?;
    let xml_path = sidecar_xml_path(image_path);
    ensure_exists(&xml_path)?;
    let text = std::fs::read_to_string(&xml_path)?;
    let groups = extract_from_xml(pathway, ctx, width, &text).map_err(|source| {
        InputError::Xml {
            path: xml_path.clone(),
            source,
        }
    })?;
    tracing::debug!(
        pathway = %pathway.id,
        groups = groups.len(),
        "extracted diagram annotations"
    );
    Ok(groups)
}

/// Correlates KGML gene entries with the pathway's core genes and the
/// contrast genes. Output follows document order.
pub fn extract_from_xml(
    pathway: &PathwayRecord,
    ctx: &DiagramContext<'_>,
    image_width: u32,
    xml: &str,
) -> Result<Vec<GeneAnnotationGroup>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;

    let entrez_to_symbol: HashMap<&str, &str> = pathway.entrez_to_symbol().collect();
    let prefix = format!("{}:", ctx.kegg_code);
    let scale = scale_factor(image_width);

    let mut groups = Vec::new();
    for entry in doc.descendants().filter(|n| n.has_tag_name("entry")) {
        if entry.attribute("type") != Some("gene") {
            continue;
        }
        let Some(raw_names) = entry.attribute("name") else {
            continue;
        };
        let Some(graphics) = entry.children().find(|n| n.has_tag_name("graphics")) else {
            continue;
        };

        let mut genes = EntryGenes::default();
        for token in raw_names.split(' ') {
            let Some(entrez_id) = token.strip_prefix(prefix.as_str()) else {
                continue;
            };
            if let Some(symbol) = entrez_to_symbol.get(entrez_id) {
                genes.mark_core(symbol);
            }
        }

        if let Some(label) = graphics.attribute("name") {
            for symbol in label_symbols(label) {
                if ctx.contrast_genes.contains(symbol) {
                    genes.add_informational(symbol);
                }
            }
        }

        if genes.is_empty() {
            continue;
        }
        let Some(native) = native_box(&graphics) else {
            continue;
        };
        if let Some(group) = genes.into_group(to_view_rect(native, scale)) {
            groups.push(group);
        }
    }
    Ok(groups)
}

/// Symbols of a graphics label such as `"TP53, P53, LFS1..."`.
fn label_symbols(label: &str) -> impl Iterator<Item = &str> {
    let label = label.strip_suffix(TRUNCATION_MARK).unwrap_or(label);
    label.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Box geometry of a graphics node; `None` for line shapes or when a
/// coordinate is absent or non-numeric.
fn native_box(graphics: &Node<'_, '_>) -> Option<NativeBox> {
    if graphics.attribute("type") == Some("line") {
        return None;
    }
    let attr = |name: &str| graphics.attribute(name)?.trim().parse::<f64>().ok();
    Some(NativeBox {
        x: attr("x")?,
        y: attr("y")?,
        width: attr("width")?,
        height: attr("height")?,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/diagram/tests.rs"]
mod tests;
