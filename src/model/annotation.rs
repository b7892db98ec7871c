use serde::Serialize;

/// Top-left anchored rectangle in report-image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedGene {
    pub name: String,
    pub core: bool,
}

/// Hoverable region over one diagram entry. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneAnnotationGroup {
    pub view: ViewRect,
    pub core: bool,
    pub genes: Vec<AnnotatedGene>,
}

/// Insertion-ordered gene set of a single diagram entry.
#[derive(Debug, Default, Clone)]
pub struct EntryGenes {
    genes: Vec<AnnotatedGene>,
}

impl EntryGenes {
    /// Marks `name` as core, upgrading an existing informational mark.
    pub fn mark_core(&mut self, name: &str) {
        match self.genes.iter_mut().find(|g| g.name == name) {
            Some(existing) => existing.core = true,
            None => self.genes.push(AnnotatedGene {
                name: name.to_string(),
                core: true,
            }),
        }
    }

    /// Adds `name` as informational unless already present.
    pub fn add_informational(&mut self, name: &str) {
        if self.genes.iter().any(|g| g.name == name) {
            return;
        }
        self.genes.push(AnnotatedGene {
            name: name.to_string(),
            core: false,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn into_group(self, view: ViewRect) -> Option<GeneAnnotationGroup> {
        if self.genes.is_empty() {
            return None;
        }
        let core = self.genes.iter().any(|g| g.core);
        Some(GeneAnnotationGroup {
            view,
            core,
            genes: self.genes,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/annotation.rs"]
mod tests;
