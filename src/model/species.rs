use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Species {
    Human,
    Mouse,
    Yeast,
    Rat,
}

impl Species {
    pub fn msigdb_name(self) -> &'static str {
        match self {
            Species::Human => "Homo sapiens",
            Species::Mouse => "Mus musculus",
            Species::Yeast => "Saccharomyces cerevisiae",
            Species::Rat => "Rattus norvegicus",
        }
    }

    pub fn go_annotation_db(self) -> &'static str {
        match self {
            Species::Human => "org.Hs.eg.db",
            Species::Mouse => "org.Mm.eg.db",
            Species::Yeast => "org.Sc.sgd.db",
            Species::Rat => "org.Rn.eg.db",
        }
    }

    /// KEGG organism code; also the prefix of gene tokens in diagram entries.
    pub fn kegg_code(self) -> &'static str {
        match self {
            Species::Human => "hsa",
            Species::Mouse => "mmu",
            Species::Yeast => "sce",
            Species::Rat => "rno",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/species.rs"]
mod tests;
