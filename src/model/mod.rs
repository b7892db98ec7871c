pub mod annotation;
pub mod pathway;
pub mod species;

use std::collections::BTreeMap;

/// Gene symbol -> (log2 fold-change, p-value, adjusted p-value).
pub type ContrastTable = BTreeMap<String, [String; 3]>;

/// Pathway id -> (Entrez ids, gene names).
pub type GeneSetMapping = BTreeMap<String, (Vec<String>, Vec<String>)>;
