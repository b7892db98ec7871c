use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::model::species::Species;
use crate::pipeline::RunConfig;

#[derive(Debug, Parser)]
#[command(
    name = "kira-pathwayreport",
    version,
    about = "Gene-set enrichment run and interactive KEGG pathway report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Contrast CSV from a differential expression run (.csv or .csv.gz)")]
    pub contrast: PathBuf,

    #[arg(long)]
    pub report_name: String,

    #[arg(long, help = "Output location; results land in <out>/<report name>")]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = Species::Human)]
    pub species: Species,

    #[arg(long, default_value_t = 20, help = "Number of top pathways to display")]
    pub pathways: u32,

    #[arg(long, default_value = ".", help = "Directory the enrichment script runs in")]
    pub work_dir: PathBuf,

    #[arg(long, default_value = "Rscript")]
    pub interpreter: String,

    #[arg(long, default_value = "go_pathway.r")]
    pub script: PathBuf,

    #[arg(long, help = "Gene set file (default: <work-dir>/tempres/genesets.txt)")]
    pub genesets: Option<PathBuf>,

    #[arg(long, help = "Report template overriding the built-in one")]
    pub template: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = false,
        help = "Reuse enrichment outputs already present in the work dir"
    )]
    pub skip_script: bool,
}

impl RunArgs {
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            contrast_csv: self.contrast,
            report_name: self.report_name,
            output_location: self.out,
            species: self.species,
            number_of_pathways: self.pathways,
            work_dir: self.work_dir,
            interpreter: self.interpreter,
            script: self.script,
            genesets: self.genesets,
            template: self.template,
            skip_script: self.skip_script,
        }
    }
}
