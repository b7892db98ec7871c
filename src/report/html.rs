use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::report::{PathwaySection, ReportData};

pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/report.html");

#[derive(Serialize)]
struct TemplateContext<'a> {
    #[serde(rename = "reportName")]
    report_name: &'a str,
    #[serde(rename = "showKEGG")]
    show_kegg: bool,
    #[serde(flatten)]
    pathways: Option<&'a PathwaySection>,
}

pub fn render_report_html(template: &str, data: &ReportData) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    // Script-bound values are escaped for their string context already.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template("report", template)?;

    let ctx = TemplateContext {
        report_name: &data.report_name,
        show_kegg: data.show_pathways(),
        pathways: data.pathways.as_ref(),
    };
    env.get_template("report")?.render(&ctx)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
