use dialog2rasa_convert::ConversionReport;

use super::OutputFormat;

pub fn format_report(report: &ConversionReport, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Text => format_report_text(report),
    }
}

fn format_report_text(report: &ConversionReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Converted agent '{}' ({})\n",
        report.agent_name, report.language
    ));
    out.push_str(&format!("Output:     {}\n", report.output_dir.display()));
    out.push_str(&format!(
        "Intents:    {} ({} examples)\n",
        report.intents, report.examples
    ));
    out.push_str(&format!("Responses:  {}\n", report.response_templates));
    out.push_str(&format!("Synonyms:   {}\n", report.synonym_blocks));
    out.push_str(&format!("Lookups:    {}\n", report.lookup_tables));
    out.push_str(&format!("Compounds:  {}\n", report.compound_entities));
    out.push_str(&format!("Slots:      {}\n", report.slots));

    out.push_str("\n--- Files ---\n");
    for path in &report.files {
        let shown = path.strip_prefix(&report.output_dir).unwrap_or(path);
        out.push_str(&format!("  {}\n", shown.display()));
    }

    if report.needs_review() {
        out.push_str("\nManual review needed for compound entities and slot mappings.\n");
    }
    out
}
