use dialog2rasa_core::buffer::ContentBuffers;
use dialog2rasa_core::config::ConversionContext;
use dialog2rasa_core::diagnostics::Diagnostics;
use dialog2rasa_core::model::{EntityClass, EntryRecord};
use dialog2rasa_core::storage::read_json;

use super::Converter;
use crate::discover::{entity_files, file_stem};
use crate::error::ConvertError;
use crate::render;
use crate::report::ConversionReport;

/// Splits entity entries across synonym blocks, lookup tables and
/// compound-entity review files.
pub struct EntityConverter<'a> {
    ctx: &'a ConversionContext,
    diagnostics: &'a dyn Diagnostics,
}

/// Per-category accumulators, kept apart until every entity file is read.
#[derive(Default)]
struct EntityBuffers {
    synonyms: ContentBuffers,
    lookups: ContentBuffers,
    compounds: ContentBuffers,
}

impl<'a> EntityConverter<'a> {
    pub fn new(ctx: &'a ConversionContext, diagnostics: &'a dyn Diagnostics) -> Self {
        Self { ctx, diagnostics }
    }

    fn add_entry(
        &self,
        out: &mut EntityBuffers,
        entity: &str,
        entry: &EntryRecord,
        report: &mut ConversionReport,
    ) {
        match entry.classify() {
            EntityClass::Compound => {
                let path = self.ctx.compound_file(entity);
                if out.compounds.init_once(&path, &render::compound_header()) {
                    self.diagnostics.warn(&format!(
                        "Manual adaptation needed for compound entity '{entity}' in Rasa. \
                         See file: '__compound__{entity}.yml'."
                    ));
                    report.compound_entities += 1;
                }
                out.compounds.append(path, &render::synonym_block(entry));
            }
            EntityClass::Synonym => {
                out.synonyms
                    .append(&self.ctx.nlu_file, &render::synonym_block(entry));
                report.synonym_blocks += 1;
            }
            EntityClass::Lookup => {
                let path = self.ctx.lookup_file(entity);
                if !out.lookups.contains(&path) {
                    report.lookup_tables += 1;
                }
                out.lookups.append(path, &render::lookup_lines(entry));
            }
        }
    }
}

impl Converter for EntityConverter<'_> {
    fn name(&self) -> &'static str {
        "entity"
    }

    fn convert(&self, report: &mut ConversionReport) -> Result<ContentBuffers, ConvertError> {
        let mut out = EntityBuffers::default();

        for file in entity_files(self.ctx)? {
            let entity = self.ctx.entity_name(&file_stem(&file));
            let entries: Vec<EntryRecord> = read_json(&file)?;
            self.diagnostics.debug(&format!(
                "Entity '{entity}': {} entries",
                entries.len()
            ));
            for entry in &entries {
                self.add_entry(&mut out, &entity, entry, report);
            }
        }

        let mut buffers = out.synonyms;
        buffers.extend(out.lookups);
        buffers.extend(out.compounds);

        self.diagnostics.debug(&format!(
            "The entity files have been prepared in dir '{}'.",
            self.ctx.nlu_dir.display()
        ));
        Ok(buffers)
    }
}
