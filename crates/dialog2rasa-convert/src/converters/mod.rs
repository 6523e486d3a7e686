pub mod entity;
pub mod intent;
pub mod slot;
pub mod utterance;

use dialog2rasa_core::buffer::ContentBuffers;

use crate::error::ConvertError;
use crate::report::ConversionReport;

pub use entity::EntityConverter;
pub use intent::IntentConverter;
pub use slot::SlotConverter;
pub use utterance::UtteranceConverter;

/// One phase of a conversion run.
///
/// A converter reads its sources, renders Rasa text into a fresh
/// accumulator and hands it back unflushed.
pub trait Converter {
    fn name(&self) -> &'static str;

    fn convert(&self, report: &mut ConversionReport) -> Result<ContentBuffers, ConvertError>;
}
