pub mod entity;
pub mod intent;
pub mod response;

pub use entity::{EntityClass, EntryRecord};
pub use intent::{ExampleRecord, Fragment};
pub use response::{Message, Response, ResponseFile, Speech};
