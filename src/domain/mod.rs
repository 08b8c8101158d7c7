//! Domain layer - Data model and pure lookups

pub mod id;
pub mod notebook;
pub mod store_data;
pub mod theme;

pub use id::IdGenerator;
pub use notebook::{Note, NoteFields, NotePatch, Notebook};
pub use store_data::StoreData;
pub use theme::Theme;
