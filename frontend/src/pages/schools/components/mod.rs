mod cards;
mod form;

pub use cards::SchoolCards;
pub use form::SchoolEditor;
