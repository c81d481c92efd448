pub mod element;
pub mod profile;
pub mod recommendation;

pub use element::{Element, ElementTheme};
pub use profile::{BirthProfile, Gender};
pub use recommendation::StockPick;
