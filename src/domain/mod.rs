pub mod category;
pub mod color;
pub mod common;
pub mod transaction;

pub use category::CategoryData;
pub use color::Color;
pub use common::{Amounted, Displayable, NamedEntity};
pub use transaction::Transaction;
