mod selection;
mod selector;
mod view;

pub use selection::Selection;
pub use selector::AtomSelector;
pub use view::{AtomRef, AtomView};
