//! UI Components
//!
//! Leptos components mounted into the page's anchor elements.

mod particle_field;
mod reasons_accordion;
mod wishes_list;
mod game_board;

pub use particle_field::{ParticleField, ParticleKind};
pub use reasons_accordion::ReasonsAccordion;
pub use wishes_list::WishesList;
pub use game_board::GameBoard;
