//! Load components, load cases and positional queries

mod component;
mod load_case;
mod query;

pub use component::LoadComponent;
pub use load_case::{CaseId, LoadCase, LoadRow, ROW_WIDTH};
pub use query::PositionQuery;
