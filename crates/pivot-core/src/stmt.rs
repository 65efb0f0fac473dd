mod attributes;
pub use attributes::Attributes;

mod id;
pub use id::Id;

mod ids_input;
pub use ids_input::{IdEntry, IdsInput, Model};

mod ids_with_attributes;
pub use ids_with_attributes::IdsWithAttributes;

mod pivot_row;
pub use pivot_row::PivotRow;

mod value;
pub use value::Value;
