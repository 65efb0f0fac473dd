mod belongs_to_many;
pub use belongs_to_many::BelongsToMany;

mod builder;
pub use builder::Builder;

mod pivot_filter;
pub use pivot_filter::PivotFilter;
