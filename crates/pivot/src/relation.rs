mod belongs_to_many;
pub use belongs_to_many::BelongsToMany;

mod custom;
mod update;
