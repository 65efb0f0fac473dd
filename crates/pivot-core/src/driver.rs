mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, schema::BelongsToMany, stmt::Id};

use std::{fmt::Debug, sync::Arc};

/// The underlying many-to-many relation.
///
/// A driver owns the database session and executes pivot primitives for one
/// owning record. Operations run one at a time, in the order they are
/// issued; the driver decides whether they share a transaction.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The relation descriptor.
    fn schema(&self) -> &BelongsToMany;

    /// The owning record's current key.
    fn parent_key(&self) -> &Id;

    /// Execute a pivot primitive.
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}

#[async_trait]
impl<T: Driver + ?Sized> Driver for Arc<T> {
    fn schema(&self) -> &BelongsToMany {
        (**self).schema()
    }

    fn parent_key(&self) -> &Id {
        (**self).parent_key()
    }

    async fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op).await
    }
}

#[async_trait]
impl<T: Driver + ?Sized> Driver for Box<T> {
    fn schema(&self) -> &BelongsToMany {
        (**self).schema()
    }

    fn parent_key(&self) -> &Id {
        (**self).parent_key()
    }

    async fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op).await
    }
}
