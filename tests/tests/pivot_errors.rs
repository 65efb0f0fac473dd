use tests::{attrs, roles, tests, PivotTest, Setup};

use pivot::{
    driver::{Driver, Operation, Response},
    schema::BelongsToMany,
    Id, IdsInput, Result,
};
use pivot_core::async_trait;
use pretty_assertions::assert_eq;

/// Answers every operation with a list of ids, whatever shape was expected.
#[derive(Debug)]
struct WrongShape {
    schema: BelongsToMany,
    parent_key: Id,
}

#[async_trait]
impl Driver for WrongShape {
    fn schema(&self) -> &BelongsToMany {
        &self.schema
    }

    fn parent_key(&self) -> &Id {
        &self.parent_key
    }

    async fn exec(&self, _op: Operation) -> Result<Response> {
        Ok(Response::ids(vec![Id::Int(1)]))
    }
}

struct SetupWrongShape;

impl Setup for SetupWrongShape {
    fn connect(&self, schema: BelongsToMany, parent_key: Id) -> Box<dyn Driver> {
        Box::new(WrongShape { schema, parent_key })
    }
}

async fn duplicate_attach_propagates(s: impl Setup) {
    let h = s.setup(roles().build().unwrap(), 1);
    h.seed(3, attrs!()).await;

    let err = h
        .relation
        .attach(IdsInput::list([2, 3]), attrs!(), true)
        .await
        .unwrap_err();

    assert!(err.is_driver());
    assert!(err.to_string().contains("duplicate pivot row"));

    // The before event fired; the after event and the touch did not
    assert_eq!(h.events.names(), ["pivotAttaching"]);
    assert!(h.log.is_empty());
    assert!(h.stored(2).await.is_none());
}

#[test]
fn wrong_response_shape_on_update() {
    PivotTest::new(SetupWrongShape).run_test(|s| async move {
        let h = s.setup(roles().build().unwrap(), 1);

        let err = h
            .relation
            .update_existing_pivot(1, attrs!("foo" => "bar"), false)
            .await
            .unwrap_err();

        assert!(err.is_invalid_result());
        assert_eq!(h.events.names(), ["pivotUpdating"]);
    });
}

#[test]
fn wrong_response_shape_on_detach() {
    PivotTest::new(SetupWrongShape).run_test(|s| async move {
        let h = s.setup(roles().build().unwrap(), 1);

        let err = h.relation.detach(Some(1.into()), false).await.unwrap_err();

        assert!(err.is_invalid_result());
        assert!(h.events.names().is_empty());
    });
}

#[test]
fn invalid_schema_is_rejected() {
    let err = BelongsToMany::builder("roles").build().unwrap_err();
    assert!(err.is_invalid_schema());

    let err = BelongsToMany::builder("roles")
        .keys("user_id", "user_id")
        .build()
        .unwrap_err();
    assert!(err.is_invalid_schema());
}

tests!(duplicate_attach_propagates);
