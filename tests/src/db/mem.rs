use crate::Setup;

use pivot::{
    driver::{
        operation::{Attach, Detach, QueryPivot, SavePivot, UpdatePivot},
        Driver, Operation, Response,
    },
    ids_with_attributes,
    schema::BelongsToMany,
    Attributes, Error, Id, PivotRow, Result, Value,
};
use pivot_core::async_trait;

use std::sync::{Arc, Mutex};

/// Pivot table kept in memory.
///
/// Update statements report the number of rows whose values changed, the
/// way MySQL reports affected rows.
#[derive(Debug)]
pub struct MemDriver {
    schema: BelongsToMany,
    parent_key: Id,
    store: Arc<Mutex<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    rows: Vec<PivotRow>,
}

/// Raised when attaching a record that is already attached.
#[derive(Debug)]
pub struct DuplicatePivot {
    pub related: Id,
}

impl std::error::Error for DuplicatePivot {}

impl std::fmt::Display for DuplicatePivot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "duplicate pivot row for related key {}", self.related)
    }
}

impl MemDriver {
    fn new(schema: BelongsToMany, parent_key: Id, store: Arc<Mutex<Store>>) -> Self {
        Self {
            schema,
            parent_key,
            store,
        }
    }

    fn owns(&self, row: &PivotRow) -> bool {
        self.key_matches(row, &self.schema.foreign_pivot_key, &self.parent_key)
    }

    fn key_matches(&self, row: &PivotRow, column: &str, id: &Id) -> bool {
        row.get(column)
            .is_some_and(|value| value.is_equivalent(&id.to_value()))
    }

    fn related_in(&self, row: &PivotRow, ids: &[Id]) -> bool {
        ids.iter()
            .any(|id| self.key_matches(row, &self.schema.related_pivot_key, id))
    }

    fn filtered(&self, row: &PivotRow) -> bool {
        self.owns(row) && self.schema.pivot_filters.iter().all(|f| f.matches(row))
    }

    fn timestamps(&self, attributes: &mut Attributes, created: bool) {
        let now = Value::from(jiff::Timestamp::now());

        if created && self.schema.tracks_created_at() {
            attributes.insert(self.schema.created_at.clone(), now.clone());
        }

        if self.schema.tracks_updated_at() {
            attributes.insert(self.schema.updated_at.clone(), now);
        }
    }

    fn attach(&self, op: Attach) -> Result<Response> {
        let ids = ids_with_attributes(&op.ids, &op.attributes);
        let mut store = self.store.lock().unwrap();

        for (related, _) in ids.iter() {
            let exists = store.rows.iter().any(|row| {
                self.owns(row) && self.key_matches(row, &self.schema.related_pivot_key, related)
            });

            if exists {
                return Err(Error::driver(DuplicatePivot {
                    related: related.clone(),
                }));
            }
        }

        for (related, attributes) in ids.iter() {
            let mut row = Attributes::new();
            row.insert(self.schema.foreign_pivot_key.clone(), &self.parent_key);
            row.insert(self.schema.related_pivot_key.clone(), related);
            row.extend(attributes.clone());
            self.timestamps(&mut row, true);

            store.rows.push(PivotRow::from_stored(row));
        }

        Ok(Response::count(ids.len() as u64))
    }

    fn detach(&self, op: Detach) -> Result<Response> {
        let mut store = self.store.lock().unwrap();

        let ids = op
            .ids
            .as_ref()
            .map(|input| ids_with_attributes(input, &Attributes::new()).ids());

        if ids.as_ref().is_some_and(Vec::is_empty) {
            return Ok(Response::count(0));
        }

        let before = store.rows.len();

        match &ids {
            Some(ids) => store
                .rows
                .retain(|row| !(self.filtered(row) && self.related_in(row, ids))),
            None => store.rows.retain(|row| !self.filtered(row)),
        }

        let detached = before - store.rows.len();

        Ok(Response::count(detached as u64))
    }

    fn query_related_ids(&self) -> Response {
        let store = self.store.lock().unwrap();

        Response::ids(
            store
                .rows
                .iter()
                .filter(|row| self.filtered(row))
                .filter_map(|row| row.id(&self.schema.related_pivot_key))
                .collect(),
        )
    }

    fn query_pivot(&self, op: QueryPivot) -> Response {
        let store = self.store.lock().unwrap();

        Response::values(
            store
                .rows
                .iter()
                .filter(|row| self.filtered(row) && self.related_in(row, &op.ids))
                .map(|row| PivotRow::from_stored(row.attributes().clone()))
                .collect(),
        )
    }

    fn update_pivot(&self, op: UpdatePivot) -> Response {
        let mut store = self.store.lock().unwrap();
        let mut changed = 0;

        for row in store.rows.iter_mut() {
            if !(self.filtered(row) && self.related_in(row, &op.ids)) {
                continue;
            }

            if row.would_change(&op.assignments) {
                changed += 1;
            }

            row.fill(&op.assignments).sync_original();
        }

        Response::count(changed)
    }

    fn load_pivots(&self) -> Response {
        let store = self.store.lock().unwrap();

        Response::values(
            store
                .rows
                .iter()
                .filter(|row| self.owns(row))
                .map(|row| PivotRow::from_stored(row.attributes().clone()))
                .collect(),
        )
    }

    fn save_pivot(&self, op: SavePivot) -> Response {
        let mut store = self.store.lock().unwrap();

        let existing = store.rows.iter().position(|row| {
            self.owns(row) && self.key_matches(row, &self.schema.related_pivot_key, &op.related)
        });

        match existing {
            Some(index) => {
                let mut attributes = op.attributes;
                if op.timestamps {
                    self.timestamps(&mut attributes, false);
                }
                store.rows[index].fill(&attributes).sync_original();
            }
            None => {
                let mut row = Attributes::new();
                row.insert(self.schema.foreign_pivot_key.clone(), &self.parent_key);
                row.insert(self.schema.related_pivot_key.clone(), &op.related);
                row.extend(op.attributes);
                if op.timestamps {
                    self.timestamps(&mut row, true);
                }
                store.rows.push(PivotRow::from_stored(row));
            }
        }

        Response::count(1)
    }
}

#[async_trait]
impl Driver for MemDriver {
    fn schema(&self) -> &BelongsToMany {
        &self.schema
    }

    fn parent_key(&self) -> &Id {
        &self.parent_key
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        match op {
            Operation::Attach(op) => self.attach(op),
            Operation::Detach(op) => self.detach(op),
            Operation::QueryRelatedIds => Ok(self.query_related_ids()),
            Operation::QueryPivot(op) => Ok(self.query_pivot(op)),
            Operation::UpdatePivot(op) => Ok(self.update_pivot(op)),
            Operation::LoadPivots => Ok(self.load_pivots()),
            Operation::SavePivot(op) => Ok(self.save_pivot(op)),
            Operation::Touch => Ok(Response::count(1)),
        }
    }
}

/// Every relation connected through the same `SetupMem` shares one pivot
/// table, so owners can see each other's rows.
pub struct SetupMem {
    store: Arc<Mutex<Store>>,
}

impl SetupMem {
    pub fn new() -> Self {
        Self {
            store: Arc::default(),
        }
    }
}

impl Default for SetupMem {
    fn default() -> Self {
        Self::new()
    }
}

impl Setup for SetupMem {
    fn connect(&self, schema: BelongsToMany, parent_key: Id) -> Box<dyn Driver> {
        Box::new(MemDriver::new(schema, parent_key, self.store.clone()))
    }
}
