// In memory implementation of the PersonStore port.
//
// All operations take the lock for their whole duration, so mutations never interleave and
// `list` always clones a consistent snapshot.

use crate::modules::persons::core::person::{Person, PersonFields};
use crate::shared::infrastructure::person_store::{PersonStore, StoreError};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryPersonStore {
    persons: RwLock<Vec<Person>>,
    is_offline: bool,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_persons(persons: Vec<Person>) -> Self {
        Self {
            persons: RwLock::new(persons),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Person store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn list(&self) -> Result<Vec<Person>, StoreError> {
        self.ensure_online()?;
        Ok(self.persons.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Person>, StoreError> {
        self.ensure_online()?;
        let guard = self.persons.read().await;
        Ok(guard.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, fields: PersonFields) -> Result<Person, StoreError> {
        self.ensure_online()?;
        let person = Person::from_fields(Uuid::new_v4().to_string(), fields);
        self.persons.write().await.push(person.clone());
        Ok(person)
    }

    async fn replace(&self, id: &str, fields: PersonFields) -> Result<Option<Person>, StoreError> {
        self.ensure_online()?;
        let mut guard = self.persons.write().await;
        let Some(slot) = guard.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        *slot = Person::from_fields(id, fields);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Person>, StoreError> {
        self.ensure_online()?;
        let mut guard = self.persons.write().await;
        let index = guard.iter().position(|p| p.id == id);
        Ok(index.map(|index| guard.remove(index)))
    }
}
