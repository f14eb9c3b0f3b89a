use crate::modules::persons::core::person::Person;
use crate::modules::persons::core::validate::validate_person;
use crate::modules::persons::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::person_store::PersonStore;
use serde_json::Value;
use std::sync::Arc;

pub struct CreatePersonHandler<TStore>
where
    TStore: PersonStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreatePersonHandler<TStore>
where
    TStore: PersonStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, payload: &Value) -> Result<Person, ApplicationError> {
        let fields = validate_person(payload)?;
        let person = self.store.create(fields).await?;
        tracing::info!(person_id = %person.id, "person created");
        Ok(person)
    }
}
