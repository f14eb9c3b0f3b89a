use crate::modules::persons::core::person::Person;
use crate::modules::persons::core::validate::validate_person;
use crate::modules::persons::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::person_store::PersonStore;
use serde_json::Value;
use std::sync::Arc;

pub struct ReplacePersonHandler<TStore>
where
    TStore: PersonStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ReplacePersonHandler<TStore>
where
    TStore: PersonStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Validation runs before the lookup, so an invalid body for an unknown id is a validation
    /// failure. Any `id` in the payload is ignored in favour of `person_id`.
    pub async fn handle(
        &self,
        person_id: &str,
        payload: &Value,
    ) -> Result<Person, ApplicationError> {
        let fields = validate_person(payload)?;
        let person = self
            .store
            .replace(person_id, fields)
            .await?
            .ok_or(ApplicationError::NotFound)?;
        tracing::info!(person_id = %person.id, "person replaced");
        Ok(person)
    }
}
