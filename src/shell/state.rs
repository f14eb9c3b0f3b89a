use crate::modules::persons::core::person::Person;
use crate::modules::persons::use_cases::create_person::handler::CreatePersonHandler;
use crate::modules::persons::use_cases::replace_person::handler::ReplacePersonHandler;
use crate::shared::infrastructure::person_store::PersonStore;
use crate::shared::infrastructure::person_store::in_memory::InMemoryPersonStore;
use crate::shell::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PersonStore>,
    pub create_handler: Arc<CreatePersonHandler<dyn PersonStore>>,
    pub replace_handler: Arc<ReplacePersonHandler<dyn PersonStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self {
            create_handler: Arc::new(CreatePersonHandler::new(store.clone())),
            replace_handler: Arc::new(ReplacePersonHandler::new(store.clone())),
            store,
        }
    }

    /// State backed by a fresh in-memory store, seeded according to `config`.
    pub fn in_memory(config: &AppConfig) -> Self {
        let seed = if config.seed_sample_person {
            vec![sample_person()]
        } else {
            Vec::new()
        };
        Self::new(Arc::new(InMemoryPersonStore::with_persons(seed)))
    }
}

pub fn sample_person() -> Person {
    Person {
        id: "1".to_string(),
        name: "Sam".to_string(),
        age: 26,
        hobbies: Vec::new(),
    }
}
