// Schema check for inbound person payloads.
//
// Rules run in declaration order (name, age, hobbies) and the first violation is reported.
// Unknown keys are ignored; nothing is coerced.

use crate::modules::persons::core::person::PersonFields;
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Person must be an object")]
    NotAnObject,

    #[error("Name is required")]
    NameRequired,

    #[error("Age is required")]
    AgeRequired,

    #[error("Age must be a number")]
    AgeNotANumber,

    #[error("Age must be a non-negative number")]
    AgeNegative,

    #[error("Hobbies are required")]
    HobbiesRequired,

    #[error("Hobbies must be an array")]
    HobbiesNotAnArray,
}

pub fn validate_person(payload: &Value) -> Result<PersonFields, ValidationError> {
    let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    let name = validate_name(object)?;
    let age = validate_age(object)?;
    let hobbies = validate_hobbies(object)?;

    Ok(PersonFields { name, age, hobbies })
}

fn validate_name(object: &Map<String, Value>) -> Result<String, ValidationError> {
    match object.get("name") {
        Some(Value::String(name)) if !name.is_empty() => Ok(name.clone()),
        _ => Err(ValidationError::NameRequired),
    }
}

fn validate_age(object: &Map<String, Value>) -> Result<u64, ValidationError> {
    match object.get("age") {
        None => Err(ValidationError::AgeRequired),
        Some(Value::Number(number)) => age_from_number(number),
        Some(_) => Err(ValidationError::AgeNotANumber),
    }
}

fn age_from_number(number: &Number) -> Result<u64, ValidationError> {
    if let Some(age) = number.as_u64() {
        return Ok(age);
    }
    if number.is_i64() {
        return Err(ValidationError::AgeNegative);
    }

    // Floats: only whole values count as integers, and the integer check comes first.
    let value = number.as_f64().ok_or(ValidationError::AgeNotANumber)?;
    if !value.is_finite() || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(ValidationError::AgeNotANumber);
    }
    if value < 0.0 {
        return Err(ValidationError::AgeNegative);
    }
    Ok(value as u64)
}

fn validate_hobbies(object: &Map<String, Value>) -> Result<Vec<String>, ValidationError> {
    let items = match object.get("hobbies") {
        None => return Err(ValidationError::HobbiesRequired),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationError::HobbiesNotAnArray),
    };

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_owned)
                .ok_or(ValidationError::HobbiesNotAnArray)
        })
        .collect()
}
