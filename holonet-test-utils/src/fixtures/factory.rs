//! Factory functions for request payloads.
//!
//! Pure functions returning complete JSON bodies for the create endpoints. Tests remove or
//! override keys to build invalid payloads.

use serde_json::{json, Value};

/// Body for `POST /user` with the email `{username}@holonet.test`.
pub fn user_payload(username: &str) -> Value {
    json!({
        "username": username,
        "email": format!("{}@holonet.test", username),
        "password": "use the force",
    })
}

/// Body for `POST /planet`.
pub fn planet_payload(name: &str) -> Value {
    json!({
        "name": name,
        "population": 200000,
        "terrain": "desert",
        "climate": "arid",
        "orbital_period": 304.0,
        "rotation_period": 23.0,
        "diameter": 10465.0,
        "type": "terrestrial",
    })
}

/// Body for `POST /character`.
pub fn character_payload(name: &str) -> Value {
    json!({
        "name": name,
        "gender": "female",
        "hair_color": "brown",
        "eye_color": "brown",
        "birth_year": "19BBY",
        "height": 150.0,
        "skin_color": "light",
        "type": "human",
    })
}

/// Body for `POST /favorite`.
pub fn favorite_payload(user_id: i32, kind: &str, favorite_id: i32) -> Value {
    json!({
        "user_id": user_id,
        "type": kind,
        "favorite_id": favorite_id,
    })
}

/// Returns `payload` without `key`.
pub fn without(mut payload: Value, key: &str) -> Value {
    if let Some(object) = payload.as_object_mut() {
        object.remove(key);
    }

    payload
}
