//! Payload rules for the mutating garage operations.
//!
//! Checks run in a fixed order and the first violation wins, so the message a
//! caller sees is deterministic. Only checks that need no store access live
//! here; uniqueness and reference resolution happen in the services, after
//! these have passed and before any write.

use serde_json::Value;
use tracing::debug;

use super::domain::{NewVehicle, Payload};
use crate::errors::ServiceError;

/// Keys a registration payload may carry besides the refused `id`.
pub const NEW_VEHICLE_FIELDS: [&str; 5] = ["reg", "make", "model", "owner", "mechanic"];

/// Keys that must not appear when reassigning a vehicle's mechanic, in check order.
pub const REASSIGN_FORBIDDEN_FIELDS: [&str; 5] = ["id", "name", "salary", "garage", "vehicles"];

/// Checks for a vehicle registration payload.
///
/// Order: `id` key, unrecognized keys, `owner`, `mechanic`, then `reg`, `make`,
/// `model` presence.
///
/// # Examples
/// ```
/// use service::garage::rules::check_new_vehicle;
/// let payload = serde_json::json!({"reg": "", "make": "X", "model": "Y"});
/// let err = check_new_vehicle(payload.as_object().unwrap()).unwrap_err();
/// assert_eq!(err.to_string(), "Registration (reg) must be provided");
/// ```
pub fn check_new_vehicle(payload: &Payload) -> Result<NewVehicle, ServiceError> {
    if payload.contains_key("id") {
        return Err(reject("id", "id should not be provided in the request"));
    }
    if let Some(key) = payload.keys().find(|k| !NEW_VEHICLE_FIELDS.contains(&k.as_str())) {
        return Err(reject(key, &format!("Unrecognized field \"{key}\"")));
    }
    if is_supplied(payload, "owner") {
        return Err(reject("owner", "Owner should not be provided in the request"));
    }
    if is_supplied(payload, "mechanic") {
        return Err(reject("mechanic", "Mechanic should not be provided in the request"));
    }
    let reg = required_text(payload, "reg", "Registration (reg) must be provided")?;
    let make = required_text(payload, "make", "Make must be provided")?;
    let model = required_text(payload, "model", "Model must be provided")?;
    Ok(NewVehicle { reg, make, model })
}

pub fn duplicate_registration(reg: &str) -> ServiceError {
    reject("reg", &format!("Registration {reg} already exists"))
}

/// Checks for a mechanic reassignment payload and returns the requested `mid`.
pub fn check_mechanic_assignment(payload: &Payload) -> Result<String, ServiceError> {
    let mid = match payload.get("mid") {
        None | Some(Value::Null) => return Err(reject("mid", "mid must be present in the request")),
        Some(v) => v,
    };
    for field in REASSIGN_FORBIDDEN_FIELDS {
        if payload.contains_key(field) {
            return Err(reject(field, &format!("{field} attribute should not be provided in the request")));
        }
    }
    scalar_text(mid).ok_or_else(|| reject("mid", "mid must be a string"))
}

/// An association counts as supplied when its key carries a non-null value.
fn is_supplied(payload: &Payload, key: &str) -> bool {
    payload.get(key).is_some_and(|v| !v.is_null())
}

fn required_text(payload: &Payload, field: &str, missing: &str) -> Result<String, ServiceError> {
    let value = match payload.get(field) {
        None | Some(Value::Null) => return Err(reject(field, missing)),
        Some(v) => v,
    };
    match scalar_text(value) {
        None => Err(reject(field, &format!("{field} must be a string"))),
        Some(s) if s.trim().is_empty() => Err(reject(field, missing)),
        Some(s) => Ok(s),
    }
}

/// Strings pass through; numbers and booleans are stringified.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn reject(field: &str, msg: &str) -> ServiceError {
    debug!(field, reason = msg, "payload rejected");
    ServiceError::validation(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(v: Value) -> Payload {
        v.as_object().cloned().expect("object payload")
    }

    fn create_err(v: Value) -> String {
        check_new_vehicle(&payload(v)).unwrap_err().to_string()
    }

    fn reassign_err(v: Value) -> String {
        check_mechanic_assignment(&payload(v)).unwrap_err().to_string()
    }

    #[test]
    fn create_accepts_minimal_payload() {
        let nv = check_new_vehicle(&payload(json!({"reg": "ABC123", "make": "Toyota", "model": "Yaris"}))).unwrap();
        assert_eq!(nv, NewVehicle { reg: "ABC123".into(), make: "Toyota".into(), model: "Yaris".into() });
    }

    #[test]
    fn create_id_checked_first() {
        assert_eq!(
            create_err(json!({"id": 5, "owner": {"cid": "C1"}, "reg": ""})),
            "id should not be provided in the request"
        );
        assert_eq!(create_err(json!({"id": null})), "id should not be provided in the request");
    }

    #[test]
    fn create_owner_before_mechanic_before_fields() {
        assert_eq!(
            create_err(json!({"owner": {"cid": "C1"}, "mechanic": {"mid": "M1"}})),
            "Owner should not be provided in the request"
        );
        assert_eq!(
            create_err(json!({"mechanic": {"mid": "M1"}, "reg": ""})),
            "Mechanic should not be provided in the request"
        );
    }

    #[test]
    fn create_null_associations_are_not_supplied() {
        let nv = check_new_vehicle(&payload(json!({"owner": null, "mechanic": null, "reg": "R", "make": "M", "model": "X"})));
        assert!(nv.is_ok());
    }

    #[test]
    fn create_field_presence_order() {
        assert_eq!(create_err(json!({"reg": "", "make": "X", "model": "Y"})), "Registration (reg) must be provided");
        assert_eq!(create_err(json!({"make": "", "model": ""})), "Registration (reg) must be provided");
        assert_eq!(create_err(json!({"reg": "R", "make": "   ", "model": ""})), "Make must be provided");
        assert_eq!(create_err(json!({"reg": "R", "make": "M", "model": null})), "Model must be provided");
        assert_eq!(create_err(json!({"reg": "R", "make": "M"})), "Model must be provided");
    }

    #[test]
    fn create_coerces_scalars_and_rejects_structures() {
        let nv = check_new_vehicle(&payload(json!({"reg": 12345, "make": "M", "model": true}))).unwrap();
        assert_eq!(nv.reg, "12345");
        assert_eq!(nv.model, "true");
        assert_eq!(create_err(json!({"reg": ["A"], "make": "M", "model": "X"})), "reg must be a string");
    }

    #[test]
    fn create_rejects_unrecognized_keys_after_id() {
        assert_eq!(
            create_err(json!({"reg": "R", "make": "M", "model": "X", "colour": "red"})),
            "Unrecognized field \"colour\""
        );
        assert_eq!(
            create_err(json!({"colour": "red", "owner": {"cid": "C1"}, "reg": ""})),
            "Unrecognized field \"colour\""
        );
        assert_eq!(create_err(json!({"id": 1, "colour": "red"})), "id should not be provided in the request");
    }

    #[test]
    fn create_keeps_untrimmed_value() {
        let nv = check_new_vehicle(&payload(json!({"reg": " R1 ", "make": "M", "model": "X"}))).unwrap();
        assert_eq!(nv.reg, " R1 ");
    }

    #[test]
    fn duplicate_registration_message() {
        assert_eq!(duplicate_registration("ABC123").to_string(), "Registration ABC123 already exists");
    }

    #[test]
    fn reassign_requires_mid_first() {
        assert_eq!(reassign_err(json!({"name": "new"})), "mid must be present in the request");
        assert_eq!(reassign_err(json!({"mid": null})), "mid must be present in the request");
    }

    #[test]
    fn reassign_forbidden_fields_in_fixed_order() {
        assert_eq!(reassign_err(json!({"mid": "M1", "name": "new"})), "name attribute should not be provided in the request");
        assert_eq!(
            reassign_err(json!({"mid": "M1", "vehicles": [], "garage": {}, "salary": 1, "name": "n", "id": 1})),
            "id attribute should not be provided in the request"
        );
        assert_eq!(
            reassign_err(json!({"mid": "M1", "vehicles": [], "garage": null, "salary": 1})),
            "salary attribute should not be provided in the request"
        );
        assert_eq!(
            reassign_err(json!({"mid": "M1", "vehicles": [], "garage": null})),
            "garage attribute should not be provided in the request"
        );
        assert_eq!(reassign_err(json!({"mid": "M1", "vehicles": []})), "vehicles attribute should not be provided in the request");
    }

    #[test]
    fn reassign_returns_mid() {
        assert_eq!(check_mechanic_assignment(&payload(json!({"mid": "M007"}))).unwrap(), "M007");
        assert_eq!(check_mechanic_assignment(&payload(json!({"mid": 7}))).unwrap(), "7");
        assert_eq!(reassign_err(json!({"mid": {"x": 1}})), "mid must be a string");
    }
}
