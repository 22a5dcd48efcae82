//! Shared ambient pieces for the garage workspace: log setup and small wire types.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn health_serializes_status_field() {
        let v = serde_json::to_value(types::Health { status: "ok" }).unwrap();
        assert_eq!(v, serde_json::json!({"status": "ok"}));
    }
}
