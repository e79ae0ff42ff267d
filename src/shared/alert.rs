//! Entity alert headers.
//!
//! Create, update and delete responses announce what happened through the
//! `X-quechuaApp-alert` / `X-quechuaApp-params` header pair so clients can
//! surface a notification without parsing the body.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

static ALERT: HeaderName = HeaderName::from_static("x-quechuaapp-alert");
static PARAMS: HeaderName = HeaderName::from_static("x-quechuaapp-params");

fn alert_headers(message: String, param: String) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&message) {
        headers.insert(ALERT.clone(), value);
    }
    if let Ok(value) = HeaderValue::from_str(&param) {
        headers.insert(PARAMS.clone(), value);
    }
    headers
}

/// Headers announcing that an entity was created.
pub fn creation_alert(entity_name: &str, id: i64) -> HeaderMap {
    alert_headers(
        format!("quechuaApp.{}.created", entity_name),
        id.to_string(),
    )
}

/// Headers announcing that an entity was updated.
pub fn update_alert(entity_name: &str, id: i64) -> HeaderMap {
    alert_headers(
        format!("quechuaApp.{}.updated", entity_name),
        id.to_string(),
    )
}

/// Headers announcing that an entity was deleted.
pub fn deletion_alert(entity_name: &str, id: i64) -> HeaderMap {
    alert_headers(
        format!("quechuaApp.{}.deleted", entity_name),
        id.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_alert_names_the_entity() {
        let headers = creation_alert("alumno", 42);
        assert_eq!(
            headers.get("x-quechuaapp-alert").unwrap(),
            "quechuaApp.alumno.created"
        );
        assert_eq!(headers.get("x-quechuaapp-params").unwrap(), "42");
    }

    #[test]
    fn update_and_deletion_alerts_differ_only_in_verb() {
        let updated = update_alert("curso", 7);
        let deleted = deletion_alert("curso", 7);
        assert_eq!(
            updated.get("x-quechuaapp-alert").unwrap(),
            "quechuaApp.curso.updated"
        );
        assert_eq!(
            deleted.get("x-quechuaapp-alert").unwrap(),
            "quechuaApp.curso.deleted"
        );
    }
}
