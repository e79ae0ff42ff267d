//! Resource API Tests
//!
//! The id-presence protocol and payload validation are enforced before any
//! repository call, so these run against the lazy pool without a database.

use axum::http::StatusCode;

use crate::common::{body_json, token_for, TestApp};

#[tokio::test]
async fn create_alumno_with_id_is_rejected_with_idexists() {
    let app = TestApp::new();
    let token = token_for(1, &["ROLE_ADMIN"]);

    let response = app
        .post_json_auth(
            "/api/alumnos",
            r#"{"id":7,"nombre":"Ana","apellido":"Pérez","padron":"95111","userId":3}"#,
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["entityName"], "alumno");
    assert_eq!(json["errorKey"], "idexists");
}

#[tokio::test]
async fn update_curso_without_id_is_rejected_with_idnull() {
    let app = TestApp::new();
    let token = token_for(1, &["ROLE_ADMIN"]);

    let response = app
        .put_json_auth(
            "/api/cursos",
            r#"{"numero":1,"vacantes":30,"materiaId":2}"#,
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["entityName"], "curso");
    assert_eq!(json["errorKey"], "idnull");
}

#[tokio::test]
async fn create_departamento_with_id_is_rejected_with_idexists() {
    let app = TestApp::new();
    let token = token_for(1, &["ROLE_ADM_DPTO"]);

    let response = app
        .post_json_auth(
            "/api/departamentos",
            r#"{"id":4,"nombre":"Computación","codigo":75}"#,
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["entityName"], "departamento");
    assert_eq!(json["errorKey"], "idexists");
}

#[tokio::test]
async fn update_coloquio_without_id_is_rejected_with_idnull() {
    let app = TestApp::new();
    let token = token_for(1, &["ROLE_ADMIN"]);

    let response = app
        .put_json_auth(
            "/api/coloquios",
            r#"{"aula":"101","fecha":"2026-12-02","horaInicio":"18:00:00","horaFin":"20:00:00","cursoId":4}"#,
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["entityName"], "coloquio");
    assert_eq!(json["errorKey"], "idnull");
}

#[tokio::test]
async fn alumno_with_blank_nombre_fails_validation() {
    let app = TestApp::new();
    let token = token_for(1, &["ROLE_ADMIN"]);

    let response = app
        .post_json_auth(
            "/api/alumnos",
            r#"{"nombre":"","apellido":"Pérez","padron":"95111","userId":3}"#,
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    // Plain validation failures carry no entity alert fields
    assert!(json.get("entityName").is_none());
    assert!(json["message"].as_str().is_some());
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let app = TestApp::new();
    let token = token_for(1, &["ROLE_ADMIN"]);

    let response = app
        .post_json_auth("/api/cursos", r#"{"numero": "#, &token)
        .await;

    assert!(response.status().is_client_error());
}
