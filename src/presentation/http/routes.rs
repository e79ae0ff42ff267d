//! Route Definitions
//!
//! Everything under /api requires a valid JWT; /health is public.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers::{alumno, carrera, coloquio, curso, departamento, health};
use crate::presentation::middleware::auth::auth_middleware;
use crate::startup::AppState;

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    // Literal segments win over the {id} capture, so the caller-scoped
    // alumno projections coexist with the by-id routes.
    let alumno_routes = Router::new()
        .route(
            "/",
            post(alumno::create_alumno)
                .put(alumno::update_alumno)
                .get(alumno::get_all_alumnos),
        )
        .route("/carreras", get(alumno::get_carreras_del_alumno))
        .route("/cursadasActivas", get(alumno::get_cursadas_activas))
        .route(
            "/{id}",
            get(alumno::get_alumno).delete(alumno::delete_alumno),
        );

    let curso_routes = Router::new()
        .route(
            "/",
            post(curso::create_curso)
                .put(curso::update_curso)
                .get(curso::get_all_cursos),
        )
        .route("/{id}", get(curso::get_curso).delete(curso::delete_curso))
        .route("/{id}/coloquios", get(coloquio::get_coloquios_by_curso));

    let coloquio_routes = Router::new()
        .route(
            "/",
            post(coloquio::create_coloquio)
                .put(coloquio::update_coloquio)
                .get(coloquio::get_all_coloquios),
        )
        .route(
            "/{id}",
            get(coloquio::get_coloquio).delete(coloquio::delete_coloquio),
        );

    let departamento_routes = Router::new()
        .route(
            "/",
            post(departamento::create_departamento)
                .put(departamento::update_departamento)
                .get(departamento::get_all_departamentos),
        )
        .route(
            "/{id}",
            get(departamento::get_departamento).delete(departamento::delete_departamento),
        )
        .route(
            "/{id}/materias",
            get(departamento::get_materias_del_departamento),
        );

    let carrera_routes = Router::new()
        .route("/", get(carrera::get_all_carreras))
        .route("/{id}", get(carrera::get_carrera));

    let api_routes = Router::new()
        .nest("/alumnos", alumno_routes)
        .nest("/cursos", curso_routes)
        .nest("/coloquios", coloquio_routes)
        .nest("/departamentos", departamento_routes)
        .nest("/carreras", carrera_routes)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .with_state(state)
}
