//! Request DTOs
//!
//! Data structures for API request bodies. Payloads carry `id: Option<i64>`:
//! POST requires it absent, PUT requires it present. The services enforce
//! that protocol.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

use crate::domain::{
    AlumnoData, ColoquioData, ColoquioEstado, CursoData, CursoEstado, DepartamentoData,
};

/// Alumno create/update payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AlumnoPayload {
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Nombre is required"))]
    pub nombre: String,

    #[validate(length(min = 1, message = "Apellido is required"))]
    pub apellido: String,

    #[validate(length(min = 1, message = "Padron is required"))]
    pub padron: String,

    #[serde(default)]
    pub prioridad: i32,

    pub user_id: i64,
}

impl AlumnoPayload {
    pub fn into_data(self) -> AlumnoData {
        AlumnoData {
            nombre: self.nombre,
            apellido: self.apellido,
            padron: self.padron,
            prioridad: self.prioridad,
            user_id: self.user_id,
        }
    }
}

/// Curso create/update payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CursoPayload {
    pub id: Option<i64>,

    #[validate(range(min = 1, message = "Numero must be positive"))]
    pub numero: i32,

    #[validate(range(min = 0, message = "Vacantes must not be negative"))]
    pub vacantes: i32,

    #[serde(default)]
    pub estado: CursoEstado,

    pub materia_id: i64,
}

impl CursoPayload {
    pub fn into_data(self) -> CursoData {
        CursoData {
            numero: self.numero,
            vacantes: self.vacantes,
            estado: self.estado,
            materia_id: self.materia_id,
        }
    }
}

/// Coloquio create/update payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ColoquioPayload {
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Aula is required"))]
    pub aula: String,

    pub fecha: NaiveDate,

    pub hora_inicio: NaiveTime,

    pub hora_fin: NaiveTime,

    #[serde(default)]
    pub estado: ColoquioEstado,

    pub curso_id: i64,
}

impl ColoquioPayload {
    pub fn into_data(self) -> ColoquioData {
        ColoquioData {
            aula: self.aula,
            fecha: self.fecha,
            hora_inicio: self.hora_inicio,
            hora_fin: self.hora_fin,
            estado: self.estado,
            curso_id: self.curso_id,
        }
    }
}

/// Departamento create/update payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DepartamentoPayload {
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Nombre is required"))]
    pub nombre: String,

    pub codigo: i32,
}

impl DepartamentoPayload {
    pub fn into_data(self) -> DepartamentoData {
        DepartamentoData {
            nombre: self.nombre,
            codigo: self.codigo,
        }
    }
}

/// Query parameters for the colloquia-by-curso listing
#[derive(Debug, Deserialize)]
pub struct ColoquioQueryParams {
    /// Lower bound (inclusive) on fecha; omit to list every active
    /// colloquium of the course
    pub desde: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alumno_payload_rejects_empty_nombre() {
        let payload = AlumnoPayload {
            id: None,
            nombre: String::new(),
            apellido: "Pérez".to_string(),
            padron: "95111".to_string(),
            prioridad: 0,
            user_id: 1,
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn curso_payload_deserializes_camel_case() {
        let payload: CursoPayload = serde_json::from_str(
            r#"{"numero":1,"vacantes":40,"estado":"ACTIVO","materiaId":12}"#,
        )
        .unwrap();

        assert_eq!(payload.id, None);
        assert_eq!(payload.materia_id, 12);
        assert_eq!(payload.estado, CursoEstado::Activo);
    }

    #[test]
    fn coloquio_payload_estado_defaults_to_activo() {
        let payload: ColoquioPayload = serde_json::from_str(
            r#"{"aula":"101","fecha":"2024-12-02","horaInicio":"18:00:00","horaFin":"20:00:00","cursoId":4}"#,
        )
        .unwrap();

        assert_eq!(payload.estado, ColoquioEstado::Activo);
    }
}
