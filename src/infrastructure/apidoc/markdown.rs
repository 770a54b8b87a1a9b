//! Markdown API 文档
//!
//! 面向人阅读的渲染：控制器标题与基础路径、端点汇总表、
//! 每个端点的详情（参数表、响应表）、DTO 字段表。响应按声明顺序列出，重复的状态码也保留。

use utoipa::openapi::schema::Schema;
use utoipa::openapi::RefOr;

use super::model::{ApiDocument, ControllerDoc, EndpointDoc};

/// 表格单元格转义
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn json_label<T: serde::Serialize>(value: &T) -> Option<String> {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
}

fn type_label(schema: &RefOr<Schema>) -> String {
    match schema {
        RefOr::Ref(reference) => reference
            .ref_location
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string(),
        RefOr::T(Schema::Array(array)) => format!("array<{}>", type_label(&array.items)),
        RefOr::T(Schema::Object(object)) => {
            let base = json_label(&object.schema_type).unwrap_or_else(|| "object".to_string());
            match object.format.as_ref().and_then(json_label) {
                Some(format) => format!("{} ({})", base, format),
                None => base,
            }
        }
        RefOr::T(_) => "object".to_string(),
    }
}

fn field_description(schema: &RefOr<Schema>) -> &str {
    match schema {
        RefOr::T(Schema::Object(object)) => object.description.as_deref().unwrap_or_default(),
        RefOr::T(Schema::Array(array)) => array.description.as_deref().unwrap_or_default(),
        _ => "",
    }
}

fn render_summary_table(controller: &ControllerDoc, out: &mut String) {
    out.push_str("| Método | Ruta | Resumen |\n|---|---|---|\n");
    for endpoint in &controller.endpoints {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            endpoint.method_label(),
            controller.full_path(endpoint),
            cell(endpoint.summary.unwrap_or_default())
        ));
    }
}

fn render_endpoint(controller: &ControllerDoc, endpoint: &EndpointDoc, out: &mut String) {
    out.push_str(&format!(
        "\n#### {} {}\n\n",
        endpoint.method_label(),
        controller.full_path(endpoint)
    ));
    out.push_str(&format!(
        "_{}_\n\n",
        endpoint.summary.unwrap_or("Sin resumen")
    ));
    if let Some(description) = endpoint.description {
        out.push_str(&format!("{}\n\n", description));
    }
    out.push_str(&format!("Operación: `{}`\n\n", endpoint.operation_id));
    if let Some(example) = endpoint.example {
        out.push_str(&format!("Ejemplo: `{}`\n\n", example));
    }

    out.push_str("**Parámetros**\n\n");
    match endpoint.request_body {
        Some(schema) => {
            out.push_str("| Nombre | Ubicación | Tipo | Requerido |\n|---|---|---|---|\n");
            out.push_str(&format!("| body | body | {} | Sí |\n\n", schema));
        }
        None => out.push_str("No hay parámetros requeridos.\n\n"),
    }

    out.push_str("**Respuestas**\n\n");
    if endpoint.responses.is_empty() {
        out.push_str("No especificado\n");
        return;
    }
    out.push_str("| Código | Descripción |\n|---|---|\n");
    for response in &endpoint.responses {
        out.push_str(&format!(
            "| {} | {} |\n",
            response.status,
            cell(response.description)
        ));
    }
}

fn render_schema(name: &str, schema: &Schema, out: &mut String) {
    out.push_str(&format!("\n### {}\n\n", name));

    let Schema::Object(object) = schema else {
        out.push_str(&format!("Tipo: `{}`\n", type_label(&RefOr::T(schema.clone()))));
        return;
    };

    if let Some(description) = &object.description {
        out.push_str(&format!("{}\n\n", description));
    }
    if object.properties.is_empty() {
        out.push_str("Sin campos.\n");
        return;
    }

    out.push_str("| Campo | Tipo | Requerido | Descripción |\n|---|---|---|---|\n");
    for (field, property) in &object.properties {
        let required = if object.required.iter().any(|r| r == field) {
            "Sí"
        } else {
            "No"
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            field,
            cell(&type_label(property)),
            required,
            cell(field_description(property))
        ));
    }
}

impl ApiDocument {
    /// 渲染为 Markdown 文档
    pub fn to_markdown(&self) -> String {
        let mut out = format!(
            "# Documentación de API\n\n**{}** v{}\n\n",
            self.title, self.version
        );
        if let Some(description) = self.description {
            out.push_str(&format!("{}\n\n", description));
        }

        for controller in &self.controllers {
            out.push_str(&format!("## {}\n\n", controller.name));
            out.push_str(&format!("Base Path: `{}`\n\n", controller.base_path));
            if let Some(description) = controller.description {
                out.push_str(&format!("{}\n\n", description));
            }
            if !controller.security.is_empty() {
                let schemes: Vec<String> =
                    controller.security.iter().map(|s| format!("`{}`", s)).collect();
                out.push_str(&format!("Seguridad: {}\n\n", schemes.join(", ")));
            }

            render_summary_table(controller, &mut out);

            out.push_str("\n### Detalle de Endpoints\n");
            for endpoint in &controller.endpoints {
                render_endpoint(controller, endpoint, &mut out);
            }
            out.push('\n');
        }

        if !self.schemas.is_empty() {
            out.push_str("## Modelos y DTOs\n");
            for (name, schema) in &self.schemas {
                render_schema(name, schema, &mut out);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::apidoc::{BodyDoc, ResponseDoc};
    use utoipa::openapi::schema::{ArrayBuilder, ObjectBuilder, SchemaType};

    fn sample_document() -> ApiDocument {
        let tags = ArrayBuilder::new()
            .items(RefOr::T(Schema::Object(
                ObjectBuilder::new().schema_type(SchemaType::String).build(),
            )))
            .description(Some("Etiquetas | libres"));
        let schema = Schema::Object(
            ObjectBuilder::new()
                .description(Some("Un ejemplo"))
                .property("tags", RefOr::T(Schema::Array(tags.build())))
                .required("tags")
                .build(),
        );
        let empty = Schema::Object(ObjectBuilder::new().build());

        ApiDocument {
            schemas: vec![("Sample", schema), ("Empty", empty)],
            ..ApiDocument::new("Sample API", "0.0.1")
        }
        .controller(
            ControllerDoc::new("Samples", "/api/samples")
                .security("token")
                .endpoint(
                    EndpointDoc::post("run", "/run")
                        .summary("Ejecuta")
                        .request_body("Sample", None)
                        .response(ResponseDoc::new(200, "ok").with_body(BodyDoc::Object("Sample")))
                        .response(ResponseDoc::new(401, "primero"))
                        .response(ResponseDoc::new(401, "segundo")),
                )
                .endpoint(EndpointDoc::post("idle", "/idle")),
        )
    }

    #[test]
    fn test_controller_header_and_summary_table() {
        let md = sample_document().to_markdown();
        assert!(md.starts_with("# Documentación de API"));
        assert!(md.contains("## Samples"));
        assert!(md.contains("Base Path: `/api/samples`"));
        assert!(md.contains("Seguridad: `token`"));
        assert!(md.contains("| POST | /api/samples/run | Ejecuta |"));
        assert!(md.contains("| POST | /api/samples/idle |  |"));
    }

    #[test]
    fn test_endpoint_sections_list_every_declared_response() {
        let md = sample_document().to_markdown();
        assert!(md.contains("#### POST /api/samples/run"));
        assert!(md.contains("| body | body | Sample | Sí |"));
        assert!(md.contains("| 401 | primero |"));
        assert!(md.contains("| 401 | segundo |"));
    }

    #[test]
    fn test_endpoint_without_summary_or_responses() {
        let md = sample_document().to_markdown();
        let idle = md.split("#### POST /api/samples/idle").nth(1).unwrap();
        assert!(idle.contains("_Sin resumen_"));
        assert!(idle.contains("No hay parámetros requeridos."));
        assert!(idle.contains("No especificado"));
    }

    #[test]
    fn test_model_tables() {
        let md = sample_document().to_markdown();
        assert!(md.contains("## Modelos y DTOs"));
        assert!(md.contains("| tags | array<string> | Sí | Etiquetas \\| libres |"));
        let empty = md.split("### Empty").nth(1).unwrap();
        assert!(empty.contains("Sin campos."));
    }
}
