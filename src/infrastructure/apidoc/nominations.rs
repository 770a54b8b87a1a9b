//! Nominations API 描述
//!
//! DTO 的描述与示例、端点声明的响应码都登记在这里。
//! 401/403/404 只是文档中声明的契约，处理器不会产生这些结果。

use serde_json::json;
use utoipa::openapi::schema::{
    ArrayBuilder, KnownFormat, ObjectBuilder, Schema, SchemaFormat, SchemaType,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::RefOr;

use super::model::{
    ApiDocument, BodyDoc, ControllerDoc, DescribeSchema, EndpointDoc, ResponseDoc,
};
use crate::domain::{NominationDetails, NominationIdsRequest, ZarpeFilters, ZarpeSummary};

/// 提名接口的路径前缀
pub const NOMINATIONS_BASE_PATH: &str = "/api/v1/nominations";

/// 安全方案名称
const TOKEN_SCHEME: &str = "token";

fn int64() -> ObjectBuilder {
    ObjectBuilder::new()
        .schema_type(SchemaType::Integer)
        .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int64)))
}

fn object(description: &str) -> ObjectBuilder {
    ObjectBuilder::new()
        .schema_type(SchemaType::Object)
        .description(Some(description))
}

impl DescribeSchema for NominationDetails {
    const NAME: &'static str = "NominationDetails";

    fn schema() -> Schema {
        let id = int64().description(Some("ID de detalle")).nullable(true);

        Schema::Object(
            object("Respuesta con detalles de nominación")
                .property("id", RefOr::T(Schema::Object(id.build())))
                .build(),
        )
    }
}

impl DescribeSchema for NominationIdsRequest {
    const NAME: &'static str = "NominationIdsRequest";

    fn schema() -> Schema {
        let id_noms = ArrayBuilder::new()
            .items(RefOr::T(Schema::Object(int64().build())))
            .description(Some("Lista de IDs"))
            .example(Some(json!([1, 2])))
            .nullable(true);

        Schema::Object(
            object("DTO de solicitud de IDs de nominación")
                .property("idNoms", RefOr::T(Schema::Array(id_noms.build())))
                .build(),
        )
    }
}

impl DescribeSchema for ZarpeFilters {
    const NAME: &'static str = "ZarpeFilters";

    fn schema() -> Schema {
        let start_date = ObjectBuilder::new()
            .schema_type(SchemaType::String)
            .format(Some(SchemaFormat::KnownFormat(KnownFormat::Date)))
            .description(Some("Fecha inicio"))
            .example(Some(json!("2024-01-01")))
            .nullable(true);

        Schema::Object(
            object("Filtros para búsqueda de zarpes")
                .property("startDate", RefOr::T(Schema::Object(start_date.build())))
                .build(),
        )
    }
}

impl DescribeSchema for ZarpeSummary {
    const NAME: &'static str = "ZarpeSummary";

    fn schema() -> Schema {
        Schema::Object(object("Resumen de zarpe").build())
    }
}

fn find_detail_nom() -> EndpointDoc {
    EndpointDoc::post("findDetailNom", "/nom-detail")
        .description("Obtiene los detalles de las nominaciones")
        .example("1,2,3")
        .request_body("NominationIdsRequest", Some(json!({ "idNoms": [1, 2, 3] })))
        .response(ResponseDoc::new(200, "OK").with_body(BodyDoc::Object("NominationDetails")))
}

fn find_resumen_zarpe_with_filters() -> EndpointDoc {
    EndpointDoc::post("findResumenZarpeWithFilters", "/find-resumen-with-filters")
        .summary("API para encontrar resumen de zarpe con filtros")
        .request_body("ZarpeFilters", Some(json!({ "startDate": "2024-01-01" })))
        .response(
            ResponseDoc::new(200, "Resumen de zarpe encontrado correctamente")
                .with_body(BodyDoc::ArrayOf("ZarpeSummary")),
        )
        .response(ResponseDoc::new(
            401,
            "Error en el procesamiento de la solicitud",
        ))
        .response(ResponseDoc::new(401, "Unauthorized"))
        .response(ResponseDoc::new(
            403,
            "Forbidden. Cuando el usuario (application) no tiene los permisos adecuados para esta operación",
        ))
        .response(ResponseDoc::new(404, "Not found"))
}

/// 构建本服务的 API 描述
pub fn nominations_api() -> ApiDocument {
    ApiDocument::new("Nominations API", env!("CARGO_PKG_VERSION"))
        .description("Nominaciones y resúmenes de zarpe")
        .security_scheme(
            TOKEN_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        )
        .controller(
            ControllerDoc::new("NominationRestController", NOMINATIONS_BASE_PATH)
                .description("Nominaciones")
                .security(TOKEN_SCHEME)
                .endpoint(find_detail_nom())
                .endpoint(find_resumen_zarpe_with_filters()),
        )
        .register_schema::<NominationDetails>()
        .register_schema::<NominationIdsRequest>()
        .register_schema::<ZarpeFilters>()
        .register_schema::<ZarpeSummary>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_referenced_schema_is_registered() {
        let api = nominations_api();
        for (_, endpoint) in api.endpoints() {
            if let Some(name) = endpoint.request_body {
                assert!(api.find_schema(name).is_some(), "missing {}", name);
            }
            for response in &endpoint.responses {
                if let Some(body) = &response.body {
                    let name = body.schema_name();
                    assert!(api.find_schema(name).is_some(), "missing {}", name);
                }
            }
        }
    }

    #[test]
    fn test_zarpe_endpoint_keeps_both_401_declarations() {
        let api = nominations_api();
        let (_, endpoint) = api
            .endpoints()
            .find(|(_, e)| e.operation_id == "findResumenZarpeWithFilters")
            .unwrap();
        let statuses: Vec<u16> = endpoint.responses.iter().map(|r| r.status).collect();
        assert_eq!(statuses, vec![200, 401, 401, 403, 404]);
        assert_eq!(endpoint.duplicate_statuses(), vec![401]);
    }

    #[test]
    fn test_openapi_paths_and_codes() {
        let doc = serde_json::to_value(nominations_api().to_openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 2);

        let detail = &doc["paths"]["/api/v1/nominations/nom-detail"]["post"];
        assert_eq!(detail["operationId"], "findDetailNom");
        assert_eq!(
            detail["requestBody"]["content"]["application/json"]["example"],
            json!({ "idNoms": [1, 2, 3] })
        );
        assert_eq!(detail["security"], json!([{ "token": [] }]));

        let zarpe = &doc["paths"]["/api/v1/nominations/find-resumen-with-filters"]["post"];
        let codes: Vec<&String> = zarpe["responses"].as_object().unwrap().keys().collect();
        assert_eq!(codes, vec!["200", "401", "403", "404"]);
        assert_eq!(zarpe["responses"]["401"]["description"], "Unauthorized");
    }

    #[test]
    fn test_openapi_component_schemas() {
        let doc = serde_json::to_value(nominations_api().to_openapi()).unwrap();
        let schemas = &doc["components"]["schemas"];
        assert_eq!(schemas.as_object().unwrap().len(), 4);
        assert_eq!(schemas["NominationDetails"]["properties"]["id"]["nullable"], true);
        assert_eq!(
            schemas["NominationIdsRequest"]["properties"]["idNoms"]["example"],
            json!([1, 2])
        );
        assert_eq!(schemas["ZarpeFilters"]["properties"]["startDate"]["format"], "date");
        assert_eq!(schemas["NominationIdsRequest"]["properties"]["idNoms"]["items"]["format"], "int64");
        assert_eq!(schemas["ZarpeSummary"]["type"], "object");
        assert_eq!(schemas["ZarpeSummary"]["description"], "Resumen de zarpe");
    }

    #[test]
    fn test_markdown_lists_endpoints_and_models() {
        let md = nominations_api().to_markdown();
        assert!(md.contains("## NominationRestController"));
        assert!(md.contains("Base Path: `/api/v1/nominations`"));
        assert!(md.contains("| POST | /api/v1/nominations/nom-detail |  |"));
        assert!(md.contains(
            "| POST | /api/v1/nominations/find-resumen-with-filters | API para encontrar resumen de zarpe con filtros |"
        ));
        assert!(md.contains("Ejemplo: `1,2,3`"));
        assert!(md.contains("| 401 | Error en el procesamiento de la solicitud |"));
        assert!(md.contains("| 401 | Unauthorized |"));
        assert!(md.contains("| idNoms | array<integer (int64)> | No | Lista de IDs |"));
        assert!(md.contains("| startDate | string (date) | No | Fecha inicio |"));
    }
}
