//! OpenAPI 3.0 文档
//!
//! 用 utoipa 的 builder 把 `ApiDocument` 转成 `utoipa::openapi::OpenApi`。
//! OpenAPI 的 responses 以状态码为键，重复声明的状态码以最后一次为准。

use utoipa::openapi::content::ContentBuilder;
use utoipa::openapi::info::InfoBuilder;
use utoipa::openapi::path::{OperationBuilder, PathItem, PathsBuilder};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::response::{ResponseBuilder, ResponsesBuilder};
use utoipa::openapi::schema::{ArrayBuilder, ComponentsBuilder, Ref, Schema};
use utoipa::openapi::security::SecurityRequirement;
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::{OpenApi, OpenApiBuilder, RefOr, Required};

use super::model::{ApiDocument, BodyDoc, ControllerDoc, EndpointDoc};

const JSON_MEDIA_TYPE: &str = "application/json";

fn schema_ref(name: &str) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn body_schema(body: &BodyDoc) -> RefOr<Schema> {
    match body {
        BodyDoc::Object(name) => schema_ref(name),
        BodyDoc::ArrayOf(name) => RefOr::T(Schema::Array(
            ArrayBuilder::new().items(schema_ref(name)).build(),
        )),
    }
}

fn build_operation(controller: &ControllerDoc, endpoint: &EndpointDoc) -> OperationBuilder {
    let duplicates = endpoint.duplicate_statuses();
    if !duplicates.is_empty() {
        tracing::warn!(
            operation = endpoint.operation_id,
            statuses = ?duplicates,
            "Duplicate response status declared, keeping the last one"
        );
    }

    let mut responses = ResponsesBuilder::new();
    for response in &endpoint.responses {
        let mut rendered = ResponseBuilder::new().description(response.description);
        if let Some(body) = &response.body {
            rendered = rendered.content(
                JSON_MEDIA_TYPE,
                ContentBuilder::new().schema(body_schema(body)).build(),
            );
        }
        responses = responses.response(response.status.to_string(), RefOr::T(rendered.build()));
    }

    let mut operation = OperationBuilder::new()
        .operation_id(Some(endpoint.operation_id))
        .tag(controller.name)
        .summary(endpoint.summary)
        .description(endpoint.description)
        .responses(responses.build());

    if let Some(schema) = endpoint.request_body {
        let content = ContentBuilder::new()
            .schema(schema_ref(schema))
            .example(endpoint.request_example.clone())
            .build();
        operation = operation.request_body(Some(
            RequestBodyBuilder::new()
                .content(JSON_MEDIA_TYPE, content)
                .required(Some(Required::True))
                .build(),
        ));
    }

    for scheme in &controller.security {
        operation = operation.security(SecurityRequirement::new(*scheme, Vec::<String>::new()));
    }

    operation
}

impl ApiDocument {
    /// 构建 OpenAPI 3.0 文档
    pub fn to_openapi(&self) -> OpenApi {
        let info = InfoBuilder::new()
            .title(self.title)
            .version(self.version)
            .description(self.description)
            .build();

        let mut paths = PathsBuilder::new();
        for (controller, endpoint) in self.endpoints() {
            let operation = build_operation(controller, endpoint).build();
            paths = paths.path(
                controller.full_path(endpoint),
                PathItem::new(endpoint.method.clone(), operation),
            );
        }

        let mut components = ComponentsBuilder::new();
        for (name, schema) in &self.schemas {
            components = components.schema(*name, RefOr::T(schema.clone()));
        }
        for (name, scheme) in &self.security_schemes {
            components = components.security_scheme(*name, scheme.clone());
        }

        let tags: Vec<_> = self
            .controllers
            .iter()
            .map(|c| {
                TagBuilder::new()
                    .name(c.name)
                    .description(c.description)
                    .build()
            })
            .collect();

        OpenApiBuilder::new()
            .info(info)
            .paths(paths.build())
            .components(Some(components.build()))
            .tags(Some(tags))
            .build()
    }
}
