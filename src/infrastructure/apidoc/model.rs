//! API Description Model
//!
//! 控制器/端点/响应以数据登记；DTO 的 schema 直接使用 utoipa 的类型。

use serde_json::Value;
use utoipa::openapi::path::PathItemType;
use utoipa::openapi::schema::Schema;
use utoipa::openapi::security::SecurityScheme;

/// 由 DTO 实现，返回其 OpenAPI schema
pub trait DescribeSchema {
    const NAME: &'static str;

    fn schema() -> Schema;
}

/// 响应体形状
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyDoc {
    Object(&'static str),
    ArrayOf(&'static str),
}

impl BodyDoc {
    pub fn schema_name(&self) -> &'static str {
        match self {
            BodyDoc::Object(name) | BodyDoc::ArrayOf(name) => name,
        }
    }
}

/// 单个声明的响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDoc {
    pub status: u16,
    pub description: &'static str,
    pub body: Option<BodyDoc>,
}

impl ResponseDoc {
    pub fn new(status: u16, description: &'static str) -> Self {
        Self {
            status,
            description,
            body: None,
        }
    }

    pub fn with_body(mut self, body: BodyDoc) -> Self {
        self.body = Some(body);
        self
    }
}

/// 端点描述
#[derive(Clone)]
pub struct EndpointDoc {
    pub operation_id: &'static str,
    pub method: PathItemType,
    pub path: &'static str,
    pub summary: Option<&'static str>,
    pub description: Option<&'static str>,
    /// 文档中展示的调用示例（自由文本）
    pub example: Option<&'static str>,
    pub request_body: Option<&'static str>,
    pub request_example: Option<Value>,
    /// 按声明顺序保留，重复的状态码也保留
    pub responses: Vec<ResponseDoc>,
}

impl EndpointDoc {
    pub fn post(operation_id: &'static str, path: &'static str) -> Self {
        Self {
            operation_id,
            method: PathItemType::Post,
            path,
            summary: None,
            description: None,
            example: None,
            request_body: None,
            request_example: None,
            responses: Vec::new(),
        }
    }

    pub fn summary(mut self, summary: &'static str) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }

    pub fn request_body(mut self, schema: &'static str, example: Option<Value>) -> Self {
        self.request_body = Some(schema);
        self.request_example = example;
        self
    }

    pub fn response(mut self, response: ResponseDoc) -> Self {
        self.responses.push(response);
        self
    }

    /// 被声明多于一次的状态码（升序）
    pub fn duplicate_statuses(&self) -> Vec<u16> {
        let mut statuses: Vec<u16> = self.responses.iter().map(|r| r.status).collect();
        statuses.sort_unstable();
        let mut duplicates: Vec<u16> = statuses
            .windows(2)
            .filter(|w| w[0] == w[1])
            .map(|w| w[0])
            .collect();
        duplicates.dedup();
        duplicates
    }

    /// HTTP 方法的大写名称
    pub fn method_label(&self) -> &'static str {
        match self.method {
            PathItemType::Get => "GET",
            PathItemType::Post => "POST",
            PathItemType::Put => "PUT",
            PathItemType::Delete => "DELETE",
            PathItemType::Options => "OPTIONS",
            PathItemType::Head => "HEAD",
            PathItemType::Patch => "PATCH",
            PathItemType::Trace => "TRACE",
            PathItemType::Connect => "CONNECT",
        }
    }
}

/// 控制器描述：共享路径前缀与安全要求
#[derive(Clone)]
pub struct ControllerDoc {
    pub name: &'static str,
    pub base_path: &'static str,
    pub description: Option<&'static str>,
    pub security: Vec<&'static str>,
    pub endpoints: Vec<EndpointDoc>,
}

impl ControllerDoc {
    pub fn new(name: &'static str, base_path: &'static str) -> Self {
        Self {
            name,
            base_path,
            description: None,
            security: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn security(mut self, scheme: &'static str) -> Self {
        self.security.push(scheme);
        self
    }

    pub fn endpoint(mut self, endpoint: EndpointDoc) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// 端点完整路径
    pub fn full_path(&self, endpoint: &EndpointDoc) -> String {
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            endpoint.path.trim_start_matches('/')
        )
    }
}

/// 完整的 API 描述
#[derive(Clone)]
pub struct ApiDocument {
    pub title: &'static str,
    pub version: &'static str,
    pub description: Option<&'static str>,
    pub security_schemes: Vec<(&'static str, SecurityScheme)>,
    pub controllers: Vec<ControllerDoc>,
    pub schemas: Vec<(&'static str, Schema)>,
}

impl ApiDocument {
    pub fn new(title: &'static str, version: &'static str) -> Self {
        Self {
            title,
            version,
            description: None,
            security_schemes: Vec::new(),
            controllers: Vec::new(),
            schemas: Vec::new(),
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn security_scheme(mut self, name: &'static str, scheme: SecurityScheme) -> Self {
        self.security_schemes.push((name, scheme));
        self
    }

    pub fn controller(mut self, controller: ControllerDoc) -> Self {
        self.controllers.push(controller);
        self
    }

    /// 注册 DTO；同名 schema 只保留第一次注册
    pub fn register_schema<T: DescribeSchema>(mut self) -> Self {
        if self.find_schema(T::NAME).is_none() {
            self.schemas.push((T::NAME, T::schema()));
        }
        self
    }

    pub fn find_schema(&self, name: &str) -> Option<&Schema> {
        self.schemas
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, schema)| schema)
    }

    /// 所有端点及其所属控制器
    pub fn endpoints(&self) -> impl Iterator<Item = (&ControllerDoc, &EndpointDoc)> {
        self.controllers
            .iter()
            .flat_map(|c| c.endpoints.iter().map(move |e| (c, e)))
    }
}
