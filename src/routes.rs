// Route path constants - single source of truth for all API paths

pub const SELF_CHECK: &str = "/self-check";
pub const ITEMS: &str = "/items";
pub const ITEM: &str = "/items/{id}";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
