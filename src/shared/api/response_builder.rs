// src/shared/api/response_builder.rs
use actix_web::http::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error};

use super::response::JsonResponse;
use crate::config::ResponseConfig;
use crate::error::ResponseError;
use crate::shared::form::{FormErrorCollector, FormView};
use crate::shared::serializer::{GroupSerialize, JsonSerializer, SerializationGroups};

pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

pub fn method_not_allowed_message(method: &str) -> String {
    format!("The method {} is not allowed on this route.", method)
}

/// Envelope for `ok_paginated`, keys in wire order.
#[derive(Debug, Serialize)]
struct PageEnvelope {
    current_page_number: u32,
    num_items_per_page: u32,
    items: Value,
}

/// Maps an outcome to a `JsonResponse` with a fixed status code.
///
/// Every method returns a new response; the builder itself holds only
/// configuration and can be shared freely between workers.
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    serializer: JsonSerializer,
    default_groups: SerializationGroups,
    collector: FormErrorCollector,
}

impl ResponseBuilder {
    pub fn new(serializer: JsonSerializer, default_groups: SerializationGroups) -> Self {
        Self {
            serializer,
            default_groups,
            collector: FormErrorCollector,
        }
    }

    pub fn from_config(config: &ResponseConfig) -> Self {
        let serializer = if config.pretty_json {
            JsonSerializer::pretty()
        } else {
            JsonSerializer::new()
        };
        Self::new(serializer, config.default_groups.clone())
    }

    pub fn default_groups(&self) -> &SerializationGroups {
        &self.default_groups
    }

    //
    // ──────────────────────────────────────────────────────────
    // Error responses
    // ──────────────────────────────────────────────────────────
    //

    /// 405 naming the rejected method.
    pub fn method_not_allowed(&self, method: &str) -> JsonResponse {
        self.error(
            StatusCode::METHOD_NOT_ALLOWED,
            Value::from(method_not_allowed_message(method)),
        )
    }

    /// 400 with `message` under `error`; a string or any structured value.
    pub fn bad_request(&self, message: impl Into<Value>) -> JsonResponse {
        self.error(StatusCode::BAD_REQUEST, message.into())
    }

    /// 400 with the form's flattened errors under `error`.
    pub fn bad_form<F: FormView>(&self, form: &F) -> JsonResponse {
        let tree = self.collector.collect(form);
        debug!(error_count = tree.error_count(), "rendering invalid form");
        self.bad_request(tree)
    }

    pub fn not_found(&self, message: &str) -> JsonResponse {
        self.error(StatusCode::NOT_FOUND, Value::from(message))
    }

    /// 401 with an empty body.
    pub fn not_authorized(&self) -> JsonResponse {
        self.respond(JsonResponse::empty(StatusCode::UNAUTHORIZED))
    }

    /// 403; a missing message renders as `null`.
    pub fn forbidden_access(&self, message: Option<&str>) -> JsonResponse {
        self.error(StatusCode::FORBIDDEN, Value::from(message))
    }

    /// 409 with the conflicting `context` serialized in the given groups.
    pub fn conflict<T>(
        &self,
        message: impl Into<Value>,
        context: &T,
        groups: Option<&SerializationGroups>,
    ) -> Result<JsonResponse, ResponseError>
    where
        T: GroupSerialize + ?Sized,
    {
        let context = self.to_value(context, groups)?;
        let body = json!({
            "conflicts": message.into(),
            "context": context,
        });
        Ok(self.with_value(StatusCode::CONFLICT, &body))
    }

    pub fn internal_error(&self) -> JsonResponse {
        self.error(
            StatusCode::INTERNAL_SERVER_ERROR,
            Value::from(INTERNAL_ERROR_MESSAGE),
        )
    }

    //
    // ──────────────────────────────────────────────────────────
    // Success responses
    // ──────────────────────────────────────────────────────────
    //

    /// 201 with the serialized item as the whole body.
    pub fn created<T>(
        &self,
        item: &T,
        groups: Option<&SerializationGroups>,
    ) -> Result<JsonResponse, ResponseError>
    where
        T: GroupSerialize + ?Sized,
    {
        let value = self.to_value(item, groups)?;
        Ok(self.with_value(StatusCode::CREATED, &value))
    }

    /// 200 with the serialized item as the whole body, `null` when absent.
    pub fn ok<T>(
        &self,
        item: Option<&T>,
        groups: Option<&SerializationGroups>,
    ) -> Result<JsonResponse, ResponseError>
    where
        T: GroupSerialize + ?Sized,
    {
        let value = match item {
            Some(item) => self.to_value(item, groups)?,
            None => Value::Null,
        };
        Ok(self.with_value(StatusCode::OK, &value))
    }

    /// 200 with `{current_page_number, num_items_per_page, items}`.
    pub fn ok_paginated<T>(
        &self,
        items: &[T],
        groups: Option<&SerializationGroups>,
        count: u32,
        page: u32,
    ) -> Result<JsonResponse, ResponseError>
    where
        T: GroupSerialize,
    {
        let envelope = PageEnvelope {
            current_page_number: page,
            num_items_per_page: count,
            items: self.to_value(items, groups)?,
        };
        let value = serde_json::to_value(&envelope)
            .map_err(|e| ResponseError::SerializationFailed(e.into()))?;
        Ok(self.with_value(StatusCode::OK, &value))
    }

    pub fn no_content(&self) -> JsonResponse {
        self.respond(JsonResponse::empty(StatusCode::NO_CONTENT))
    }

    //
    // ──────────────────────────────────────────────────────────
    // Helpers
    // ──────────────────────────────────────────────────────────
    //

    fn to_value<T>(
        &self,
        item: &T,
        groups: Option<&SerializationGroups>,
    ) -> Result<Value, ResponseError>
    where
        T: GroupSerialize + ?Sized,
    {
        let groups = groups.unwrap_or(&self.default_groups);
        self.serializer.to_value(item, groups).map_err(|e| {
            error!(groups = %groups, "Payload serialization failed: {}", e);
            ResponseError::from(e)
        })
    }

    fn error(&self, status: StatusCode, message: Value) -> JsonResponse {
        self.with_value(status, &json!({ "error": message }))
    }

    fn with_value(&self, status: StatusCode, value: &Value) -> JsonResponse {
        self.respond(JsonResponse::new(status, self.serializer.encode(value)))
    }

    fn respond(&self, response: JsonResponse) -> JsonResponse {
        debug!(
            status = response.status().as_u16(),
            body_len = response.body().len(),
            "response built"
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SerializeError;
    use crate::shared::form::FormNode;
    use crate::shared::serializer::{GroupedObject, Ungrouped};
    use mockall::mock;

    mock! {
        pub Payload {}

        impl GroupSerialize for Payload {
            fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError>;
        }
    }

    struct Article {
        id: u64,
        title: String,
        body: String,
    }

    impl GroupSerialize for Article {
        fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError> {
            Ok(GroupedObject::new(groups)
                .field("id", &self.id, &[])?
                .field("title", &self.title, &[])?
                .field("body", &self.body, &["details"])?
                .finish())
        }
    }

    fn article() -> Article {
        Article {
            id: 3,
            title: "Rust".to_string(),
            body: "Ownership".to_string(),
        }
    }

    fn body_json(response: &JsonResponse) -> Value {
        serde_json::from_slice(response.body()).unwrap()
    }

    fn body_str(response: &JsonResponse) -> &str {
        std::str::from_utf8(response.body()).unwrap()
    }

    /* --------------------------------------------------
     * Error responses
     * -------------------------------------------------- */

    #[test]
    fn method_not_allowed_names_the_method() {
        let response = ResponseBuilder::default().method_not_allowed("DELETE");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_str(&response),
            r#"{"error":"The method DELETE is not allowed on this route."}"#
        );
    }

    #[test]
    fn bad_request_wraps_message() {
        let response = ResponseBuilder::default().bad_request("x");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.content_type(), Some("application/json"));
        assert_eq!(body_str(&response), r#"{"error":"x"}"#);
    }

    #[test]
    fn bad_request_accepts_structured_message() {
        let response = ResponseBuilder::default().bad_request(json!({"field": ["bad"]}));

        assert_eq!(body_json(&response), json!({"error": {"field": ["bad"]}}));
    }

    #[test]
    fn bad_form_renders_collected_tree() {
        let form = FormNode::new()
            .with_error("required")
            .with_child("email", FormNode::new().with_error("invalid"))
            .with_child("name", FormNode::new());

        let response = ResponseBuilder::default().bad_form(&form);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_str(&response),
            r#"{"error":{"_errors":["required"],"email":["invalid"]}}"#
        );
    }

    #[test]
    fn bad_form_on_valid_form_renders_empty_object() {
        let response = ResponseBuilder::default().bad_form(&FormNode::new());

        assert_eq!(body_str(&response), r#"{"error":{}}"#);
    }

    #[test]
    fn not_found_wraps_message() {
        let response = ResponseBuilder::default().not_found("Article not found");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(&response), json!({"error": "Article not found"}));
    }

    #[test]
    fn not_authorized_has_empty_body_and_json_content_type() {
        let response = ResponseBuilder::default().not_authorized();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.is_empty());
        assert_eq!(response.content_type(), Some("application/json"));
    }

    #[test]
    fn forbidden_access_renders_null_without_message() {
        let builder = ResponseBuilder::default();

        let without = builder.forbidden_access(None);
        let with = builder.forbidden_access(Some("Admins only"));

        assert_eq!(without.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_str(&without), r#"{"error":null}"#);
        assert_eq!(body_json(&with), json!({"error": "Admins only"}));
    }

    #[test]
    fn conflict_embeds_context_as_nested_value() {
        let response = ResponseBuilder::default()
            .conflict("Title already taken", &article(), None)
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_str(&response),
            r#"{"conflicts":"Title already taken","context":{"id":3,"title":"Rust"}}"#
        );
    }

    #[test]
    fn conflict_uses_requested_groups() {
        let groups = SerializationGroups::new(["details"]);
        let response = ResponseBuilder::default()
            .conflict("dup", &article(), Some(&groups))
            .unwrap();

        assert_eq!(
            body_json(&response)["context"],
            json!({"body": "Ownership"})
        );
    }

    #[test]
    fn internal_error_has_generic_message() {
        let response = ResponseBuilder::default().internal_error();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&response), json!({"error": INTERNAL_ERROR_MESSAGE}));
    }

    /* --------------------------------------------------
     * Success responses
     * -------------------------------------------------- */

    #[test]
    fn created_returns_item_without_envelope() {
        let response = ResponseBuilder::default().created(&article(), None).unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(&response), json!({"id": 3, "title": "Rust"}));
    }

    #[test]
    fn ok_serializes_item_or_null() {
        let builder = ResponseBuilder::default();

        let with = builder.ok(Some(&article()), None).unwrap();
        let without = builder.ok::<Article>(None, None).unwrap();

        assert_eq!(with.status(), StatusCode::OK);
        assert_eq!(body_json(&with), json!({"id": 3, "title": "Rust"}));
        assert_eq!(body_str(&without), "null");
    }

    #[test]
    fn ok_paginated_wraps_items_in_page_envelope() {
        let groups = SerializationGroups::new(["Default"]);
        let items = vec!["a".to_string(), "b".to_string()];

        let response = ResponseBuilder::default()
            .ok_paginated(&items, Some(&groups), 2, 1)
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_str(&response),
            r#"{"current_page_number":1,"num_items_per_page":2,"items":["a","b"]}"#
        );
    }

    #[test]
    fn ok_paginated_filters_items_by_group() {
        let groups = SerializationGroups::new(["details"]);

        let response = ResponseBuilder::default()
            .ok_paginated(&[article()], Some(&groups), 10, 3)
            .unwrap();

        let body = body_json(&response);
        assert_eq!(body["current_page_number"], 3);
        assert_eq!(body["num_items_per_page"], 10);
        assert_eq!(body["items"], json!([{"body": "Ownership"}]));
    }

    #[test]
    fn no_content_has_empty_body() {
        let response = ResponseBuilder::default().no_content();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.is_empty());
    }

    /* --------------------------------------------------
     * Serializer collaboration
     * -------------------------------------------------- */

    #[test]
    fn missing_groups_fall_back_to_configured_default() {
        let mut payload = MockPayload::new();
        payload
            .expect_to_group_value()
            .withf(|groups| groups.names() == vec!["list"])
            .times(1)
            .returning(|_| Ok(json!({"id": 1})));

        let builder = ResponseBuilder::new(JsonSerializer::new(), SerializationGroups::new(["list"]));
        let response = builder.created(&payload, None).unwrap();

        assert_eq!(body_json(&response), json!({"id": 1}));
    }

    #[test]
    fn explicit_groups_are_passed_through() {
        let mut payload = MockPayload::new();
        payload
            .expect_to_group_value()
            .withf(|groups| groups.names() == vec!["Default", "details"])
            .times(1)
            .returning(|_| Ok(json!([])));

        let groups = SerializationGroups::new(["Default", "details"]);
        let response = ResponseBuilder::default().ok(Some(&payload), Some(&groups));

        assert!(response.is_ok());
    }

    #[test]
    fn serializer_failure_surfaces_as_serialization_failed() {
        let mut payload = MockPayload::new();
        payload
            .expect_to_group_value()
            .returning(|_| Err(SerializeError::Custom("cyclic reference".to_string())));

        let builder = ResponseBuilder::default();

        let created = builder.created(&payload, None).unwrap_err();
        let conflict = builder.conflict("dup", &payload, None).unwrap_err();
        let page = builder
            .ok_paginated(std::slice::from_ref(&payload), None, 1, 1)
            .unwrap_err();

        for err in [created, conflict, page] {
            assert_eq!(
                err,
                ResponseError::SerializationFailed(SerializeError::Custom(
                    "cyclic reference".to_string()
                ))
            );
        }
    }

    /* --------------------------------------------------
     * Properties
     * -------------------------------------------------- */

    #[test]
    fn identical_inputs_yield_identical_bytes() {
        let builder = ResponseBuilder::default();
        let items = vec![Ungrouped(json!({"b": 1, "a": 2}))];

        let first = builder.ok_paginated(&items, None, 5, 2).unwrap();
        let second = builder.ok_paginated(&items, None, 5, 2).unwrap();

        assert_eq!(first.body(), second.body());
        assert_eq!(first.status(), second.status());
        assert_eq!(
            builder.method_not_allowed("PUT").body(),
            builder.method_not_allowed("PUT").body()
        );
    }

    #[test]
    fn pretty_config_indents_bodies() {
        let builder = ResponseBuilder::from_config(&ResponseConfig {
            default_groups: SerializationGroups::default(),
            pretty_json: true,
        });

        let response = builder.not_found("gone");

        assert_eq!(body_str(&response), "{\n  \"error\": \"gone\"\n}");
    }
}
