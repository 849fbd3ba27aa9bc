//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{CreateUserDto, UpdateUserDto, User};

/// User API representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub age: Option<i32>,
    pub city: Option<String>,
    pub zip_code: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            age: u.age,
            city: u.city,
            zip_code: u.zip_code,
            is_deleted: u.is_deleted,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Create user request. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub age: Option<i32>,
    pub city: Option<String>,
    /// Exactly six characters
    #[validate(length(equal = 6, message = "must be exactly 6 characters"))]
    #[schema(min_length = 6, max_length = 6)]
    pub zip_code: String,
}

impl From<CreateUserRequest> for CreateUserDto {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            email: r.email,
            name: r.name,
            age: r.age,
            city: r.city,
            zip_code: r.zip_code,
        }
    }
}

/// Update user request
///
/// Only these fields can change; `id`, `isDeleted` and the timestamps are
/// silently ignored if sent. An explicit `null` clears `age` or `city`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_with::rust::double_option::deserialize")]
    #[schema(value_type = Option<i32>)]
    pub age: Option<Option<i32>>,
    #[serde(default, deserialize_with = "serde_with::rust::double_option::deserialize")]
    #[schema(value_type = Option<String>)]
    pub city: Option<Option<String>>,
    #[validate(length(equal = 6, message = "must be exactly 6 characters"))]
    #[schema(min_length = 6, max_length = 6)]
    pub zip_code: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUserDto {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            email: r.email,
            name: r.name,
            age: r.age,
            city: r.city,
            zip_code: r.zip_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_request(value: serde_json::Value) -> CreateUserRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn shaping_keeps_exactly_the_record_fields() {
        let request = create_request(json!({
            "email": "test@example.com",
            "name": "Test User",
            "age": 25,
            "city": "Test City",
            "zipCode": "123456",
            "isDeleted": true,
            "role": "admin"
        }));

        assert_eq!(
            CreateUserDto::from(request),
            CreateUserDto {
                email: "test@example.com".into(),
                name: "Test User".into(),
                age: Some(25),
                city: Some("Test City".into()),
                zip_code: "123456".into(),
            }
        );
    }

    #[test]
    fn zip_code_must_be_six_characters() {
        let base = json!({"email": "test@example.com", "name": "Test User"});
        for (zip, ok) in [("123456", true), ("AB12CD", true), ("12345", false), ("1234567", false), ("", false)] {
            let mut body = base.clone();
            body["zipCode"] = json!(zip);
            assert_eq!(create_request(body).validate().is_ok(), ok, "zip {zip:?}");
        }
    }

    #[test]
    fn email_and_name_are_checked() {
        let bad_email = create_request(json!({"email": "nope", "name": "A", "zipCode": "123456"}));
        assert!(bad_email.validate().is_err());

        let empty_name = create_request(json!({"email": "a@b.com", "name": "", "zipCode": "123456"}));
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn update_ignores_protected_fields() {
        let request: UpdateUserRequest = serde_json::from_value(json!({
            "name": "B",
            "isDeleted": true,
            "id": "00000000-0000-0000-0000-000000000000"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(
            UpdateUserDto::from(request),
            UpdateUserDto {
                name: Some("B".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn update_validates_present_fields_only() {
        let empty: UpdateUserRequest = serde_json::from_value(json!({})).unwrap();
        assert!(empty.validate().is_ok());

        let bad_zip: UpdateUserRequest = serde_json::from_value(json!({"zipCode": "12"})).unwrap();
        assert!(bad_zip.validate().is_err());
    }

    #[test]
    fn update_null_clears_optional_fields() {
        let request: UpdateUserRequest =
            serde_json::from_value(json!({"age": null, "city": "Y"})).unwrap();

        assert_eq!(
            UpdateUserDto::from(request),
            UpdateUserDto {
                age: Some(None),
                city: Some(Some("Y".into())),
                ..Default::default()
            }
        );
    }

    #[test]
    fn user_dto_uses_camel_case() {
        let now = Utc::now();
        let dto = UserDto::from(User {
            id: Uuid::new_v4(),
            email: "a@b.com".into(),
            name: "A".into(),
            age: Some(20),
            city: Some("X".into()),
            zip_code: "123456".into(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        });

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["zipCode"], "123456");
        assert_eq!(value["isDeleted"], false);
        assert!(value.get("zip_code").is_none());
        assert!(value["createdAt"].is_string());
    }
}
