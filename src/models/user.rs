use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user record as published by the upstream directory.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: i64,  // PRIMARY IDENTIFIER - unique per upstream
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// `{"data": {...}}` wrapper returned by `GET users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub data: User,
}

/// One page of `GET users?page={n}`.
#[derive(Debug, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub data: Option<Vec<User>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn george() -> User {
        User {
            id: 1,
            first_name: Some("George".to_string()),
            last_name: Some("Bluth".to_string()),
            email: Some("george.bluth@reqres.in".to_string()),
            avatar: Some("https://reqres.in/img/faces/1-image.jpg".to_string()),
        }
    }

    #[test]
    fn test_user_round_trip() {
        let user = george();
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_uses_upstream_field_names() {
        let value = serde_json::to_value(george()).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["first_name"], "George");
        assert_eq!(value["last_name"], "Bluth");
        assert_eq!(value["email"], "george.bluth@reqres.in");
        assert_eq!(value["avatar"], "https://reqres.in/img/faces/1-image.jpg");
    }

    #[test]
    fn test_user_missing_fields_are_none() {
        let user: User = serde_json::from_str(r#"{"id": 7, "first_name": "Jane"}"#).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.first_name.as_deref(), Some("Jane"));
        assert!(user.last_name.is_none());
        assert!(user.email.is_none());
        assert!(user.avatar.is_none());
    }

    #[test]
    fn test_envelope_requires_data() {
        assert!(serde_json::from_str::<UserEnvelope>(r#"{"support": {}}"#).is_err());
        assert!(serde_json::from_str::<UserEnvelope>(r#"{"data": null}"#).is_err());

        let envelope: UserEnvelope = serde_json::from_str(r#"{"data": {"id": 2}}"#).unwrap();
        assert_eq!(envelope.data.id, 2);
    }

    #[test]
    fn test_page_defaults() {
        let page: UserPage = serde_json::from_str(r#"{"page": 3}"#).unwrap();
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 0);
        assert!(page.data.is_none());

        let page: UserPage =
            serde_json::from_str(r#"{"page": 1, "total_pages": 2, "data": []}"#).unwrap();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data, Some(vec![]));
    }

    #[test]
    fn test_page_accepts_negative_counts() {
        let page: UserPage =
            serde_json::from_str(r#"{"page": -1, "total_pages": -1, "data": [{"id": 1}]}"#)
                .unwrap();
        assert_eq!(page.page, -1);
        assert_eq!(page.total_pages, -1);
        assert_eq!(page.data.map(|d| d.len()), Some(1));
    }
}
