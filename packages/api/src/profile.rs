//! Profile read/update for the current user.
//!
//! CV files belong to the blob-storage collaborator; the profile record
//! only carries the resulting `cv_url` for display.

use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;
use crate::models::ProfileData;

/// Resource path for the current user's profile.
pub const PROFILE_PATH: &str = "/profile";

pub async fn get_profile<H: HttpBackend>(client: &ApiClient<H>) -> Result<ProfileData, ApiError> {
    client.get(PROFILE_PATH).await
}

/// Persist the editable profile fields; returns the server's echo.
pub async fn update_profile<H: HttpBackend>(
    client: &ApiClient<H>,
    profile: &ProfileData,
) -> Result<ProfileData, ApiError> {
    client
        .put(
            PROFILE_PATH,
            json!({
                "name": profile.name.trim(),
                "skills": profile.skills,
                "experience": profile.experience,
                "cv_url": profile.cv_url,
            }),
        )
        .await
}

#[cfg(test)]
mod tests {
    use store::{Role, SessionStore, UserInfo};

    use super::*;
    use crate::testing::FakeBackend;

    #[tokio::test]
    async fn update_sends_editable_fields_only() {
        let fake = FakeBackend::new();
        fake.push_json(
            200,
            r#"{"name":"Mira","email":"mira@example.com","skills":"Rust","experience":"3 years","cv_url":""}"#,
        );
        let session = SessionStore::in_memory();
        session.login(
            "tok".into(),
            UserInfo {
                id: 1,
                email: "mira@example.com".into(),
                name: "Mira".into(),
                role: Role::JobSeeker,
            },
        );
        let client = ApiClient::new(fake.clone(), session);

        let profile = ProfileData {
            name: " Mira ".into(),
            email: "mira@example.com".into(),
            skills: "Rust".into(),
            experience: "3 years".into(),
            cv_url: String::new(),
        };
        let echoed = update_profile(&client, &profile).await.unwrap();
        assert_eq!(echoed.name, "Mira");

        let body = fake.recorded()[0].body.clone().unwrap();
        assert_eq!(body["name"], "Mira");
        // Email is read-only and never submitted.
        assert!(body.get("email").is_none());
    }
}
