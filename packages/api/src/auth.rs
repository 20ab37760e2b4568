//! # Authentication — login and registration
//!
//! Both operations validate locally first (nothing malformed is ever sent),
//! then call the auth endpoints and, on success, hand the returned
//! credential pair to the [`SessionStore`] — which persists it and swaps
//! the in-memory session atomically.
//!
//! Registration deployments may require email verification, in which case
//! the register response carries no token; [`RegisterOutcome`] makes that
//! case explicit so the view can show the "check your inbox" step.

use serde::Deserialize;
use serde_json::json;
use store::{Role, Session, UserInfo};

use crate::client::ApiClient;
use crate::error::{FormError, ValidationErrors};
use crate::http::HttpBackend;

/// Login form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::JobSeeker,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: UserInfo,
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    #[serde(default)]
    token: Option<String>,
    user: UserInfo,
}

/// What a successful registration led to.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    /// The server issued a token right away; the session is live.
    LoggedIn(Session),
    /// Email verification is pending; no session was created.
    VerificationPending,
}

fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

/// Field checks for the login form. Performed before any request is sent.
pub fn validate_login(form: &LoginForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if form.email.trim().is_empty() {
        errors.push("email", "Email is required");
    }
    if form.password.is_empty() {
        errors.push("password", "Password is required");
    }
    errors.into_result()
}

/// Field checks for the registration form.
pub fn validate_registration(form: &RegisterForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if form.name.trim().is_empty() {
        errors.push("name", "Name is required");
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.push("email", "Email is required");
    } else if !valid_email(email) {
        errors.push("email", "Invalid email format");
    }

    if form.password.is_empty() {
        errors.push("password", "Password is required");
    } else if form.password.len() < 8 {
        errors.push("password", "Password must be at least 8 characters");
    }

    if form.password != form.confirm_password {
        errors.push("confirm_password", "Passwords do not match");
    }

    errors.into_result()
}

/// Authenticate and establish the session.
pub async fn login<H: HttpBackend>(
    client: &ApiClient<H>,
    form: &LoginForm,
) -> Result<Session, FormError> {
    validate_login(form)?;

    let response: LoginResponse = client
        .post(
            "/auth/login",
            Some(json!({
                "email": form.email.trim(),
                "password": form.password,
            })),
        )
        .await?;

    client
        .session()
        .login(response.token.clone(), response.user.clone());
    Ok(Session {
        token: response.token,
        user: response.user,
    })
}

/// Create an account; logs the session in when the server returns a token.
pub async fn register<H: HttpBackend>(
    client: &ApiClient<H>,
    form: &RegisterForm,
) -> Result<RegisterOutcome, FormError> {
    validate_registration(form)?;

    let response: RegisterResponse = client
        .post(
            "/auth/register",
            Some(json!({
                "name": form.name.trim(),
                "email": form.email.trim(),
                "password": form.password,
                "role": form.role,
            })),
        )
        .await?;

    match response.token {
        Some(token) => {
            client.session().login(token.clone(), response.user.clone());
            Ok(RegisterOutcome::LoggedIn(Session {
                token,
                user: response.user,
            }))
        }
        None => Ok(RegisterOutcome::VerificationPending),
    }
}

#[cfg(test)]
mod tests {
    use store::SessionStore;

    use super::*;
    use crate::error::ApiError;
    use crate::testing::FakeBackend;

    fn client(fake: &FakeBackend) -> ApiClient<FakeBackend> {
        ApiClient::new(fake.clone(), SessionStore::in_memory())
    }

    fn filled_register_form() -> RegisterForm {
        RegisterForm {
            name: "Sari".into(),
            email: "sari@example.com".into(),
            password: "hunter2hunter2".into(),
            confirm_password: "hunter2hunter2".into(),
            role: Role::Employer,
        }
    }

    #[test]
    fn login_validation_flags_missing_fields() {
        let errors = validate_login(&LoginForm::default()).unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn registration_validation_rules() {
        let mut form = filled_register_form();
        form.email = "not-an-email".into();
        form.password = "short".into();
        form.confirm_password = "different".into();

        let errors = validate_registration(&form).unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email format"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(
            errors.get("confirm_password"),
            Some("Passwords do not match")
        );
        assert!(errors.get("name").is_none());
    }

    #[tokio::test]
    async fn invalid_login_sends_no_request() {
        let fake = FakeBackend::new();
        let client = client(&fake);

        let err = login(&client, &LoginForm::default()).await.unwrap_err();
        assert!(matches!(err, FormError::Invalid(_)));
        assert_eq!(fake.request_count(), 0);
    }

    #[tokio::test]
    async fn successful_login_establishes_the_session() {
        let fake = FakeBackend::new();
        fake.push_json(
            200,
            r#"{"token":"tok-9","user":{"id":3,"email":"sari@example.com","name":"Sari","role":"employer"}}"#,
        );
        let client = client(&fake);

        let form = LoginForm {
            email: "sari@example.com".into(),
            password: "hunter2hunter2".into(),
        };
        let session = login(&client, &form).await.unwrap();

        assert_eq!(session.token, "tok-9");
        assert_eq!(client.session().current(), Some(session));
        assert_eq!(fake.recorded()[0].path, "/auth/login");
    }

    #[tokio::test]
    async fn failed_login_surfaces_the_server_message() {
        let fake = FakeBackend::new();
        fake.push_json(400, r#"{"message":"Invalid email or password"}"#);
        let client = client(&fake);

        let form = LoginForm {
            email: "sari@example.com".into(),
            password: "wrong-password".into(),
        };
        let err = login(&client, &form).await.unwrap_err();
        assert_eq!(
            err,
            FormError::Api(ApiError::Business("Invalid email or password".into()))
        );
        assert!(client.session().current().is_none());
    }

    #[tokio::test]
    async fn register_without_token_leaves_session_anonymous() {
        let fake = FakeBackend::new();
        fake.push_json(
            200,
            r#"{"user":{"id":4,"email":"sari@example.com","name":"Sari","role":"employer"}}"#,
        );
        let client = client(&fake);

        let outcome = register(&client, &filled_register_form()).await.unwrap();
        assert_eq!(outcome, RegisterOutcome::VerificationPending);
        assert!(client.session().current().is_none());
    }

    #[tokio::test]
    async fn register_with_token_logs_in() {
        let fake = FakeBackend::new();
        fake.push_json(
            200,
            r#"{"token":"tok-4","user":{"id":4,"email":"sari@example.com","name":"Sari","role":"employer"}}"#,
        );
        let client = client(&fake);

        let outcome = register(&client, &filled_register_form()).await.unwrap();
        assert!(matches!(outcome, RegisterOutcome::LoggedIn(_)));
        assert!(client.session().is_authenticated());

        let body = fake.recorded()[0].body.clone().unwrap();
        assert_eq!(body["role"], "employer");
    }
}
