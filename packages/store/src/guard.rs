//! Route admission — the single authorization chokepoint.
//!
//! Every role-restricted capability routes through [`admit`] instead of
//! comparing roles inline. The function is pure: given the session snapshot
//! and the route's role requirement it yields a [`Decision`], and the caller
//! (router shell, lifecycle operation) interprets the decision.

use crate::models::{Role, Session};

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The view may render / the operation may proceed.
    Allow,
    /// No authenticated session; send the actor to the login page.
    RedirectLogin,
    /// Authenticated but the wrong role; send the actor home.
    RedirectHome,
}

/// Decide whether the current actor may use a view or operation.
///
/// With no role requirement, any authenticated session is admitted. With a
/// requirement, the session must exist and carry that role.
pub fn admit(session: Option<&Session>, required: Option<Role>) -> Decision {
    let Some(session) = session else {
        return Decision::RedirectLogin;
    };

    match required {
        Some(role) if session.role() != role => Decision::RedirectHome,
        _ => Decision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserInfo;

    fn session(role: Role) -> Session {
        Session {
            token: "tok".into(),
            user: UserInfo {
                id: 1,
                email: "a@b.co".into(),
                name: "A".into(),
                role,
            },
        }
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        assert_eq!(admit(None, None), Decision::RedirectLogin);
        assert_eq!(admit(None, Some(Role::Employer)), Decision::RedirectLogin);
    }

    #[test]
    fn authenticated_without_requirement_is_allowed() {
        let s = session(Role::JobSeeker);
        assert_eq!(admit(Some(&s), None), Decision::Allow);
    }

    #[test]
    fn wrong_role_is_sent_home() {
        let s = session(Role::JobSeeker);
        assert_eq!(admit(Some(&s), Some(Role::Employer)), Decision::RedirectHome);
    }

    #[test]
    fn matching_role_is_allowed() {
        let employer = session(Role::Employer);
        assert_eq!(admit(Some(&employer), Some(Role::Employer)), Decision::Allow);

        let seeker = session(Role::JobSeeker);
        assert_eq!(admit(Some(&seeker), Some(Role::JobSeeker)), Decision::Allow);
    }
}
