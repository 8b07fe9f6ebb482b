// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application routes and the access guard for protected views.

use crate::auth::AuthContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Landing,
    SignIn,
    SignUp,
    AuthCallback,
    Home,
    Upload,
    Sessions,
    SessionDetail(String),
    Profile,
}

/// Outcome of checking a route against the auth context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Access {
    Granted,
    Loading,
    Redirect(Route),
}

impl Route {
    /// Parses an application path such as `/session/42`. Unknown paths are
    /// `None`.
    pub(crate) fn parse(path: &str) -> Option<Route> {
        let path = path.trim();
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let route = match segments.as_slice() {
            [] => Route::Landing,
            ["signin"] => Route::SignIn,
            ["signup"] => Route::SignUp,
            ["auth", "callback"] => Route::AuthCallback,
            ["home"] => Route::Home,
            ["upload"] => Route::Upload,
            ["session"] => Route::Sessions,
            ["session", id] => Route::SessionDetail(id.to_string()),
            ["profile"] => Route::Profile,
            _ => return None,
        };

        Some(route)
    }

    pub(crate) fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::SignIn => "/signin".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::AuthCallback => "/auth/callback".to_string(),
            Route::Home => "/home".to_string(),
            Route::Upload => "/upload".to_string(),
            Route::Sessions => "/session".to_string(),
            Route::SessionDetail(id) => format!("/session/{}", id),
            Route::Profile => "/profile".to_string(),
        }
    }

    pub(crate) fn is_protected(&self) -> bool {
        !matches!(
            self,
            Route::Landing | Route::SignIn | Route::SignUp | Route::AuthCallback
        )
    }

    pub(crate) fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Welcome",
            Route::SignIn => "Sign in",
            Route::SignUp => "Sign up",
            Route::AuthCallback => "Completing sign in",
            Route::Home => "Home",
            Route::Upload => "Upload",
            Route::Sessions => "Sessions",
            Route::SessionDetail(_) => "Session",
            Route::Profile => "Profile",
        }
    }
}

/// Decides whether `route` may be shown. Protected routes wait while the
/// initial session lookup is outstanding and otherwise require a user.
pub(crate) fn guard(route: &Route, auth: &AuthContext) -> Access {
    if !route.is_protected() {
        Access::Granted
    } else if auth.is_loading() {
        Access::Loading
    } else if auth.is_signed_in() {
        Access::Granted
    } else {
        Access::Redirect(Route::SignIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{identity::AuthEvent, model::identity_fixture};

    #[test]
    fn test_parse_and_path() {
        let paths = [
            "/",
            "/signin",
            "/signup",
            "/auth/callback",
            "/home",
            "/upload",
            "/session",
            "/session/abc",
            "/profile",
        ];

        for path in paths {
            let route = Route::parse(path).unwrap();
            assert_eq!(route.path(), path);
        }

        assert_eq!(Route::parse("session/7/"), Some(Route::SessionDetail("7".into())));
        assert_eq!(Route::parse("/nowhere"), None);
        assert_eq!(Route::parse("/session/1/tracks"), None);
    }

    #[test]
    fn test_public_routes_always_granted() {
        let auth = AuthContext::new();
        for route in [Route::Landing, Route::SignIn, Route::SignUp, Route::AuthCallback] {
            assert_eq!(guard(&route, &auth), Access::Granted);
        }
    }

    #[test]
    fn test_protected_routes_redirect_without_user() {
        let mut auth = AuthContext::new();
        auth.apply(&AuthEvent::InitialSession(None));

        for route in [
            Route::Home,
            Route::Upload,
            Route::Sessions,
            Route::SessionDetail("1".into()),
            Route::Profile,
        ] {
            assert_eq!(guard(&route, &auth), Access::Redirect(Route::SignIn));
        }
    }

    #[test]
    fn test_protected_route_waits_then_resolves() {
        let mut auth = AuthContext::new();
        assert_eq!(guard(&Route::Home, &auth), Access::Loading);

        auth.apply(&AuthEvent::InitialSession(Some(identity_fixture("u1"))));
        assert_eq!(guard(&Route::Home, &auth), Access::Granted);
    }
}
