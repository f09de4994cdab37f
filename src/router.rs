// SPDX-License-Identifier: MPL-2.0
//! View routing: the path table and its auth guards.
//!
//! The router is a pure lookup layer. It maps URL paths to view identifiers
//! and applies two guard predicates against the current session: pages that
//! require a login redirect anonymous visitors to [`Route::Login`], and
//! guest-only pages (the auth forms) redirect logged-in users to
//! [`Route::Home`]. Rendering the resolved view is out of scope.

/// Views the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Live race view for a specific race id.
    LiveRace(i64),
    Leaderboard,
    Login,
    Register,
    /// The current user's prediction history.
    MyPredictions,
}

/// Guard predicates attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Guard {
    /// Only reachable with an active session.
    pub requires_auth: bool,
    /// Only reachable without one (login/register forms).
    pub guest_only: bool,
}

/// Outcome of resolving a path against the route table and session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The path matched and the guards passed.
    Matched(Route),
    /// The path matched but a guard redirected elsewhere.
    Redirect { to: Route, from: Route },
    /// No route matched the path.
    NotFound,
}

impl Route {
    /// Parses a URL path into a route.
    ///
    /// Query strings are ignored; a trailing slash is tolerated. The race id
    /// segment must be an integer.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            // Race ids are positive database keys; negatives and zero
            // would break the parse/path inverse.
            ["race", id] => id
                .parse::<i64>()
                .ok()
                .filter(|id| *id > 0)
                .map(Route::LiveRace),
            ["leaderboard"] => Some(Route::Leaderboard),
            ["login"] => Some(Route::Login),
            ["register"] => Some(Route::Register),
            ["predictions"] => Some(Route::MyPredictions),
            _ => None,
        }
    }

    /// Returns the canonical path for this route (inverse of [`parse`]).
    ///
    /// [`parse`]: Route::parse
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::LiveRace(id) => format!("/race/{}", id),
            Route::Leaderboard => "/leaderboard".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::MyPredictions => "/predictions".to_string(),
        }
    }

    /// Returns the view name, matching the frontend component names.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::LiveRace(_) => "LiveRace",
            Route::Leaderboard => "Leaderboard",
            Route::Login => "Login",
            Route::Register => "Register",
            Route::MyPredictions => "MyPredictions",
        }
    }

    /// Returns the guard predicates for this route.
    #[must_use]
    pub fn guard(&self) -> Guard {
        match self {
            Route::Login | Route::Register => Guard {
                guest_only: true,
                ..Guard::default()
            },
            Route::MyPredictions => Guard {
                requires_auth: true,
                ..Guard::default()
            },
            _ => Guard::default(),
        }
    }
}

/// Resolves a path against the route table and the current session state.
#[must_use]
pub fn resolve(path: &str, logged_in: bool) -> Resolution {
    let Some(route) = Route::parse(path) else {
        return Resolution::NotFound;
    };

    let guard = route.guard();
    if guard.requires_auth && !logged_in {
        return Resolution::Redirect {
            to: Route::Login,
            from: route,
        };
    }
    if guard.guest_only && logged_in {
        return Resolution::Redirect {
            to: Route::Home,
            from: route,
        };
    }

    Resolution::Matched(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_root_path() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
    }

    #[test]
    fn parse_race_path_with_id() {
        assert_eq!(Route::parse("/race/3"), Some(Route::LiveRace(3)));
    }

    #[test]
    fn parse_rejects_non_integer_race_id() {
        assert_eq!(Route::parse("/race/monaco"), None);
    }

    #[test]
    fn parse_rejects_non_positive_race_ids() {
        assert_eq!(Route::parse("/race/-5"), None);
        assert_eq!(Route::parse("/race/0"), None);
    }

    #[test]
    fn parse_tolerates_trailing_slash_and_query() {
        assert_eq!(Route::parse("/leaderboard/"), Some(Route::Leaderboard));
        assert_eq!(Route::parse("/race/3?lap=23"), Some(Route::LiveRace(3)));
    }

    #[test]
    fn parse_unknown_path_is_none() {
        assert_eq!(Route::parse("/garage"), None);
        assert_eq!(Route::parse("/race"), None);
        assert_eq!(Route::parse("/race/1/extra"), None);
    }

    #[test]
    fn path_is_inverse_of_parse() {
        let routes = [
            Route::Home,
            Route::LiveRace(42),
            Route::Leaderboard,
            Route::Login,
            Route::Register,
            Route::MyPredictions,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn public_routes_have_no_guards() {
        for route in [Route::Home, Route::LiveRace(1), Route::Leaderboard] {
            assert_eq!(route.guard(), Guard::default());
        }
    }

    #[test]
    fn predictions_requires_auth() {
        assert_eq!(
            resolve("/predictions", false),
            Resolution::Redirect {
                to: Route::Login,
                from: Route::MyPredictions
            }
        );
        assert_eq!(
            resolve("/predictions", true),
            Resolution::Matched(Route::MyPredictions)
        );
    }

    #[test]
    fn auth_forms_are_guest_only() {
        assert_eq!(
            resolve("/login", true),
            Resolution::Redirect {
                to: Route::Home,
                from: Route::Login
            }
        );
        assert_eq!(resolve("/login", false), Resolution::Matched(Route::Login));
        assert_eq!(
            resolve("/register", true),
            Resolution::Redirect {
                to: Route::Home,
                from: Route::Register
            }
        );
    }

    #[test]
    fn unknown_path_resolves_to_not_found() {
        assert_eq!(resolve("/nope", false), Resolution::NotFound);
    }
}
