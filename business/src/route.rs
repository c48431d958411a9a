//! Route state for page navigation.
//!
//! Navigating is writing a new [`Route`] into the state context; the app picks
//! the page to render from it every frame.

use serde::{Deserialize, Serialize};
use std::any::Any;
use userdesk_states::State;
use ustr::Ustr;

pub const USERS_PATH: &str = "/admin/users";
pub const ADD_USER_PATH: &str = "/admin/users/add-user";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Paginated users table.
    #[default]
    Users,
    /// User creation form.
    AddUser,
    /// Edit form for one user.
    EditUser(Ustr),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Users => USERS_PATH.to_owned(),
            Self::AddUser => ADD_USER_PATH.to_owned(),
            Self::EditUser(id) => format!("{USERS_PATH}/{id}"),
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        if path == USERS_PATH {
            return Some(Self::Users);
        }
        if path == ADD_USER_PATH {
            return Some(Self::AddUser);
        }
        match path.strip_prefix(USERS_PATH)?.strip_prefix('/') {
            Some(id) if !id.is_empty() && !id.contains('/') => Some(Self::EditUser(Ustr::from(id))),
            _ => None,
        }
    }
}

impl State for Route {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_default_is_users_table() {
        assert_eq!(Route::default(), Route::Users);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Users.path(), "/admin/users");
        assert_eq!(Route::AddUser.path(), "/admin/users/add-user");
        assert_eq!(
            Route::EditUser(Ustr::from("64b1f0")).path(),
            "/admin/users/64b1f0"
        );
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/admin/users/"), Some(Route::Users));
        assert_eq!(
            Route::from_path("/admin/users/add-user"),
            Some(Route::AddUser)
        );
        assert_eq!(
            Route::from_path("/admin/users/42"),
            Some(Route::EditUser(Ustr::from("42")))
        );
        assert_eq!(Route::from_path("/admin/users/42/extra"), None);
        assert_eq!(Route::from_path("/login"), None);
    }
}
