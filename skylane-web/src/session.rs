//! Session identity maintained by the external auth flow.
//!
//! The identity is read once from browser storage and passed into
//! pages as an explicit context value, so booking logic never touches
//! ambient storage directly.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
const USER_ID_KEY: &str = "skylane.userId";
#[cfg(target_arch = "wasm32")]
const USER_EMAIL_KEY: &str = "skylane.userEmail";

/// The signed-in user, as far as this front end needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub email: Option<String>,
}

impl Session {
    /// Read the stored identity. `None` when nobody is signed in (or
    /// outside a browser, e.g. in server-side rendering tests).
    #[must_use]
    pub fn load() -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            use gloo::storage::{LocalStorage, Storage};
            let user_id: i64 = LocalStorage::get(USER_ID_KEY).ok()?;
            let email: Option<String> = LocalStorage::get(USER_EMAIL_KEY).ok();
            Some(Self { user_id, email })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo::storage::{LocalStorage, Storage};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn load_reads_stored_identity() {
        LocalStorage::set(USER_ID_KEY, 7_i64).unwrap();
        LocalStorage::set(USER_EMAIL_KEY, "user@example.com").unwrap();
        let session = Session::load().expect("identity stored");
        assert_eq!(session.user_id, 7);
        assert_eq!(session.email.as_deref(), Some("user@example.com"));
    }
}
