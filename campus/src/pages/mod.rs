use campus_nav::prelude::{AuthState, Role};

use crate::Route;

pub mod login;
pub mod portal;

pub use login::Login;
pub use portal::Portal;

/// Where to send a visitor instead of the page they opened.
///
/// `requested` is the role in a portal URL, `None` for the login page.
/// A signed-in user always lands on their own portal; anyone else is sent
/// to sign in.
pub(crate) fn redirect_for(auth: AuthState, requested: Option<Role>) -> Option<Route> {
    match (auth.authenticated_role(), requested) {
        (Some(own), Some(role)) if own == role => None,
        (Some(own), _) => Some(Route::Portal { role: own }),
        (None, Some(_)) => Some(Route::Login {}),
        (None, None) => None,
    }
}
