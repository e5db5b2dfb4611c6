pub mod use_auth_state;
pub mod use_session;

pub use use_auth_state::{use_auth_state, AuthHandle};
pub use use_session::{use_session, SessionHandle};
