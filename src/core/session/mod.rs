//! Client-side session lifecycle
//!
//! Two states, logged out (initial) and logged in. `login` is the only way
//! in; `logout` and a rejected token are the only ways out.

mod model;
mod navigation;
mod storage;
mod store;

pub use model::{AuthToken, EmptyTokenError, Role, Session, User, UserUpdate};
pub use navigation::{HOME_PATH, LOGIN_PATH, LoginRedirect, Navigator};
pub use storage::{MemoryStorage, SESSION_KEY, SessionStorage, StorageError, TOKEN_KEY};
pub use store::SessionStore;
