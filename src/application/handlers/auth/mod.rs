mod login;

pub use login::{LoginCommand, LoginError, LoginHandler, LoginResult};
