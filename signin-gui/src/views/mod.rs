mod user_authentication;

pub use user_authentication::{
    user_authentication, user_authentication_view, AUTHENTICATING, EMAIL_LABEL, INTRO, SIGN_IN,
    SUBTITLE, TITLE,
};
