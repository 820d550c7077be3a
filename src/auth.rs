use crate::errors::ClientError;
use crate::models::{AuthErrorKind, AuthOutcome, AuthReply, LoginRequest, SignupRequest};
use tracing::warn;

/// Page both flows land on after a successful reply.
pub const SUCCESS_REDIRECT: &str = "/recommend";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    Login,
    Signup,
}

impl AuthFlow {
    fn missing_fields(self) -> &'static str {
        match self {
            Self::Login => "Please fill all fields.",
            Self::Signup => "Account Not Created! Please fill all fields.",
        }
    }

    fn server_error(self) -> &'static str {
        match self {
            Self::Login => "Login failed! Server Error.",
            Self::Signup => "Account Not Created! Server Error.",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }
}

/// Trims every field; `None` when any of them ends up empty.
pub fn prepare_login(request: &LoginRequest) -> Option<LoginRequest> {
    let prepared = LoginRequest {
        email: request.email.trim().to_string(),
        password: request.password.trim().to_string(),
    };
    (!prepared.email.is_empty() && !prepared.password.is_empty()).then_some(prepared)
}

pub fn prepare_signup(request: &SignupRequest) -> Option<SignupRequest> {
    let prepared = SignupRequest {
        name: request.name.trim().to_string(),
        email: request.email.trim().to_string(),
        password: request.password.trim().to_string(),
    };
    let complete = !prepared.name.is_empty()
        && !prepared.email.is_empty()
        && !prepared.password.is_empty();
    complete.then_some(prepared)
}

pub fn missing_fields(flow: AuthFlow) -> AuthOutcome {
    AuthOutcome {
        ok: false,
        msg: flow.missing_fields().to_string(),
        error: Some(AuthErrorKind::Validation),
        redirect: None,
    }
}

pub fn settle(flow: AuthFlow, result: Result<AuthReply, ClientError>) -> AuthOutcome {
    match result {
        Ok(reply) if reply.ok => AuthOutcome {
            ok: true,
            msg: reply.msg,
            error: None,
            redirect: Some(SUCCESS_REDIRECT.to_string()),
        },
        Ok(reply) => AuthOutcome {
            ok: false,
            msg: reply.msg,
            error: Some(AuthErrorKind::Rejected),
            redirect: None,
        },
        Err(err) => {
            warn!(flow = flow.name(), "auth request failed: {err}");
            let kind = if err.is_network() {
                AuthErrorKind::Network
            } else {
                AuthErrorKind::Server
            };
            AuthOutcome {
                ok: false,
                msg: flow.server_error().to_string(),
                error: Some(kind),
                redirect: None,
            }
        }
    }
}
