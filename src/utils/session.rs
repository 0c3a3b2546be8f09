use actix_web::cookie::{Cookie, SameSite};
use actix_web::error::ErrorInternalServerError;
use actix_web::middleware::Next;
use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest,
    body::BoxBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
};
use derive_more::Display;
use futures::future::{Ready, ready};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "payroll_admin_sid";

/// Opaque per-browser key into the view-state store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn for_tests(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Makes sure every request carries a session id, issuing the cookie the
/// first time a browser shows up.
pub async fn session_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let existing = req
        .cookie(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| Uuid::parse_str(v).is_ok());

    let (session, issued) = match existing {
        Some(value) => (SessionId(value), false),
        None => (SessionId(Uuid::new_v4().to_string()), true),
    };

    req.extensions_mut().insert(session.clone());

    let mut res = next.call(req).await?;

    if issued {
        let cookie = Cookie::build(SESSION_COOKIE, session.0)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish();
        res.response_mut()
            .add_cookie(&cookie)
            .map_err(ErrorInternalServerError)?;
    }

    Ok(res)
}

impl FromRequest for SessionId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<SessionId>()
                .cloned()
                .ok_or_else(|| ErrorInternalServerError("Session middleware missing")),
        )
    }
}
