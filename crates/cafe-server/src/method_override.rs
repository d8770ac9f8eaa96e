//! `POST ?_method=PATCH` style method override
//!
//! HTML forms can only send GET and POST. Forms that edit or delete a cafe
//! post to `...?_method=PATCH` / `...?_method=DELETE`; this middleware rewrites
//! the method before routing so the request reaches the matching route.

use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};
use tracing::debug;

pub async fn method_override(mut req: Request, next: Next) -> Response {
    if req.method() == Method::POST {
        if let Some(method) = override_from_query(req.uri().query()) {
            debug!("Overriding POST {} as {}", req.uri().path(), method);
            *req.method_mut() = method;
        }
    }
    next.run(req).await
}

fn override_from_query(query: Option<&str>) -> Option<Method> {
    let (_, value) = query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "_method")?;

    match value.to_ascii_uppercase().as_str() {
        "PATCH" => Some(Method::PATCH),
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_from_query() {
        assert_eq!(override_from_query(Some("_method=PATCH")), Some(Method::PATCH));
        assert_eq!(override_from_query(Some("a=1&_method=delete")), Some(Method::DELETE));
        assert_eq!(override_from_query(Some("_method=GET")), None);
        assert_eq!(override_from_query(Some("method=PATCH")), None);
        assert_eq!(override_from_query(None), None);
    }
}
