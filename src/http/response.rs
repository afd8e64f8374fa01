//! HTTP response building module
//!
//! Builders for the handful of responses this server produces, decoupled
//! from route logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::logger;

/// Build 200 plain-text response
pub fn build_text_response(content: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", content.len())
        .body(Full::new(Bytes::from_static(content.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("text", &e);
            fallback_500()
        })
}

/// Build JSON response from any serializable body
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"error":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| fallback_500());
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            fallback_500()
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            fallback_500()
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            fallback_500()
        })
}

/// Last-resort 500 response when a builder itself fails
fn fallback_500() -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(Bytes::from("500 Internal Server Error")));
    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    resp
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {kind} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_status() {
        let resp = build_404_response();
        assert_eq!(resp.status().as_u16(), 404);
    }

    #[test]
    fn test_405_advertises_allowed_method() {
        let resp = build_405_response();
        assert_eq!(resp.status().as_u16(), 405);
        assert_eq!(resp.headers()["Allow"], "GET");
    }

    #[test]
    fn test_text_response_headers() {
        let resp = build_text_response("hello");
        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain; charset=utf-8");
        assert_eq!(resp.headers()["Content-Length"], "5");
    }

    #[test]
    fn test_json_response_content_type() {
        #[derive(Serialize)]
        struct Body {
            ok: bool,
        }
        let resp = json_response(StatusCode::OK, &Body { ok: true });
        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
    }
}
