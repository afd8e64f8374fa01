//! Endpoint handlers
//!
//! The two registered routes: a static greeting and the current server time.

use chrono::Local;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::http;

/// Greeting returned by `GET /`
pub const GREETING: &str = "Hello, AWS! Version 0.0.1";

/// Timestamp layout: `YYYY-MM-DDTHH:MM:SS.ffffff`, local time, no offset
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Response body for `GET /time`
#[derive(Debug, Serialize)]
struct TimeResponse {
    time: String,
}

/// `GET /` - static greeting as plain text
pub fn greeting() -> Response<Full<Bytes>> {
    http::build_text_response(GREETING)
}

/// `GET /time` - wall-clock time at request time, as JSON
pub fn current_time() -> Response<Full<Bytes>> {
    let body = TimeResponse {
        time: current_timestamp(),
    };
    http::json_response(StatusCode::OK, &body)
}

/// Format the current local time as an ISO-8601 string with microseconds
fn current_timestamp() -> String {
    Local::now().format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use http_body_util::BodyExt;

    const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    #[test]
    fn test_timestamp_is_iso8601() {
        let ts = current_timestamp();
        assert!(
            NaiveDateTime::parse_from_str(&ts, PARSE_FORMAT).is_ok(),
            "not ISO-8601: {ts}"
        );
    }

    #[test]
    fn test_timestamp_has_microsecond_precision() {
        let ts = current_timestamp();
        let (_, fraction) = ts.split_once('.').expect("missing fractional seconds");
        assert_eq!(fraction.len(), 6);
    }

    #[test]
    fn test_consecutive_timestamps_non_decreasing() {
        let a = NaiveDateTime::parse_from_str(&current_timestamp(), PARSE_FORMAT).unwrap();
        let b = NaiveDateTime::parse_from_str(&current_timestamp(), PARSE_FORMAT).unwrap();
        assert!(a <= b);
    }

    #[tokio::test]
    async fn test_greeting_response() {
        let resp = greeting();
        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain; charset=utf-8");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body.as_ref(), b"Hello, AWS! Version 0.0.1");
    }

    #[tokio::test]
    async fn test_time_response_shape() {
        let resp = current_time();
        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);

        let time = object["time"].as_str().unwrap();
        assert!(NaiveDateTime::parse_from_str(time, PARSE_FORMAT).is_ok());
    }
}
