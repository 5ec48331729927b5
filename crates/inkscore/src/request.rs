//! Request/response boundary
//!
//! The JSON shapes a web layer exchanges with the scorer, and the one
//! function that turns a request body into a status and a response. Bad
//! input is the caller's problem (400); everything past validation yields a
//! score, with 500 kept only as a last-resort net for panics.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use inkscore_core::{
    error::RequestError,
    types::{Point, StrokeTrace},
};

use crate::scorer::Scorer;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// A point as clients send it: `{"x": 1, "y": 2}` or `[1, 2]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WirePoint {
    Object { x: f64, y: f64 },
    Pair([f64; 2]),
}

impl From<WirePoint> for Point {
    fn from(point: WirePoint) -> Self {
        match point {
            WirePoint::Object { x, y } | WirePoint::Pair([x, y]) => Point::new(x as f32, y as f32),
        }
    }
}

/// Body of a scoring request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub points: Vec<WirePoint>,
    pub target_char: String,
}

impl ScoreRequest {
    pub fn new(points: &[Point], target: char) -> Self {
        Self {
            points: points
                .iter()
                .map(|p| WirePoint::Object {
                    x: p.x as f64,
                    y: p.y as f64,
                })
                .collect(),
            target_char: target.to_string(),
        }
    }

    /// Parse a JSON body; missing or mistyped fields are rejected
    pub fn parse(body: &str) -> Result<Self, RequestError> {
        serde_json::from_str(body).map_err(|e| RequestError::MalformedBody(e.to_string()))
    }

    /// The target as a single symbol
    pub fn target_symbol(&self) -> Result<char, RequestError> {
        let mut chars = self.target_char.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Ok(symbol),
            _ => Err(RequestError::InvalidTargetChar(self.target_char.clone())),
        }
    }

    pub fn trace(&self) -> StrokeTrace {
        self.points.iter().copied().map(Point::from).collect()
    }
}

/// What goes back to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreResponse {
    Score { score: u8 },
    Error { error: String },
}

impl ScoreResponse {
    pub fn error(message: impl Into<String>) -> Self {
        ScoreResponse::Error {
            error: message.into(),
        }
    }

    pub fn to_json(&self) -> String {
        // Both variants are plain structs of strings and integers
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Score an already-parsed request
pub fn handle(scorer: &Scorer, request: &ScoreRequest) -> (u16, ScoreResponse) {
    let symbol = match request.target_symbol() {
        Ok(symbol) => symbol,
        Err(err) => return (STATUS_BAD_REQUEST, ScoreResponse::error(err.to_string())),
    };
    let trace = request.trace();

    match catch_unwind(AssertUnwindSafe(|| scorer.score(&trace, symbol))) {
        Ok(score) => (
            STATUS_OK,
            ScoreResponse::Score {
                score: score.value(),
            },
        ),
        Err(_) => {
            log::error!("scorer panicked on {:?} with {} points", symbol, trace.len());
            (
                STATUS_INTERNAL_ERROR,
                ScoreResponse::error("internal scoring error"),
            )
        },
    }
}

/// Parse, validate and score a JSON request body
pub fn handle_request(scorer: &Scorer, body: &str) -> (u16, ScoreResponse) {
    match ScoreRequest::parse(body) {
        Ok(request) => handle(scorer, &request),
        Err(err) => {
            log::debug!("rejected request: {}", err);
            (STATUS_BAD_REQUEST, ScoreResponse::error(err.to_string()))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;

    fn scorer() -> Scorer {
        Scorer::from_config(ScoringConfig::builtin_font_only()).unwrap()
    }

    #[test]
    fn test_points_accept_objects_and_pairs() {
        let request =
            ScoreRequest::parse(r#"{"points":[{"x":1,"y":2.5},[3,4]],"target_char":"一"}"#)
                .unwrap();
        assert_eq!(
            request.trace(),
            vec![Point::new(1.0, 2.5), Point::new(3.0, 4.0)]
        );
        assert_eq!(request.target_symbol(), Ok('一'));
    }

    #[test]
    fn test_target_char_must_be_one_symbol() {
        for target in ["", "一二"] {
            let request = ScoreRequest {
                points: Vec::new(),
                target_char: target.to_string(),
            };
            assert_eq!(
                request.target_symbol(),
                Err(RequestError::InvalidTargetChar(target.to_string()))
            );
        }
    }

    #[test]
    fn test_empty_points_score_zero() {
        let (status, response) = handle_request(&scorer(), r#"{"points":[],"target_char":"心"}"#);
        assert_eq!(status, STATUS_OK);
        assert_eq!(response, ScoreResponse::Score { score: 0 });
        assert_eq!(response.to_json(), r#"{"score":0}"#);
    }

    #[test]
    fn test_missing_field_is_bad_request() {
        let (status, response) = handle_request(&scorer(), r#"{"points":[]}"#);
        assert_eq!(status, STATUS_BAD_REQUEST);
        assert!(matches!(response, ScoreResponse::Error { .. }));
        assert!(response.to_json().starts_with(r#"{"error":"#));
    }

    #[test]
    fn test_non_json_is_bad_request() {
        let (status, _) = handle_request(&scorer(), "points=1");
        assert_eq!(status, STATUS_BAD_REQUEST);
    }

    #[test]
    fn test_multi_char_target_is_bad_request() {
        let (status, response) =
            handle_request(&scorer(), r#"{"points":[[1,1]],"target_char":"ab"}"#);
        assert_eq!(status, STATUS_BAD_REQUEST);
        assert_eq!(
            response,
            ScoreResponse::error(r#"target_char must be exactly one character, got "ab""#)
        );
    }

    #[test]
    fn test_request_round_trip_through_new() {
        let points = [Point::new(0.5, 1.0), Point::new(2.0, 3.0)];
        let request = ScoreRequest::new(&points, '火');
        assert_eq!(request.trace(), points.to_vec());
        assert_eq!(request.target_char, "火");
    }
}
