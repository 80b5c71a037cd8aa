use actix_web::body::BoxBody;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde_json::Value;

/// Sent unchanged on every response.
pub(crate) const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
    ),
    ("Access-Control-Allow-Methods", "OPTIONS,GET"),
];

/// HTTP-shaped outcome of one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderResponse {
    pub status: StatusCode,
    pub headers: &'static [(&'static str, &'static str)],
    /// JSON text, empty for preflight
    pub body: String,
}

impl OrderResponse {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            headers: &CORS_HEADERS,
            body: body.to_string(),
        }
    }

    pub fn preflight() -> Self {
        Self {
            status: StatusCode::OK,
            headers: &CORS_HEADERS,
            body: String::new(),
        }
    }
}

impl Responder for OrderResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let mut builder = HttpResponse::build(self.status);
        for &header in self.headers {
            builder.insert_header(header);
        }
        if self.body.is_empty() {
            return builder.finish();
        }
        builder.insert_header(ContentType::json()).body(self.body)
    }
}
