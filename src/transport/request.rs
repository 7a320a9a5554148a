use serde_json::{Map, Value};

use crate::domain::{HttpMethod, Token};

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// A fully shaped HTTP request, ready to hand to an
/// [`HttpTransport`](crate::client::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl OutboundRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Append the token as the last parameter, dropping any caller-supplied `token`.
pub fn merge_token(mut params: Vec<(String, String)>, token: &Token) -> Vec<(String, String)> {
    params.retain(|(key, _)| key != Token::FIELD);
    params.push((Token::FIELD.to_owned(), token.as_str().to_owned()));
    params
}

/// GET carries `params` in the query string, POST as a JSON object body. Both keep the
/// parameter order.
pub fn build_request(
    url: String,
    method: HttpMethod,
    params: Vec<(String, String)>,
) -> OutboundRequest {
    match method {
        HttpMethod::Get => {
            let mut url = url;
            if !params.is_empty() {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(&params)
                    .finish();
                url.push(if url.contains('?') { '&' } else { '?' });
                url.push_str(&query);
            }
            OutboundRequest {
                method,
                url,
                headers: Vec::new(),
                body: None,
            }
        }
        HttpMethod::Post => {
            let body = params
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect::<Map<String, Value>>();
            OutboundRequest {
                method,
                url,
                headers: vec![("Content-Type".to_owned(), CONTENT_TYPE_JSON.to_owned())],
                body: Some(Value::Object(body).to_string()),
            }
        }
    }
}
