use reqwest::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
}

#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}
