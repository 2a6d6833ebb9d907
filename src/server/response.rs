use may_minihttp::Response;
use serde_json::Value;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// Write a response with a fixed content type and a pre-rendered body.
pub fn write_bytes(res: &mut Response, status: u16, content_type: &'static str, body: Vec<u8>) {
    res.status_code(status as usize, status_reason(status));
    res.header(content_type);
    res.body_vec(body);
}

pub fn write_json_error(res: &mut Response, status: u16, body: Value) {
    res.status_code(status as usize, status_reason(status));
    res.header("Content-Type: application/json");
    res.body_vec(body.to_string().into_bytes());
}
