//! HTTP Surface
//!
//! One endpoint, `POST /compile`. Each request is handled on its own
//! thread so a panicking handler cannot take down the accept loop, and no
//! state is shared between requests beyond the read-only toolchain config.

pub mod handlers;

use std::io::Read;
use std::sync::Arc;
use std::thread;

use anyhow::{Result, anyhow};
use tiny_http::{Header, Method, Request, Response, Server};

use crate::config::Config;
use crate::toolchain::Toolchain;
use self::handlers::ApiResponse;

/// Bind the listener and serve requests until the process exits.
pub fn serve(config: Config) -> Result<()> {
    let addr = config.listen_addr();
    let server = Server::http(&addr).map_err(|e| anyhow!("binding {addr}: {e}"))?;
    log::info!("listening on http://{addr}");

    let toolchain = Arc::new(Toolchain::from_config(&config));
    let allow_origin: Arc<str> = config.allow_origin.into();

    for request in server.incoming_requests() {
        let toolchain = Arc::clone(&toolchain);
        let allow_origin = Arc::clone(&allow_origin);
        thread::spawn(move || handle_request(request, &toolchain, &allow_origin));
    }

    Ok(())
}

fn handle_request(mut request: Request, toolchain: &Toolchain, allow_origin: &str) {
    log::info!("{} {}", request.method(), request.url());

    let (code, reply) = match (request.method(), request.url()) {
        // CORS preflight for the browser editor front end.
        (Method::Options, _) => {
            respond_preflight(request, allow_origin);
            return;
        }
        (Method::Post, "/compile") => {
            let mut body = String::new();
            match request.as_reader().read_to_string(&mut body) {
                Ok(_) => handlers::handle_compile(&body, toolchain),
                Err(err) => (
                    400,
                    ApiResponse::BadRequest {
                        message: format!("unreadable request body: {err}"),
                    },
                ),
            }
        }
        (_, url) => handlers::not_found(url),
    };

    respond_json(request, code, &reply, allow_origin);
}

fn respond_json(request: Request, code: u16, reply: &ApiResponse, allow_origin: &str) {
    let body = serde_json::to_string(reply).unwrap_or_else(|_| String::from("{}"));
    let response = Response::from_string(body)
        .with_status_code(code)
        .with_header(header("Content-Type", "application/json"))
        .with_header(header("Access-Control-Allow-Origin", allow_origin));
    if let Err(err) = request.respond(response) {
        log::warn!("failed to send response: {err}");
    }
}

fn respond_preflight(request: Request, allow_origin: &str) {
    let response = Response::empty(204)
        .with_header(header("Access-Control-Allow-Origin", allow_origin))
        .with_header(header("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .with_header(header("Access-Control-Allow-Headers", "Content-Type"));
    if let Err(err) = request.respond(response) {
        log::warn!("failed to send preflight response: {err}");
    }
}

fn header(field: &str, value: &str) -> Header {
    Header::from_bytes(field.as_bytes(), value.as_bytes()).expect("header bytes are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_construction() {
        let h = header("Content-Type", "application/json");
        assert!(h.field.equiv("content-type"));
        assert_eq!(h.value.as_str(), "application/json");
    }
}
