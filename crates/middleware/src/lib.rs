pub mod api_middleware;

pub use api_middleware::{
    extract_client_id, get_client_ip, logging_middleware, security_headers_middleware,
};
