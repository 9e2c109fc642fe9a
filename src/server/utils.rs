//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::AccademiaError;

impl HttpServer {
    /// Turn a bind failure into an actionable message
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> AccademiaError {
        let error_str = error.to_string();

        if error.kind() == std::io::ErrorKind::AddrInUse
            || error_str.contains("Address already in use")
            || error_str.contains("os error 48")
            || error_str.contains("os error 98")
        {
            AccademiaError::internal(format!(
                "Port {} is already in use. Stop the other process or set ACCADEMIA_PORT={}",
                port,
                port.saturating_add(1)
            ))
        } else if error.kind() == std::io::ErrorKind::PermissionDenied
            || error_str.contains("os error 13")
        {
            AccademiaError::internal(format!(
                "Permission denied for port {}. Use a port >= 1024 such as ACCADEMIA_PORT=8000",
                port
            ))
        } else {
            AccademiaError::internal(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_format_bind_error_address_in_use() {
        let error = Error::new(ErrorKind::AddrInUse, "Address already in use");
        let result = HttpServer::format_bind_error(error, "0.0.0.0:8080", 8080);

        let error_msg = result.to_string();
        assert!(error_msg.contains("8080"));
        assert!(error_msg.contains("already in use"));
        assert!(error_msg.contains("8081"));
    }

    #[test]
    fn test_format_bind_error_os_error_98() {
        let error = Error::new(ErrorKind::Other, "os error 98");
        let result = HttpServer::format_bind_error(error, "127.0.0.1:9000", 9000);
        assert!(result.to_string().contains("9001"));
    }

    #[test]
    fn test_format_bind_error_permission_denied() {
        let error = Error::new(ErrorKind::PermissionDenied, "Permission denied");
        let result = HttpServer::format_bind_error(error, "0.0.0.0:80", 80);
        assert!(result.to_string().contains("Permission denied for port 80"));
    }

    #[test]
    fn test_format_bind_error_other() {
        let error = Error::new(ErrorKind::Other, "something else");
        let result = HttpServer::format_bind_error(error, "0.0.0.0:8000", 8000);
        assert!(result.to_string().contains("Failed to bind to 0.0.0.0:8000"));
    }
}
