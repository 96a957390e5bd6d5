use tracing::{debug, error, info, warn};

/// Logs a handled API request with consistent format
pub fn log_api_request(method: &str, path: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("API_REQUEST: {} {} - {}", method, path, d),
        None => info!("API_REQUEST: {} {}", method, path),
    }
}

/// Logs rejected input with consistent format
pub fn log_validation_error(operation: &str, field: &str, error: &str) {
    warn!(
        "VALIDATION_ERROR: {} - field '{}' invalid: {}",
        operation, field, error
    );
}

/// Logs lookups that found nothing with consistent format
pub fn log_not_found(operation: &str, entity: &str, id: &str) {
    warn!("NOT_FOUND: {} - {} '{}'", operation, entity, id);
}

/// Logs store operations with consistent format
pub fn log_store_operation(operation: &str, collection: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("STORE_OP: {} on {} - {}", operation, collection, d),
        None => debug!("STORE_OP: {} on {}", operation, collection),
    }
}

/// Logs store failures with consistent format
pub fn log_store_error(operation: &str, error: &str) {
    error!("STORE_ERROR: {} failed: {}", operation, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
