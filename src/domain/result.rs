//! Result type alias for Prometheus

use super::errors::PrometheusError;

/// Result type alias for Prometheus operations
///
/// # Examples
///
/// ```
/// use prometheus::domain::result::Result;
/// use prometheus::domain::errors::PrometheusError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PrometheusError::course_not_found())
/// }
/// ```
pub type Result<T> = std::result::Result<T, PrometheusError>;
