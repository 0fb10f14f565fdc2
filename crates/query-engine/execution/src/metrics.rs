//! Metrics setup and update for the service.

use prometheus::{IntCounter, Registry};

/// The collection of all metrics exposed through the `/metrics` endpoint.
#[derive(Debug, Clone)]
pub struct Metrics {
    pub query_total: IntCounter,
    pub explain_total: IntCounter,
    pub validate_total: IntCounter,
    pub unsupported_query_total: IntCounter,
    pub database_error_total: IntCounter,
}

impl Metrics {
    /// Set up counters used to produce Prometheus metrics
    pub fn initialize(metrics_registry: &mut Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "sales_query_query_total",
            "Total successful queries.",
        )?;

        let explain_total = add_int_counter_metric(
            metrics_registry,
            "sales_query_explain_total",
            "Total successful explains.",
        )?;

        let validate_total = add_int_counter_metric(
            metrics_registry,
            "sales_query_validate_total",
            "Total validation requests.",
        )?;

        let unsupported_query_total = add_int_counter_metric(
            metrics_registry,
            "sales_query_unsupported_query_total",
            "Total phrases that could not be translated to SQL.",
        )?;

        let database_error_total = add_int_counter_metric(
            metrics_registry,
            "sales_query_database_error_total",
            "Total queries that failed while running against the database.",
        )?;

        Ok(Self {
            query_total,
            explain_total,
            validate_total,
            unsupported_query_total,
            database_error_total,
        })
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<IntCounter, prometheus::Error> {
    let int_counter =
        IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}
