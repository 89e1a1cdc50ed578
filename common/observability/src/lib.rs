use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Outcome label recorded for every plugin invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Success,
    GatewayError,
    Unavailable,
}

impl CallOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallOutcome::Success => "success",
            CallOutcome::GatewayError => "gateway_error",
            CallOutcome::Unavailable => "unavailable",
        }
    }
}

#[derive(Clone)]
pub struct PluginMetrics {
    pub registry: Registry,
    pub plugin_calls_total: IntCounterVec,
    pub plugin_call_duration_seconds: HistogramVec,
    pub http_errors_total: IntCounterVec,
}

impl PluginMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let plugin_calls_total = IntCounterVec::new(
            Opts::new(
                "plugin_calls_total",
                "Payment plugin lifecycle calls grouped by outcome",
            ),
            &["plugin", "operation", "outcome"],
        ).unwrap();
        let plugin_call_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "plugin_call_duration_seconds",
                "Time spent inside a payment plugin lifecycle call"
            ).buckets(vec![0.005,0.01,0.05,0.1,0.25,0.5,1.0,2.5,5.0]),
            &["operation"],
        ).unwrap();
        let http_errors_total = IntCounterVec::new(
            Opts::new(
                "http_errors_total",
                "Count of HTTP error responses emitted (status >= 400)"
            ),
            &["service", "code", "status"]
        ).unwrap();
        let _ = registry.register(Box::new(plugin_calls_total.clone()));
        let _ = registry.register(Box::new(plugin_call_duration_seconds.clone()));
        let _ = registry.register(Box::new(http_errors_total.clone()));
        PluginMetrics { registry, plugin_calls_total, plugin_call_duration_seconds, http_errors_total }
    }

    pub fn record_call(&self, plugin: &str, operation: &str, outcome: CallOutcome, elapsed_secs: f64) {
        self.plugin_calls_total
            .with_label_values(&[plugin, operation, outcome.as_str()])
            .inc();
        self.plugin_call_duration_seconds
            .with_label_values(&[operation])
            .observe(elapsed_secs);
    }

    pub fn record_http_error(&self, service: &str, code: &str, status: u16) {
        self.http_errors_total
            .with_label_values(&[service, code, &status.to_string()])
            .inc();
    }

    /// Prometheus text exposition of everything in the registry.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl Default for PluginMetrics {
    fn default() -> Self { Self::new() }
}
