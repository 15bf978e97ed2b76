use std::{env, sync::LazyLock};

use strum_macros::EnumIter;

static CONNECTION_URI: LazyLock<String> = LazyLock::new(|| {
    let host = env::var("PROMETHEUS_HOST").unwrap_or("localhost".into());
    let port = env::var("PROMETHEUS_PORT").unwrap_or("9090".into());

    format!("http://{host}:{port}/api/v1/otlp/v1/metrics")
});

const SERVICE_NAME: &str = "flow-shop-storefront";

#[derive(Debug, EnumIter, Hash, Eq, PartialEq, Clone, Copy)]
pub enum Metrics {
    /// Counter for catalog pages served
    CatalogRendered,
    /// Counter for product detail pages served
    ProductRendered,
    /// Counter for product lookups that ended in a 404
    ProductNotFound,
    /// Counter for registrations that passed validation
    RegistrationAccepted,
    /// Counter for registrations rejected by validation
    RegistrationRejected,
}

impl Metrics {
    pub fn name(&self) -> &'static str {
        match self {
            Metrics::CatalogRendered => "CATALOG_RENDERED",
            Metrics::ProductRendered => "PRODUCT_RENDERED",
            Metrics::ProductNotFound => "PRODUCT_NOT_FOUND",
            Metrics::RegistrationAccepted => "REGISTRATION_ACCEPTED",
            Metrics::RegistrationRejected => "REGISTRATION_REJECTED",
        }
    }
}

/// Installs the OTLP exporter as the global meter provider. Counters created
/// before this call stay no-ops, so call it first thing in `main`.
pub fn init() {
    opentelemetry::global::set_meter_provider(_private::PROVIDER.clone());

    tracing::info!("Exporting metrics to {}", *CONNECTION_URI);
}

pub fn shutdown() {
    if let Err(err) = _private::PROVIDER.shutdown() {
        tracing::warn!("Failed to flush metrics: {err}");
    }
}

pub mod _private {
    pub use opentelemetry::KeyValue;

    use std::{collections::HashMap, sync::LazyLock, time::Duration};

    use opentelemetry::{
        global,
        metrics::{Counter, Meter},
    };
    use opentelemetry_otlp::{MetricExporter, Protocol, WithExportConfig};
    use opentelemetry_sdk::{
        Resource,
        metrics::{PeriodicReader, SdkMeterProvider},
    };
    use strum::IntoEnumIterator;

    use crate::{CONNECTION_URI, Metrics, SERVICE_NAME};

    static OTEL_METER: LazyLock<Meter> = LazyLock::new(|| global::meter(SERVICE_NAME));

    pub static PROVIDER: LazyLock<SdkMeterProvider> = LazyLock::new(|| {
        let exporter = MetricExporter::builder()
            .with_http()
            .with_protocol(Protocol::HttpBinary)
            .with_endpoint(CONNECTION_URI.to_string())
            .build()
            .expect("Expect Prometheus exporter to build");

        let reader = PeriodicReader::builder(exporter)
            .with_interval(Duration::from_secs(5))
            .build();

        let resource = Resource::builder().with_service_name(SERVICE_NAME).build();

        SdkMeterProvider::builder()
            .with_reader(reader)
            .with_resource(resource)
            .build()
    });

    pub static COUNTERS: LazyLock<HashMap<Metrics, Counter<u64>>> = LazyLock::new(|| {
        let mut mapping: HashMap<Metrics, Counter<u64>> = HashMap::new();

        for metric in crate::Metrics::iter() {
            let metric_meter = OTEL_METER.u64_counter(metric.name()).build();

            mapping.insert(metric, metric_meter);
        }

        mapping
    });
}

#[macro_export]
macro_rules! put_metric {
    ($metric_name:expr, $added_value:expr $(, $key:literal => $value:expr)* $(,)?) => {{
        use $crate::_private::{KeyValue, COUNTERS};
        use $crate::Metrics;

        let metric_name: Metrics = $metric_name;
        let added_value: u64 = $added_value;

        let attributes: &[KeyValue] = &[
            $(KeyValue::new($key, $value),)*
        ];

        if let Some(counter) = COUNTERS.get(&metric_name) {
            counter.add(added_value, attributes);
        }
    }};
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn metric_names_are_unique() {
        let names: HashSet<&str> = Metrics::iter().map(|metric| metric.name()).collect();

        assert_eq!(names.len(), Metrics::iter().count());
    }

    #[test]
    fn counters_are_noops_without_init() {
        put_metric!(Metrics::ProductNotFound, 1, "product_id" => "abc".to_string());

        assert_eq!(_private::COUNTERS.len(), Metrics::iter().count());
    }
}
