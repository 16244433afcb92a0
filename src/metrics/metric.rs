use super::MetricCategory;
use super::MetricValue;
use super::metric_def::MetricDef;

#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub def: &'static MetricDef,
    pub value: MetricValue,
}

impl Metric {
    #[must_use]
    pub const fn new(def: &'static MetricDef, value: MetricValue) -> Self {
        Self { def, value }
    }

    // Convenience accessors for common fields
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.def.name
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.def.description
    }

    #[must_use]
    pub const fn category(&self) -> MetricCategory {
        self.def.category
    }

    /// Wire name forwarded to the tracking server: `{category_key}_{name}`.
    #[must_use]
    pub fn wire_name(&self) -> String {
        format!("{}_{}", self.def.category, self.def.name)
    }
}
