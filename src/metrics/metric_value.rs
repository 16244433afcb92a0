#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    UInt(u64),
    Float(f64),
}

impl MetricValue {
    /// Numeric view of the value, used for the wire format and for score math.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "counts stay far below f64 precision limits")]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::UInt(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

impl From<MetricValue> for serde_json::Value {
    fn from(value: MetricValue) -> Self {
        match value {
            MetricValue::UInt(v) => Self::from(v),
            MetricValue::Float(v) => Self::from(v),
        }
    }
}
