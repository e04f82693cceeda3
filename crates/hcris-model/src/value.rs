#![deny(unsafe_code)]

/// One cell of a worksheet, metric, or summary table.
///
/// `Missing` means the coordinate was never observed in the source facts.
/// `Number(f64::NAN)` is different: it marks a value that was computed but
/// is arithmetically undefined (division by zero), and it survives
/// missing-value fills.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric view with a fallback for non-numeric cells. NaN passes
    /// through unchanged.
    pub fn number_or(&self, default: f64) -> f64 {
        self.as_number().unwrap_or(default)
    }

    /// Output rendering: text verbatim, numbers via [`format_numeric`],
    /// missing as the empty string.
    pub fn render(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => format_numeric(*value),
            Self::Missing => String::new(),
        }
    }
}

pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_integral_floats_without_fraction() {
        assert_eq!(format_numeric(20.0), "20");
        assert_eq!(format_numeric(0.75), "0.75");
        assert_eq!(format_numeric(f64::NAN), "NaN");
    }

    #[test]
    fn missing_renders_empty() {
        assert_eq!(CellValue::Missing.render(), "");
        assert_eq!(CellValue::Text("urban".into()).render(), "urban");
        assert_eq!(CellValue::Number(5.0).render(), "5");
    }

    #[test]
    fn nan_is_not_missing() {
        let undefined = CellValue::Number(f64::NAN);
        assert!(!undefined.is_missing());
        assert!(undefined.number_or(0.0).is_nan());
    }
}
