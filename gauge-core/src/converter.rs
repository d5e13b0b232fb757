//! Two-step conversion through the common unit

use serde::{Serialize, Deserialize};
use tracing::{debug, trace};
use crate::{ConversionError, ConversionTable};

/// Convert `value` from `from_unit` to `to_unit` using `table`.
///
/// The value is multiplied into the category's common unit, then divided
/// out into the target unit, so the result is exactly
/// `value * table[from_unit] / table[to_unit]`.
///
/// A non-finite value is rejected before either unit is looked up.
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    table: &ConversionTable,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        debug!(value, from_unit, to_unit, "rejecting non-finite input");
        return Err(ConversionError::InvalidInput(value));
    }

    let common = table.to_common(value, from_unit)?;
    trace!(value, from_unit, common, "converted into common unit");

    let result = table.from_common(common, to_unit)?;
    trace!(common, to_unit, result, "converted out of common unit");

    Ok(result)
}

/// A single conversion call's inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        ConversionRequest {
            value,
            from: from.into(),
            to: to.into(),
        }
    }

    /// The same request with source and target swapped
    pub fn reversed(&self, value: f64) -> Self {
        ConversionRequest {
            value,
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

/// Converter bound to one category's table
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    table: &'a ConversionTable,
}

impl<'a> Converter<'a> {
    /// Bind a converter to `table`
    pub fn new(table: &'a ConversionTable) -> Self {
        Converter { table }
    }

    /// The table this converter reads
    pub fn table(&self) -> &'a ConversionTable {
        self.table
    }

    /// Same as the free `convert`, against the bound table
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
        convert(value, from_unit, to_unit, self.table)
    }

    /// Convert a prepared request
    pub fn run(&self, request: &ConversionRequest) -> Result<f64, ConversionError> {
        self.convert(request.value, &request.from, &request.to)
    }

    /// Convert one value into every unit of the table, sorted by unit name
    pub fn convert_all(&self, value: f64, from_unit: &str) -> Result<Vec<(&'a str, f64)>, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidInput(value));
        }
        let common = self.table.to_common(value, from_unit)?;

        self.table.units()
            .into_iter()
            .map(|unit| Ok((unit, self.table.from_common(common, unit)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length() -> ConversionTable {
        ConversionTable::from_pairs([("m", 1.0), ("km", 1000.0), ("cm", 0.01)]).unwrap()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_km_to_m() {
        assert_eq!(convert(1.0, "km", "m", &length()).unwrap(), 1000.0);
    }

    #[test]
    fn test_cm_to_m() {
        assert_eq!(convert(100.0, "cm", "m", &length()).unwrap(), 1.0);
    }

    #[test]
    fn test_unsupported_source() {
        let err = convert(5.0, "mile", "m", &length()).unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedUnit(ref u) if u == "mile"));
        assert_eq!(err.unit(), Some("mile"));
    }

    #[test]
    fn test_unsupported_target() {
        let err = convert(5.0, "m", "league", &length()).unwrap_err();
        assert_eq!(err.unit(), Some("league"));
    }

    #[test]
    fn test_unsupported_both_names_source() {
        let err = convert(5.0, "mile", "league", &length()).unwrap_err();
        assert_eq!(err.unit(), Some("mile"));
    }

    #[test]
    fn test_invalid_input_before_lookup() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = convert(bad, "mile", "league", &length()).unwrap_err();
            assert!(matches!(err, ConversionError::InvalidInput(_)));
            assert_eq!(err.code(), crate::codes::INVALID_INPUT);
        }
    }

    #[test]
    fn test_identity() {
        let table = length();
        for unit in table.units() {
            for v in [0.0, 1.0, -3.5, 123456.789, 1e-9] {
                let same = convert(v, unit, unit, &table).unwrap();
                assert!(approx_eq(same, v), "{} {} -> {}", v, unit, same);
            }
        }
        // Multiplier 1 is exact
        assert_eq!(convert(0.1, "m", "m", &table).unwrap(), 0.1);
    }

    #[test]
    fn test_matches_two_step_formula() {
        let table = length();
        for from in table.units() {
            for to in table.units() {
                let v = 42.125;
                let expected = v * table.multiplier(from).unwrap() / table.multiplier(to).unwrap();
                assert_eq!(convert(v, from, to, &table).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_round_trip() {
        let table = length();
        for from in table.units() {
            for to in table.units() {
                let v = 7.3;
                let there = convert(v, from, to, &table).unwrap();
                let back = convert(there, to, from, &table).unwrap();
                assert!(approx_eq(back, v), "{} -> {} -> {}: {}", from, to, from, back);
            }
        }
    }

    #[test]
    fn test_finite_input_may_overflow() {
        // No range policy: IEEE overflow passes through as infinity
        let table = length();
        assert_eq!(convert(1e308, "km", "m", &table).unwrap(), f64::INFINITY);
        assert_eq!(convert(1e308, "km", "km", &table).unwrap(), f64::INFINITY);
        assert_eq!(convert(-1e308, "km", "cm", &table).unwrap(), f64::NEG_INFINITY);
        assert_eq!(convert(f64::MAX, "m", "m", &table).unwrap(), f64::MAX);
    }

    #[test]
    fn test_nan_input_matched_by_variant() {
        let err = convert(f64::NAN, "m", "km", &length()).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput(v) if v.is_nan()));
    }

    #[test]
    fn test_negative_and_zero_values() {
        let table = length();
        assert_eq!(convert(0.0, "km", "cm", &table).unwrap(), 0.0);
        assert_eq!(convert(-2.0, "km", "m", &table).unwrap(), -2000.0);
    }

    #[test]
    fn test_converter_run() {
        let table = length();
        let converter = Converter::new(&table);
        let request = ConversionRequest::new(2.5, "km", "m");
        assert_eq!(converter.run(&request).unwrap(), 2500.0);

        let back = request.reversed(2500.0);
        assert_eq!(converter.run(&back).unwrap(), 2.5);
    }

    #[test]
    fn test_convert_all() {
        let table = length();
        let all = Converter::new(&table).convert_all(1.0, "m").unwrap();
        assert_eq!(all, vec![("cm", 100.0), ("km", 0.001), ("m", 1.0)]);
    }

    #[test]
    fn test_convert_all_errors() {
        let table = length();
        let converter = Converter::new(&table);
        assert!(matches!(converter.convert_all(1.0, "ft"), Err(ConversionError::UnsupportedUnit(_))));
        assert!(matches!(converter.convert_all(f64::NAN, "m"), Err(ConversionError::InvalidInput(_))));
    }

    #[test]
    fn test_request_serde() {
        let request: ConversionRequest =
            serde_json::from_str(r#"{"value": 3.0, "from": "km", "to": "cm"}"#).unwrap();
        assert_eq!(request, ConversionRequest::new(3.0, "km", "cm"));
    }
}
