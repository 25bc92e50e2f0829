use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Temperature unit as the backend spells it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn glyph(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius (°C)",
            Unit::Fahrenheit => "Fahrenheit (°F)",
        }
    }
}

/// A conversion result as returned by the backend. Held as the session's
/// "last conversion" until the next convert call replaces it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub input_value: f64,
    pub input_unit: Unit,
    pub output_value: f64,
    pub output_unit: Unit,
    pub formula: String,
}

impl Conversion {
    /// Big result line, e.g. `212.00 °F`.
    pub fn display_value(&self) -> String {
        format!("{:.2} {}", self.output_value, self.output_unit.glyph())
    }

    /// Summary line, e.g. `100°C = 212.00°F`. The input is echoed back the way
    /// the user typed it (plain float display), only the output is fixed to
    /// two decimals.
    pub fn summary(&self) -> String {
        format!(
            "{}{} = {:.2}{}",
            self.input_value,
            self.input_unit.glyph(),
            self.output_value,
            self.output_unit.glyph()
        )
    }
}

/// One saved conversion from the backend history store. The client never
/// mutates these locally; every change round-trips and the list is re-fetched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    pub input_value: f64,
    pub input_unit: Unit,
    pub output_value: f64,
    pub output_unit: Unit,
    #[serde(default)]
    pub nickname: Option<String>,
    // The backend stamps wall-clock time without an offset.
    pub timestamp: NaiveDateTime,
}

impl HistoryEntry {
    /// e.g. `100.00°C → 212.00°F`
    pub fn conversion_label(&self) -> String {
        format!(
            "{:.2}{} → {:.2}{}",
            self.input_value,
            self.input_unit.glyph(),
            self.output_value,
            self.output_unit.glyph()
        )
    }

    /// e.g. `Dec 13, 2025, 10:15 AM`
    pub fn timestamp_label(&self) -> String {
        self.timestamp.format("%b %-d, %Y, %I:%M %p").to_string()
    }
}

/// Client-side validation gate: a conversion request is only sent for values
/// that parse as a finite float.
pub fn parse_temperature(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Trims the nickname field; an empty field means "no nickname".
pub fn normalize_nickname(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn boiling() -> Conversion {
        Conversion {
            input_value: 100.0,
            input_unit: Unit::Celsius,
            output_value: 212.0,
            output_unit: Unit::Fahrenheit,
            formula: "°F = (°C × 9/5) + 32".to_string(),
        }
    }

    #[test]
    fn parse_temperature_accepts_finite_numbers() {
        assert_eq!(parse_temperature("100"), Some(100.0));
        assert_eq!(parse_temperature("-40"), Some(-40.0));
        assert_eq!(parse_temperature("98.6"), Some(98.6));
        assert_eq!(parse_temperature("  37.5  "), Some(37.5));
    }

    #[test]
    fn parse_temperature_rejects_garbage() {
        assert_eq!(parse_temperature("abc"), None);
        assert_eq!(parse_temperature(""), None);
        assert_eq!(parse_temperature("12,5"), None);
        assert_eq!(parse_temperature("NaN"), None);
        assert_eq!(parse_temperature("inf"), None);
        assert_eq!(parse_temperature("-infinity"), None);
    }

    #[test]
    fn nickname_is_trimmed_and_empty_means_absent() {
        assert_eq!(normalize_nickname(""), None);
        assert_eq!(normalize_nickname("   "), None);
        assert_eq!(
            normalize_nickname("  Summer temperature "),
            Some("Summer temperature".to_string())
        );
    }

    #[test]
    fn unit_glyphs() {
        assert_eq!(Unit::Celsius.glyph(), "°C");
        assert_eq!(Unit::Fahrenheit.glyph(), "°F");
    }

    #[test]
    fn unit_wire_spelling() {
        assert_eq!(serde_json::to_string(&Unit::Celsius).unwrap(), "\"CELSIUS\"");
        let unit: Unit = serde_json::from_str("\"FAHRENHEIT\"").unwrap();
        assert_eq!(unit, Unit::Fahrenheit);
    }

    #[test]
    fn result_formatting() {
        let conv = boiling();
        assert_eq!(conv.display_value(), "212.00 °F");
        assert_eq!(conv.summary(), "100°C = 212.00°F");
    }

    #[test]
    fn conversion_parses_backend_response() {
        let conv: Conversion = serde_json::from_str(
            r#"{"inputValue":25.5,"inputUnit":"CELSIUS","outputValue":77.9,"outputUnit":"FAHRENHEIT","formula":"°F = (°C × 9/5) + 32"}"#,
        )
        .unwrap();
        assert_eq!(conv.input_value, 25.5);
        assert_eq!(conv.input_unit, Unit::Celsius);
        assert_eq!(conv.output_value, 77.9);
        assert_eq!(conv.output_unit, Unit::Fahrenheit);
    }

    #[test]
    fn history_entry_parses_with_and_without_nickname() {
        let with: HistoryEntry = serde_json::from_str(
            r#"{"id":7,"inputValue":100.0,"inputUnit":"CELSIUS","outputValue":212.0,"outputUnit":"FAHRENHEIT","nickname":"Boiling","timestamp":"2025-12-13T10:15:30"}"#,
        )
        .unwrap();
        assert_eq!(with.id, 7);
        assert_eq!(with.nickname.as_deref(), Some("Boiling"));

        let null: HistoryEntry = serde_json::from_str(
            r#"{"id":8,"inputValue":32.0,"inputUnit":"FAHRENHEIT","outputValue":0.0,"outputUnit":"CELSIUS","nickname":null,"timestamp":"2025-12-13T22:05:00"}"#,
        )
        .unwrap();
        assert_eq!(null.nickname, None);

        let absent: HistoryEntry = serde_json::from_str(
            r#"{"id":9,"inputValue":0.0,"inputUnit":"CELSIUS","outputValue":32.0,"outputUnit":"FAHRENHEIT","timestamp":"2025-12-13T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(absent.nickname, None);
    }

    #[test]
    fn history_entry_labels() {
        let entry = HistoryEntry {
            id: 1,
            input_value: 100.0,
            input_unit: Unit::Celsius,
            output_value: 212.0,
            output_unit: Unit::Fahrenheit,
            nickname: None,
            timestamp: NaiveDate::from_ymd_opt(2025, 12, 13)
                .unwrap()
                .and_hms_opt(10, 15, 30)
                .unwrap(),
        };
        assert_eq!(entry.conversion_label(), "100.00°C → 212.00°F");
        assert_eq!(entry.timestamp_label(), "Dec 13, 2025, 10:15 AM");
    }

    #[test]
    fn timestamp_label_in_the_evening() {
        let entry = HistoryEntry {
            id: 2,
            input_value: -40.0,
            input_unit: Unit::Fahrenheit,
            output_value: -40.0,
            output_unit: Unit::Celsius,
            nickname: None,
            timestamp: NaiveDate::from_ymd_opt(2026, 1, 3)
                .unwrap()
                .and_hms_opt(22, 5, 0)
                .unwrap(),
        };
        assert_eq!(entry.timestamp_label(), "Jan 3, 2026, 10:05 PM");
    }
}
