//! Value formatting shared by every surface.

use crate::models::{CellValue, TrendDirection};


/// Format a number, dropping the fraction when it is integral.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.2}", value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}


pub fn format_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Number(n) => format_value(*n),
        CellValue::Text(s) => s.clone(),
    }
}


pub fn trend_symbol(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "▲",
        TrendDirection::Down => "▼",
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(760.0), "760");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(87.5), "87.5");
        assert_eq!(format_value(1.25), "1.25");
        assert_eq!(format_value(2.0 / 3.0), "0.67");
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&CellValue::Number(82.0)), "82");
        assert_eq!(format_cell(&CellValue::from("Resolved")), "Resolved");
    }
}
