use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Status document served by the device at `/wall-eno/json-status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    /// Household consumption in kW, already rounded by the device
    pub home_power: Number,
    /// Unrounded sensor reading behind `home_power`
    pub home_raw: RawReading,
    /// Power limit imposed on the wallbox in kW
    pub wallbox_power: Number,
    /// Current limit imposed on the wallbox in A
    pub wallbox_current: Number,
    #[serde(default)]
    pub error: Option<String>,
}

impl StatusSnapshot {
    /// Device-reported error, empty when the device is healthy
    pub fn device_error(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }
}

/// The raw reading is sent either as a number or as preformatted text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawReading {
    Number(Number),
    Text(String),
}

impl fmt::Display for RawReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawReading::Number(n) => f.write_str(&reading_text(n)),
            RawReading::Text(s) => f.write_str(s),
        }
    }
}

/// Render a JSON number the way the browser prints it: integral floats lose
/// their `.0`, and exponent form is kept for very large or very small values.
pub fn reading_text(n: &Number) -> String {
    let Some(value) = n.as_f64().filter(|_| n.is_f64()) else {
        return n.to_string();
    };

    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            value.to_string()
        }
    } else {
        // Rust writes `1e21`, browsers write `1e+21`
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    }
}
