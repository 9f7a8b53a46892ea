use std::fmt::Write;

use crate::model::WeatherData;

const TOP: &str = "╔════════════════════════════════════════╗";
const DIVIDER: &str = "╠════════════════════════════════════════╣";
const BOTTOM: &str = "╚════════════════════════════════════════╝";

/// Format an observation as the bordered console block, one line per field.
///
/// Numbers use their shortest round-trip form, so `15.0` prints as `15`.
pub fn render(data: &WeatherData) -> String {
    let mut out = String::new();
    write_block(&mut out, data).expect("writing to a String cannot fail");
    out
}

fn write_block(out: &mut String, w: &WeatherData) -> std::fmt::Result {
    writeln!(out, "{TOP}")?;
    writeln!(out, "║  Weather in {}, {}", w.city_name, w.country)?;
    writeln!(out, "{DIVIDER}")?;
    writeln!(out, "║  Condition: {} ({})", w.main_weather, w.description)?;
    writeln!(out, "║  Temperature: {}°C", w.temperature)?;
    writeln!(out, "║  Feels Like: {}°C", w.feels_like)?;
    writeln!(out, "║  Min/Max: {}°C / {}°C", w.temp_min, w.temp_max)?;
    writeln!(out, "║  Humidity: {}%", w.humidity)?;
    writeln!(out, "║  Pressure: {} hPa", w.pressure)?;
    writeln!(out, "║  Wind Speed: {} m/s", w.wind_speed)?;
    writeln!(out, "{BOTTOM}")
}
