use serde_json::Value;

use crate::{error::ParseError, model::WeatherData};

/// Parse an OpenWeatherMap "current weather" body into [`WeatherData`].
///
/// Only a body that is not JSON, or whose top level is not an object, is an
/// error. Every field is looked up by JSON pointer and falls back to its zero
/// value when the path is missing or holds the wrong type.
pub fn parse(json_text: &str) -> Result<WeatherData, ParseError> {
    let doc: Value = serde_json::from_str(json_text)?;
    if !doc.is_object() {
        return Err(ParseError::NotAnObject);
    }

    Ok(WeatherData {
        city_name: string_at(&doc, "/name"),
        country: string_at(&doc, "/sys/country"),
        temperature: float_at(&doc, "/main/temp"),
        feels_like: float_at(&doc, "/main/feels_like"),
        temp_min: float_at(&doc, "/main/temp_min"),
        temp_max: float_at(&doc, "/main/temp_max"),
        humidity: int_at(&doc, "/main/humidity"),
        pressure: int_at(&doc, "/main/pressure"),
        wind_speed: float_at(&doc, "/wind/speed"),
        description: string_at(&doc, "/weather/0/description"),
        main_weather: string_at(&doc, "/weather/0/main"),
    })
}

fn string_at(doc: &Value, pointer: &str) -> String {
    doc.pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

fn float_at(doc: &Value, pointer: &str) -> f64 {
    doc.pointer(pointer).and_then(Value::as_f64).unwrap_or_default()
}

// Fractional numbers truncate toward zero; out of range values saturate.
fn int_at(doc: &Value, pointer: &str) -> i32 {
    let Some(n) = doc.pointer(pointer) else {
        return 0;
    };

    if let Some(i) = n.as_i64() {
        i.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    } else {
        n.as_f64().map(|f| f.trunc() as i32).unwrap_or_default()
    }
}
