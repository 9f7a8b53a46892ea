/// One current-weather observation as reported by the provider.
///
/// Temperatures are degrees Celsius, wind speed is metres per second and
/// pressure is hPa (the client always asks for metric units). Fields the
/// provider left out hold their zero value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherData {
    pub city_name: String,
    /// ISO-3166 alpha-2 code, or empty.
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Percent; not range checked.
    pub humidity: i32,
    pub pressure: i32,
    pub wind_speed: f64,
    pub description: String,
    pub main_weather: String,
}
