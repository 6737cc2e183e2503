use pathboard::weather::{DEFAULT_ICON, celsius_to_fahrenheit, weather_icon};

#[test]
fn freezing_point_converts() {
    assert_eq!(celsius_to_fahrenheit(0.0), 32);
}

#[test]
fn boiling_point_converts() {
    assert_eq!(celsius_to_fahrenheit(100.0), 212);
}

#[test]
fn mild_day_converts() {
    assert_eq!(celsius_to_fahrenheit(20.0), 68);
}

#[test]
fn scales_agree_at_minus_forty() {
    assert_eq!(celsius_to_fahrenheit(-40.0), -40);
}

#[test]
fn fractional_temperatures_round() {
    assert_eq!(celsius_to_fahrenheit(21.0), 70);
    assert_eq!(celsius_to_fahrenheit(30.5), 87);
}

#[test]
fn clear_sky_icon() {
    assert_eq!(weather_icon(0), "☀️");
}

#[test]
fn cloud_cover_icons() {
    assert_eq!(weather_icon(1), "🌤️");
    assert_eq!(weather_icon(2), "⛅");
    assert_eq!(weather_icon(3), "☁️");
}

#[test]
fn fog_icons() {
    assert_eq!(weather_icon(45), "🌫️");
    assert_eq!(weather_icon(48), "🌫️");
}

#[test]
fn rain_icons() {
    assert_eq!(weather_icon(51), "🌦️");
    assert_eq!(weather_icon(53), "🌧️");
    assert_eq!(weather_icon(55), "🌧️");
    assert_eq!(weather_icon(61), "🌧️");
    assert_eq!(weather_icon(63), "🌧️");
    assert_eq!(weather_icon(65), "⛈️");
}

#[test]
fn snow_icons() {
    assert_eq!(weather_icon(71), "🌨️");
    assert_eq!(weather_icon(73), "🌨️");
    assert_eq!(weather_icon(75), "❄️");
}

#[test]
fn thunderstorm_icon() {
    assert_eq!(weather_icon(95), "⛈️");
}

#[test]
fn unknown_code_gets_default_icon() {
    assert_eq!(weather_icon(42), DEFAULT_ICON);
    assert_eq!(weather_icon(-1), DEFAULT_ICON);
}
