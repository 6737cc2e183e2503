use chrono::{Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::f64::consts::PI;

/// Approximate sunrise and sunset as fractional UTC hours, from the
/// day-of-year solar declination and hour angle. Accurate to a few
/// minutes at mid latitudes, which is all a departure board needs.
pub fn sun_times_utc(date: NaiveDate, latitude: f64, longitude: f64) -> (f64, f64) {
    let day_of_year = date.ordinal() as f64;
    let declination =
        23.45_f64.to_radians() * (360.0 * (284.0 + day_of_year) / 365.0).to_radians().sin();

    // Clamp keeps polar-day/night dates from leaving acos's domain.
    let cos_hour_angle = (-latitude.to_radians().tan() * declination.tan()).clamp(-1.0, 1.0);
    let hour_angle_hours = cos_hour_angle.acos() * 12.0 / PI;

    let solar_noon_utc = 12.0 - longitude / 15.0;
    (
        solar_noon_utc - hour_angle_hours,
        solar_noon_utc + hour_angle_hours,
    )
}

/// Sunrise and sunset for `date` as wall-clock times in `tz`.
pub fn sun_times_local(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    tz: Tz,
) -> (NaiveTime, NaiveTime) {
    let (sunrise, sunset) = sun_times_utc(date, latitude, longitude);
    (to_local(date, sunrise, tz), to_local(date, sunset, tz))
}

fn to_local(date: NaiveDate, utc_hours: f64, tz: Tz) -> NaiveTime {
    let seconds = (utc_hours.rem_euclid(24.0) * 3600.0) as u32;
    let time =
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&date.and_time(time))
        .with_timezone(&tz)
        .time()
}
