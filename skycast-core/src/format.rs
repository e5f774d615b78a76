//! Pure display formatting: WMO code lookups, unit-suffixed values, compass
//! directions, and day labels. Everything here is stateless and deterministic.

use chrono::{NaiveDate, NaiveDateTime};

const UNKNOWN_DESCRIPTION: &str = "Unknown conditions";
const UNKNOWN_ICON: &str = "❓";

/// Human-readable description for a WMO weather code.
///
/// Covers every code the forecast endpoint emits; unrecognized codes fall
/// back to a fixed default rather than panicking.
pub fn weather_description(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snowfall",
        73 => "Moderate snowfall",
        75 => "Heavy snowfall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => UNKNOWN_DESCRIPTION,
    }
}

/// Emoji icon for a WMO weather code. `is_day` picks sun or moon glyphs for
/// the clear and partly-clear codes.
pub fn weather_icon(code: i32, is_day: bool) -> &'static str {
    match code {
        0 => {
            if is_day {
                "☀️"
            } else {
                "🌙"
            }
        }
        1 => {
            if is_day {
                "🌤️"
            } else {
                "🌙"
            }
        }
        2 => {
            if is_day {
                "⛅"
            } else {
                "☁️"
            }
        }
        3 => "☁️",
        45 | 48 => "🌫️",
        51 | 53 | 55 | 80 | 81 | 82 => "🌦️",
        56 | 57 | 61 | 63 | 65 | 66 | 67 => "🌧️",
        71 | 73 | 75 | 77 | 85 | 86 => "🌨️",
        95 | 96 | 99 => "⛈️",
        _ => UNKNOWN_ICON,
    }
}

/// "22.4 → 22°C", "22.6 → 23°C". Halves round away from zero.
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", celsius.round() as i64)
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point compass direction for a bearing in degrees, 22.5° buckets with
/// wraparound at 360°.
pub fn wind_direction(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let index = (normalized / 22.5).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

pub fn format_wind(speed_kmh: f64, degrees: f64) -> String {
    format!("{} km/h {}", speed_kmh.round() as i64, wind_direction(degrees))
}

pub fn format_humidity(percent: f64) -> String {
    format!("{}%", percent.round() as i64)
}

pub fn format_pressure(hpa: f64) -> String {
    format!("{} hPa", hpa.round() as i64)
}

pub fn format_cloud_cover(percent: f64) -> String {
    format!("{}%", percent.round() as i64)
}

pub fn format_precipitation(mm: f64) -> String {
    format!("{mm:.1} mm")
}

pub fn format_uv_index(index: f64) -> String {
    format!("{index:.1}")
}

pub fn format_precipitation_probability(percent: f64) -> String {
    format!("{}%", percent.round() as i64)
}

/// "Today", "Tomorrow", or the weekday name. Takes `today` as a parameter so
/// the classification is deterministic under test.
pub fn relative_day(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.succ_opt() == Some(date) {
        "Tomorrow".to_string()
    } else {
        date.format("%A").to_string()
    }
}

/// "06:58" wall-clock rendering for sunrise/sunset.
pub fn format_clock(datetime: NaiveDateTime) -> String {
    datetime.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every code the forecast endpoint can emit.
    const TABLE_CODES: [i32; 28] = [
        0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82,
        85, 86, 95, 96, 99,
    ];

    #[test]
    fn every_table_code_has_description_and_icon() {
        for code in TABLE_CODES {
            assert_ne!(weather_description(code), UNKNOWN_DESCRIPTION, "code {code}");
            assert_ne!(weather_icon(code, true), UNKNOWN_ICON, "code {code} (day)");
            assert_ne!(weather_icon(code, false), UNKNOWN_ICON, "code {code} (night)");
        }
    }

    #[test]
    fn unrecognized_codes_fall_back_to_defaults() {
        for code in [-1, 4, 42, 100, 999] {
            assert_eq!(weather_description(code), UNKNOWN_DESCRIPTION);
            assert_eq!(weather_icon(code, true), UNKNOWN_ICON);
        }
    }

    #[test]
    fn clear_sky_icon_tracks_daylight() {
        assert_eq!(weather_icon(0, true), "☀️");
        assert_eq!(weather_icon(0, false), "🌙");
    }

    #[test]
    fn temperature_rounds_half_up() {
        assert_eq!(format_temperature(22.4), "22°C");
        assert_eq!(format_temperature(22.6), "23°C");
        assert_eq!(format_temperature(22.5), "23°C");
        assert_eq!(format_temperature(-0.4), "0°C");
    }

    #[test]
    fn compass_buckets_and_wraparound() {
        assert_eq!(wind_direction(0.0), "N");
        assert_eq!(wind_direction(359.0), "N");
        assert_eq!(wind_direction(225.0), "SW");
        assert_eq!(wind_direction(90.0), "E");
        assert_eq!(wind_direction(11.3), "NNE");
        assert_eq!(wind_direction(348.7), "NNW");
        assert_eq!(wind_direction(720.0), "N");
    }

    #[test]
    fn relative_day_labels() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        assert_eq!(relative_day(today, today), "Today");
        assert_eq!(
            relative_day(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(), today),
            "Tomorrow"
        );
        // 2024-03-17 was a Sunday.
        assert_eq!(
            relative_day(NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(), today),
            "Sunday"
        );
    }

    #[test]
    fn unit_suffixed_values() {
        assert_eq!(format_wind(14.2, 231.0), "14 km/h SW");
        assert_eq!(format_humidity(64.4), "64%");
        assert_eq!(format_pressure(1016.4), "1016 hPa");
        assert_eq!(format_precipitation(1.25), "1.2 mm");
        assert_eq!(format_precipitation_probability(85.0), "85%");
    }
}
