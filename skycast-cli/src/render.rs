//! Plain-text rendering of weather reports and error panels.
//!
//! Everything here builds on the formatting helpers in `skycast_core::format`;
//! no raw field values reach the terminal unformatted.

use chrono::NaiveDate;
use skycast_core::{WeatherData, format};

/// Render current conditions and the daily forecast. `expanded` marks at most
/// one forecast day to show in detail.
pub fn weather_report(data: &WeatherData, expanded: Option<usize>, today: NaiveDate) -> String {
    let mut out = String::new();

    match &data.country {
        Some(country) => out.push_str(&format!("Weather for {}, {}\n\n", data.location_name, country)),
        None => out.push_str(&format!("Weather for {}\n\n", data.location_name)),
    }

    let current = &data.current;
    let is_day = current.is_daytime();
    out.push_str(&format!(
        "{} {}\n",
        format::weather_icon(current.weather_code, is_day),
        format::weather_description(current.weather_code)
    ));
    out.push_str(&format!(
        "  Temperature: {} (feels like {})\n",
        format::format_temperature(current.temperature_2m),
        format::format_temperature(current.apparent_temperature)
    ));
    out.push_str(&format!("  Humidity: {}\n", format::format_humidity(current.relative_humidity_2m)));
    out.push_str(&format!(
        "  Wind: {}\n",
        format::format_wind(current.wind_speed_10m, current.wind_direction_10m)
    ));
    out.push_str(&format!("  Pressure: {}\n", format::format_pressure(current.pressure_msl)));
    out.push_str(&format!("  Cloud cover: {}\n", format::format_cloud_cover(current.cloud_cover)));
    out.push_str(&format!(
        "  Precipitation: {}\n",
        format::format_precipitation(current.precipitation)
    ));

    out.push_str("\nForecast:\n");
    for index in 0..data.daily.len() {
        let Some(day) = data.daily.day(index) else {
            continue;
        };

        out.push_str(&format!(
            "  {:<9} {} {} / {}  {}\n",
            format::relative_day(day.date, today),
            format::weather_icon(day.weather_code, true),
            format::format_temperature(day.temperature_min),
            format::format_temperature(day.temperature_max),
            format::weather_description(day.weather_code)
        ));

        if expanded == Some(index) {
            out.push_str(&format!(
                "            Sunrise {}   Sunset {}\n",
                format::format_clock(day.sunrise),
                format::format_clock(day.sunset)
            ));
            out.push_str(&format!(
                "            Rain {}   Chance {}   UV {}\n",
                format::format_precipitation(day.rain_sum),
                format::format_precipitation_probability(day.precipitation_probability_max),
                format::format_uv_index(day.uv_index_max)
            ));
        }
    }

    out
}

/// The single error panel: message plus remediation hint, nothing else.
pub fn error_panel(message: &str) -> String {
    format!("error: {message}")
}
