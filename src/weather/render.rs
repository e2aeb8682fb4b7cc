// src/weather/render.rs — Display-ready strings for a weather report.
//
// The TUI widgets only lay these out; every number-to-text decision lives
// here.

use crate::api::WeatherReport;

/// Fixed top of the UV scale used to position the indicator.
pub const UV_SCALE_MAX: f64 = 11.0;
/// Gusts are estimated from the sustained wind speed.
pub const GUST_FACTOR: f64 = 1.5;
/// Offset used for the dew point estimate.
pub const DEW_POINT_OFFSET: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyTile {
    pub label: String,
    pub temp: String,
    pub icon: char,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTile {
    pub label: String,
    pub date: String,
    pub temp: String,
    pub icon: char,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub header: String,
    pub main_temp: String,
    pub main_icon: char,
    pub main_icon_url: String,
    pub description: String,
    pub note: String,
    pub feels_like: String,
    pub precipitation: String,
    pub visibility: String,
    pub humidity: String,
    pub dew_point: String,
    pub hourly: Vec<HourlyTile>,
    pub daily: Vec<DailyTile>,
    pub uv_index: String,
    /// Indicator position as a fraction of the UV scale (not clamped).
    pub uv_position: f64,
    pub wind_speed: String,
    pub gust_speed: String,
    /// Compass needle rotation in degrees.
    pub wind_rotation: f64,
}

/// `<host>/<icon>@<size>x.png`
pub fn icon_url(icon_host: &str, icon: &str, size: u8) -> String {
    format!("{}/{}@{}x.png", icon_host.trim_end_matches('/'), icon, size)
}

/// Integers print without a fractional part, everything else as-is.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

pub fn dew_point(feels_like: f64) -> f64 {
    feels_like - DEW_POINT_OFFSET
}

pub fn gust_speed(wind_speed: f64) -> i64 {
    (wind_speed * GUST_FACTOR).round() as i64
}

pub fn uv_position(uv_index: f64) -> f64 {
    uv_index / UV_SCALE_MAX
}

/// Terminal glyph for an OpenWeatherMap icon code such as `10d`.
pub fn icon_glyph(icon: &str) -> char {
    match icon.get(..2) {
        Some("01") => '☀',
        Some("02") => '⛅',
        Some("03") | Some("04") => '☁',
        Some("09") | Some("10") => '☂',
        Some("11") => '⚡',
        Some("13") => '❄',
        Some("50") => '≡',
        _ => '·',
    }
}

/// Eight-point compass label for a bearing in degrees.
pub fn compass_point(degrees: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let idx = ((degrees.rem_euclid(360.0) + 22.5) / 45.0) as usize % 8;
    POINTS[idx]
}

/// Arrow pointing along a bearing in degrees.
pub fn compass_arrow(degrees: f64) -> char {
    const ARROWS: [char; 8] = ['↑', '↗', '→', '↘', '↓', '↙', '←', '↖'];
    let idx = ((degrees.rem_euclid(360.0) + 22.5) / 45.0) as usize % 8;
    ARROWS[idx]
}

impl DashboardModel {
    pub fn build(report: &WeatherReport, icon_host: &str) -> Self {
        let hourly = report
            .hourly
            .iter()
            .enumerate()
            .map(|(i, h)| HourlyTile {
                label: if i == 0 { "Now".to_string() } else { h.time.clone() },
                temp: format!("{}°", format_number(h.temp)),
                icon: icon_glyph(&h.icon),
                icon_url: icon_url(icon_host, &h.icon, 2),
            })
            .collect();

        let daily = report
            .daily
            .iter()
            .enumerate()
            .map(|(i, d)| DailyTile {
                label: if i == 0 { "Today".to_string() } else { d.day.clone() },
                date: d.date.clone(),
                temp: format!("{}°", format_number(d.temp)),
                icon: icon_glyph(&d.icon),
                icon_url: icon_url(icon_host, &d.icon, 2),
            })
            .collect();

        Self {
            header: format!("{}, {}", report.city, report.country),
            main_temp: format!("{}°", format_number(report.temp)),
            main_icon: icon_glyph(&report.icon),
            main_icon_url: icon_url(icon_host, &report.icon, 4),
            description: report.description.clone(),
            note: format!("Current weather in {}", report.city),
            feels_like: format!("{}°", format_number(report.feels_like)),
            precipitation: format!("{}\"", format_number(report.precipitation)),
            visibility: format!("{} mi", format_number(report.visibility)),
            humidity: format!("{}%", format_number(report.humidity)),
            dew_point: format!("Dew point: {}°", format_number(dew_point(report.feels_like))),
            hourly,
            daily,
            uv_index: format_number(report.uv_index),
            uv_position: uv_position(report.uv_index),
            wind_speed: format_number(report.wind_speed),
            gust_speed: gust_speed(report.wind_speed).to_string(),
            wind_rotation: report.wind_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DailyEntry, HourlyEntry};
    use pretty_assertions::assert_eq;

    const HOST: &str = "http://openweathermap.org/img/wn";

    fn report() -> WeatherReport {
        WeatherReport {
            city: "London".into(),
            country: "United Kingdom".into(),
            temp: 12.0,
            feels_like: 10.0,
            description: "Rain".into(),
            icon: "10d".into(),
            precipitation: 0.02,
            visibility: 10.0,
            humidity: 81.0,
            uv_index: 3.0,
            wind_speed: 9.0,
            wind_deg: 230.0,
            condition: "rain".into(),
            hourly: vec![
                HourlyEntry { time: "14:00".into(), temp: 12.0, icon: "10d".into() },
                HourlyEntry { time: "15:00".into(), temp: 13.0, icon: "09d".into() },
            ],
            daily: vec![
                DailyEntry { day: "Mon".into(), date: "06/01".into(), temp: 13.0, icon: "10d".into() },
                DailyEntry { day: "Tue".into(), date: "07/01".into(), temp: 11.0, icon: "04d".into() },
            ],
        }
    }

    #[test]
    fn test_current_conditions() {
        let m = DashboardModel::build(&report(), HOST);
        assert_eq!(m.header, "London, United Kingdom");
        assert_eq!(m.main_temp, "12°");
        assert_eq!(m.main_icon_url, "http://openweathermap.org/img/wn/10d@4x.png");
        assert_eq!(m.note, "Current weather in London");
        assert_eq!(m.feels_like, "10°");
        assert_eq!(m.precipitation, "0.02\"");
        assert_eq!(m.visibility, "10 mi");
        assert_eq!(m.humidity, "81%");
        assert_eq!(m.dew_point, "Dew point: 7°");
    }

    #[test]
    fn test_strips_label_first_entry() {
        let m = DashboardModel::build(&report(), HOST);
        let hourly: Vec<&str> = m.hourly.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(hourly, vec!["Now", "15:00"]);
        let daily: Vec<&str> = m.daily.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(daily, vec!["Today", "Tue"]);
        assert_eq!(m.daily[0].date, "06/01");
        assert_eq!(m.hourly[1].icon_url, "http://openweathermap.org/img/wn/09d@2x.png");
    }

    #[test]
    fn test_strip_tiles_carry_icons() {
        let m = DashboardModel::build(&report(), HOST);
        assert_eq!(m.main_icon, '☂');
        assert_eq!(m.hourly[1].icon, '☂');
        assert_eq!(m.daily[1].icon, '☁');
        assert_eq!(m.daily[1].icon_url, "http://openweathermap.org/img/wn/04d@2x.png");
    }

    #[test]
    fn test_icon_glyph_codes() {
        assert_eq!(icon_glyph("01n"), '☀');
        assert_eq!(icon_glyph("13d"), '❄');
        assert_eq!(icon_glyph("50d"), '≡');
        assert_eq!(icon_glyph(""), '·');
        assert_eq!(icon_glyph("zz"), '·');
    }

    #[test]
    fn test_wind_and_uv() {
        let m = DashboardModel::build(&report(), HOST);
        assert_eq!(m.wind_speed, "9");
        assert_eq!(m.gust_speed, "14");
        assert_eq!(m.wind_rotation, 230.0);
        assert_eq!(m.uv_index, "3");
        assert!((m.uv_position - 3.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_strips() {
        let mut r = report();
        r.hourly.clear();
        r.daily.clear();
        let m = DashboardModel::build(&r, HOST);
        assert!(m.hourly.is_empty());
        assert!(m.daily.is_empty());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.02), "0.02");
        assert_eq!(format_number(7.5), "7.5");
    }

    #[test]
    fn test_gust_rounds() {
        assert_eq!(gust_speed(3.0), 5); // 4.5 rounds up
        assert_eq!(gust_speed(0.0), 0);
        assert_eq!(gust_speed(10.0), 15);
    }

    #[test]
    fn test_uv_position_not_clamped() {
        assert_eq!(uv_position(0.0), 0.0);
        assert_eq!(uv_position(11.0), 1.0);
        assert!(uv_position(12.0) > 1.0);
    }

    #[test]
    fn test_compass() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(359.0), "N");
        assert_eq!(compass_point(230.0), "SW");
        assert_eq!(compass_point(-90.0), "W");
        assert_eq!(compass_arrow(90.0), '→');
    }
}
