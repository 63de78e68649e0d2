//! WMO weather interpretation codes.

/// Human-readable label for a WMO weather code.
pub fn weather_label(code: u16) -> &'static str {
    match code {
        0      => "Clear",
        1      => "Mainly Clear",
        2      => "Partly Cloudy",
        3      => "Overcast",
        45 | 48 => "Foggy",
        51     => "Light Drizzle",
        53     => "Drizzle",
        55     => "Heavy Drizzle",
        61     => "Light Rain",
        63     => "Rain",
        65     => "Heavy Rain",
        71     => "Light Snow",
        73     => "Snow",
        75     => "Heavy Snow",
        95     => "Thunderstorm",
        _      => "Unknown",
    }
}
