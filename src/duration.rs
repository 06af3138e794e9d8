use once_cell::sync::Lazy;
use regex::Regex;

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^PT(?:([0-9]+(?:\.[0-9]+)?)H)?(?:([0-9]+(?:\.[0-9]+)?)M)?(?:([0-9]+(?:\.[0-9]+)?)S)?")
        .unwrap()
});

const UNITS: [(usize, f64); 3] = [(1, 3600.0), (2, 60.0), (3, 1.0)];

/// Converts an ISO 8601 time duration (`PT1H30M`, `PT45M`, `PT5400.0S`) into
/// whole seconds. Absent, empty, or unrecognized input is zero.
pub fn parse_iso8601_duration(duration: Option<&str>) -> u64 {
    let duration = match duration.map(str::trim) {
        Some(d) if !d.is_empty() => d,
        _ => return 0,
    };

    let Some(caps) = DURATION_RE.captures(duration) else {
        return 0;
    };

    let seconds: f64 = UNITS
        .iter()
        .filter_map(|&(group, unit)| {
            let value = caps.get(group)?.as_str().parse::<f64>().ok()?;
            Some(value * unit)
        })
        .sum();

    seconds.round() as u64
}
