use chrono::{Duration, NaiveDateTime, Timelike};
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

/// Hours (inclusive) that count as daytime for the readings
const DAYTIME_HOURS: std::ops::RangeInclusive<u32> = 6..=18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Temperature,
    Humidity,
    Pressure,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::Humidity, Metric::Pressure];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::Pressure => "pressure",
        }
    }
}

/// One CSV row; field order is the column order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub timestamp: String,
    pub device_id: String,
    pub metric_name: Metric,
    pub metric_value: f64,
    pub location: &'static str,
    pub zone: &'static str,
}

/// `device_NNN` label for a 1-based device number
pub fn device_label(device: u32) -> String {
    format!("device_{:03}", device)
}

/// Static (location, zone) for a device; everything past 4 is monitoring
pub fn device_site(device: u32) -> (&'static str, &'static str) {
    match device {
        1 => ("zone_a", "production"),
        2 => ("zone_b", "testing"),
        3 => ("zone_c", "development"),
        4 => ("zone_d", "storage"),
        _ => ("zone_e", "monitoring"),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Apply the daytime shift, then floor temperature at 0 and keep humidity
/// in [0, 100]. Returns rounded (temperature, humidity).
fn adjust_and_clamp(
    temperature: f64,
    humidity: f64,
    temp_rise: f64,
    humidity_drop: f64,
) -> (f64, f64) {
    (
        round2((temperature + temp_rise).max(0.0)),
        round2((humidity - humidity_drop).clamp(0.0, 100.0)),
    )
}

fn format_timestamp(ts: &NaiveDateTime) -> String {
    format!("{}Z", ts.format("%Y-%m-%dT%H:%M:%S"))
}

/// Generate one reading per (minute, device, metric) in `[start, end]`
pub fn generate_sample_data<R: Rng + ?Sized>(
    start: NaiveDateTime,
    end: NaiveDateTime,
    num_devices: u32,
    rng: &mut R,
) -> Vec<SensorReading> {
    let step = Duration::minutes(1);
    let minutes = if end >= start {
        (end - start).num_minutes() as usize + 1
    } else {
        0
    };
    let mut data = Vec::with_capacity(minutes * num_devices as usize * Metric::ALL.len());

    let mut ts = start;
    while ts <= end {
        let timestamp = format_timestamp(&ts);
        let daytime = DAYTIME_HOURS.contains(&ts.hour());

        for device in 1..=num_devices {
            let temperature = round2(rng.gen_range(20.0..=30.0));
            let humidity = round2(rng.gen_range(40.0..=60.0));
            let pressure = round2(rng.gen_range(1010.0..=1020.0));

            let (temp_rise, humidity_drop) = if daytime {
                (rng.gen_range(2.0..=5.0), rng.gen_range(5.0..=15.0))
            } else {
                (0.0, 0.0)
            };
            let (temperature, humidity) =
                adjust_and_clamp(temperature, humidity, temp_rise, humidity_drop);

            let device_id = device_label(device);
            let (location, zone) = device_site(device);
            let values = [temperature, humidity, pressure];

            for (metric, value) in Metric::ALL.into_iter().zip(values) {
                data.push(SensorReading {
                    timestamp: timestamp.clone(),
                    device_id: device_id.clone(),
                    metric_name: metric,
                    metric_value: value,
                    location,
                    zone,
                });
            }
        }

        ts += step;
    }

    data
}

/// Headline numbers for a generated dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    pub records: usize,
    pub unique_timestamps: usize,
    pub devices: usize,
    pub locations: usize,
}

impl DatasetSummary {
    pub fn of(readings: &[SensorReading]) -> Self {
        let timestamps: HashSet<&str> = readings.iter().map(|r| r.timestamp.as_str()).collect();
        let devices: HashSet<&str> = readings.iter().map(|r| r.device_id.as_str()).collect();
        let locations: HashSet<&str> = readings.iter().map(|r| r.location).collect();

        Self {
            records: readings.len(),
            unique_timestamps: timestamps.len(),
            devices: devices.len(),
            locations: locations.len(),
        }
    }
}
