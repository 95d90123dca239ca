use crate::sensor_data::SensorReading;

pub const CSV_HEADER: [&str; 6] = [
    "timestamp",
    "device_id",
    "metric_name",
    "metric_value",
    "location",
    "zone",
];

/// Serialize readings as CSV with a header row.
///
/// The header is written explicitly so an empty dataset still yields it.
pub fn to_csv(readings: &[SensorReading]) -> Result<Vec<u8>, csv::Error> {
    let mut wrt = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wrt.write_record(CSV_HEADER)?;
    for r in readings {
        wrt.serialize(r)?;
    }

    wrt.into_inner().map_err(|e| e.into_error().into())
}

fn cells(r: &SensorReading) -> [String; 6] {
    [
        r.timestamp.clone(),
        r.device_id.clone(),
        r.metric_name.as_str().to_string(),
        r.metric_value.to_string(),
        r.location.to_string(),
        r.zone.to_string(),
    ]
}

/// Right-aligned text table of the first `rows` readings
pub fn preview_table(readings: &[SensorReading], rows: usize) -> String {
    let body: Vec<[String; 6]> = readings.iter().take(rows).map(cells).collect();

    let mut widths = CSV_HEADER.map(str::len);
    for row in &body {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let header = CSV_HEADER.map(str::to_string);
    let mut out = String::new();
    for row in std::iter::once(&header).chain(body.iter()) {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:>w$}", cell, w = w))
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor_data::Metric;

    fn reading(metric: Metric, value: f64) -> SensorReading {
        SensorReading {
            timestamp: "2024-01-15T10:00:00Z".to_string(),
            device_id: "device_001".to_string(),
            metric_name: metric,
            metric_value: value,
            location: "zone_a",
            zone: "production",
        }
    }

    fn csv_string(readings: &[SensorReading]) -> String {
        String::from_utf8(to_csv(readings).unwrap()).unwrap()
    }

    #[test]
    fn test_to_csv() {
        let csv = csv_string(&[
            reading(Metric::Temperature, 25.5),
            reading(Metric::Pressure, 1013.25),
        ]);
        assert_eq!(
            csv,
            "timestamp,device_id,metric_name,metric_value,location,zone\n\
             2024-01-15T10:00:00Z,device_001,temperature,25.5,zone_a,production\n\
             2024-01-15T10:00:00Z,device_001,pressure,1013.25,zone_a,production\n"
        );
    }

    #[test]
    fn test_to_csv_empty_has_header() {
        assert_eq!(
            csv_string(&[]),
            "timestamp,device_id,metric_name,metric_value,location,zone\n"
        );
    }

    #[test]
    fn test_to_csv_quotes_special_fields() {
        let mut r = reading(Metric::Humidity, 50.0);
        r.location = "zone \"a\", west";
        r.zone = "line\nbreak";

        let csv = csv_string(&[r]);
        let mut rdr = csv::Reader::from_reader(csv.as_bytes());
        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();

        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][2], "humidity");
        assert_eq!(&records[0][4], "zone \"a\", west");
        assert_eq!(&records[0][5], "line\nbreak");
    }

    #[test]
    fn test_preview_limits_rows() {
        let data = vec![reading(Metric::Humidity, 47.25); 15];
        let table = preview_table(&data, 10);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].trim_start().starts_with("timestamp"));
        assert!(lines[1].ends_with("production"));
        assert!(lines[1].contains("47.25"));
    }
}
