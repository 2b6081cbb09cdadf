//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// The mushroom rows used in the summarizer's documented example
///
/// - `odor`: 3 distinct values (p, a, l)
/// - `bruises`: 2 distinct values (t, f)
pub fn create_odor_bruises_dataframe() -> DataFrame {
    df! {
        "odor" => ["p", "a", "l", "p"],
        "bruises" => ["t", "t", "f", "t"],
    }
    .unwrap()
}

/// Mushroom-style letter codes with a `?` marker and a constant column
pub fn create_mushroom_dataframe() -> DataFrame {
    df! {
        "class" => ["p", "e", "e", "p", "e", "e", "p", "e"],
        "odor" => ["p", "a", "l", "p", "n", "n", "f", "a"],
        "bruises" => ["t", "t", "t", "t", "f", "t", "f", "f"],
        "stalk-root" => ["e", "c", "c", "e", "?", "b", "?", "c"],
        "veil-type" => ["p", "p", "p", "p", "p", "p", "p", "p"],
        "cap-diameter" => [5.2f64, 3.1, 4.4, 6.0, 2.2, 3.9, 7.1, 1.8],
    }
    .unwrap()
}

/// Every attribute column of the mushroom recipe, with class decided by odor
///
/// Poisonous rows smell of `f`, `y` or `s`; edible rows of `a`, `l` or `n`.
/// Other attributes cycle through letter codes on fixed strides, so a few of
/// them track the class too. `stalk-root` uses the `?` marker for a share of
/// rows and `veil-type` is constant.
pub fn create_full_mushroom_dataframe(n: usize) -> DataFrame {
    const ATTRIBUTES: [&str; 22] = [
        "cap-shape",
        "cap-surface",
        "cap-color",
        "bruises",
        "odor",
        "gill-attachment",
        "gill-spacing",
        "gill-size",
        "gill-color",
        "stalk-shape",
        "stalk-root",
        "stalk-surface-above-ring",
        "stalk-surface-below-ring",
        "stalk-color-above-ring",
        "stalk-color-below-ring",
        "veil-type",
        "veil-color",
        "ring-number",
        "ring-type",
        "spore-print-color",
        "population",
        "habitat",
    ];
    const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

    let class: Vec<&str> = (0..n).map(|i| if i % 2 == 0 { "p" } else { "e" }).collect();
    let mut columns: Vec<Column> = vec![Column::new("class".into(), class)];

    for (k, name) in ATTRIBUTES.iter().enumerate() {
        let values: Vec<String> = (0..n)
            .map(|i| match *name {
                "odor" => {
                    let pool = if i % 2 == 0 { ["f", "y", "s"] } else { ["a", "l", "n"] };
                    pool[(i / 2) % 3].to_string()
                }
                "veil-type" => "p".to_string(),
                "stalk-root" if i % 5 == 0 => "?".to_string(),
                _ => {
                    let idx = (i * (k + 3) + k * 7) % (2 + k % 5);
                    (LETTERS[(idx + k) % 26] as char).to_string()
                }
            })
            .collect();
        columns.push(Column::new((*name).into(), values));
    }

    DataFrame::new(columns).unwrap()
}

/// Weather-style observations where humidity drives rain and pressure sits near 1000
///
/// `Location` includes a station outside the weather recipe's filter, and a
/// few rows carry nulls in feature columns.
pub fn create_weather_dataframe(n: usize) -> DataFrame {
    let locations = ["Sydney", "Melbourne", "Perth", "Darwin"];
    let directions = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

    let mut location = Vec::with_capacity(n);
    let mut min_temp = Vec::with_capacity(n);
    let mut max_temp = Vec::with_capacity(n);
    let mut rainfall = Vec::with_capacity(n);
    let mut gust_speed = Vec::with_capacity(n);
    let mut humidity_9am = Vec::with_capacity(n);
    let mut humidity_3pm = Vec::with_capacity(n);
    let mut pressure_9am = Vec::with_capacity(n);
    let mut pressure_3pm = Vec::with_capacity(n);
    let mut temp_3pm = Vec::with_capacity(n);
    let mut gust_dir = Vec::with_capacity(n);
    let mut rain_today = Vec::with_capacity(n);
    let mut rain_tomorrow = Vec::with_capacity(n);

    for i in 0..n {
        let wet = i % 3 == 0;
        let wobble = ((i * 17) % 13) as f64;

        location.push(locations[i % 4]);
        min_temp.push(Some(8.0 + wobble * 0.7));
        max_temp.push(Some(18.0 + wobble));
        rainfall.push(Some(if wet { 4.0 + wobble * 0.3 } else { wobble * 0.05 }));
        gust_speed.push(if i % 23 == 7 { None } else { Some(30.0 + wobble * 2.0) });
        humidity_9am.push(Some((if wet { 75.0 } else { 55.0 }) + wobble));
        humidity_3pm.push(Some((if wet { 70.0 } else { 40.0 }) + wobble));
        pressure_9am.push(Some((if wet { 1008.0 } else { 1018.0 }) + wobble * 0.5));
        pressure_3pm.push(Some((if wet { 1006.0 } else { 1016.0 }) + wobble * 0.5));
        temp_3pm.push(Some(17.0 + wobble * 0.9));
        gust_dir.push(directions[(i * 5) % 8]);
        rain_today.push(if i % 5 == 1 { "Yes" } else { "No" });
        rain_tomorrow.push(if wet { "Yes" } else { "No" });
    }

    df! {
        "Location" => location,
        "MinTemp" => min_temp,
        "MaxTemp" => max_temp,
        "Rainfall" => rainfall,
        "WindGustDir" => gust_dir,
        "WindGustSpeed" => gust_speed,
        "Humidity9am" => humidity_9am,
        "Humidity3pm" => humidity_3pm,
        "Pressure9am" => pressure_9am,
        "Pressure3pm" => pressure_3pm,
        "Temp3pm" => temp_3pm,
        "RainToday" => rain_today,
        "RainTomorrow" => rain_tomorrow,
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Write raw CSV text to a temporary file
pub fn create_temp_csv_text(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("raw.csv");
    std::fs::write(&csv_path, contents).unwrap();
    (temp_dir, csv_path)
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(rows, expected_rows, "Row count mismatch: expected {}, got {}", expected_rows, rows);
    assert_eq!(cols, expected_cols, "Column count mismatch: expected {}, got {}", expected_cols, cols);
}
