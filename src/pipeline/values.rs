//! Column lookup and raw value rendering shared by the pipeline steps

use polars::prelude::*;

use super::error::{FeatureError, Result};

/// Look up a column, failing with [`FeatureError::ColumnNotFound`]
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| FeatureError::ColumnNotFound {
        column: name.to_string(),
        available: column_names(df),
    })
}

/// Check that every named column exists before any work is done
pub fn ensure_columns<S: AsRef<str>>(df: &DataFrame, names: &[S]) -> Result<()> {
    for name in names {
        require_column(df, name.as_ref())?;
    }
    Ok(())
}

pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|s| s.to_string()).collect()
}

/// Render every cell of a column as text, keeping nulls as `None`.
///
/// Whole floats render without a trailing `.0` so that `1.0` in a float
/// column compares equal to `1` in an integer column.
pub fn column_to_strings(col: &Column) -> Result<Vec<Option<String>>> {
    let values: Vec<Option<String>> = match col.dtype() {
        DataType::String => col
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect(),
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => {
            let cast = col.cast(&DataType::Int64)?;
            cast.i64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => {
            let cast = col.cast(&DataType::UInt64)?;
            cast.u64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::Float32 | DataType::Float64 => {
            let cast = col.cast(&DataType::Float64)?;
            cast.f64()?
                .into_iter()
                .map(|v| v.map(|n| format!("{}", n)))
                .collect()
        }
        DataType::Boolean => col
            .bool()?
            .into_iter()
            .map(|v| v.map(|b| b.to_string()))
            .collect(),
        _ => {
            let cast = col.cast(&DataType::String)?;
            cast.str()?
                .into_iter()
                .map(|v| v.map(|s| s.to_string()))
                .collect()
        }
    };

    Ok(values)
}

/// Extract a numeric (or boolean) column as `f64`, rejecting nulls,
/// NaN and infinities
pub fn column_to_f64(col: &Column) -> Result<Vec<f64>> {
    let dtype = col.dtype();
    if !(dtype.is_primitive_numeric() || dtype.is_bool()) {
        return Err(FeatureError::NotNumeric {
            column: col.name().to_string(),
            dtype: dtype.to_string(),
        });
    }

    let cast = col.cast(&DataType::Float64)?;
    cast.f64()?
        .into_iter()
        .map(|v| match v {
            Some(n) if n.is_finite() => Ok(n),
            Some(_) => Err(FeatureError::NonFiniteValue {
                column: col.name().to_string(),
            }),
            None => Err(FeatureError::NullValue {
                column: col.name().to_string(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_floats_render_like_integers() {
        let df = df! {
            "f" => [1.0f64, 2.5],
            "i" => [1i64, 2],
        }
        .unwrap();

        let floats = column_to_strings(df.column("f").unwrap()).unwrap();
        let ints = column_to_strings(df.column("i").unwrap()).unwrap();
        assert_eq!(floats, vec![Some("1".to_string()), Some("2.5".to_string())]);
        assert_eq!(ints[0], floats[0]);
    }

    #[test]
    fn test_nulls_stay_none() {
        let df = df! { "s" => [Some("a"), None] }.unwrap();
        let values = column_to_strings(df.column("s").unwrap()).unwrap();
        assert_eq!(values, vec![Some("a".to_string()), None]);
    }

    #[test]
    fn test_require_column_reports_available() {
        let df = df! { "a" => [1i32], "b" => [2i32] }.unwrap();
        match require_column(&df, "c") {
            Err(FeatureError::ColumnNotFound { column, available }) => {
                assert_eq!(column, "c");
                assert_eq!(available, vec!["a", "b"]);
            }
            other => panic!("Expected ColumnNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_string_column_is_not_numeric() {
        let df = df! { "s" => ["x", "y"] }.unwrap();
        let err = column_to_f64(df.column("s").unwrap()).unwrap_err();
        assert!(matches!(err, FeatureError::NotNumeric { .. }));
    }

    #[test]
    fn test_numeric_nulls_rejected() {
        let df = df! { "n" => [Some(1.0f64), None] }.unwrap();
        let err = column_to_f64(df.column("n").unwrap()).unwrap_err();
        assert!(matches!(err, FeatureError::NullValue { .. }));
    }

    #[test]
    fn test_nan_and_infinity_rejected() {
        let df = df! {
            "nan" => [1.5f64, f64::NAN, 2.0],
            "inf" => [1.5f64, f64::INFINITY, 2.0],
        }
        .unwrap();

        for name in ["nan", "inf"] {
            match column_to_f64(df.column(name).unwrap()) {
                Err(FeatureError::NonFiniteValue { column }) => assert_eq!(column, name),
                other => panic!("Expected NonFiniteValue, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_booleans_cast_to_f64() {
        let df = df! { "b" => [true, false, true] }.unwrap();
        let values = column_to_f64(df.column("b").unwrap()).unwrap();
        assert_eq!(values, vec![1.0, 0.0, 1.0]);
    }
}
