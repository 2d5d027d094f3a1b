//! CSV batch classification and sampling.
//!
//! Input and output CSVs carry one triangle per row in columns `a`, `b`, `c`.
//! When all three columns are integer typed the rows are classified as `i64`,
//! otherwise as `f64`; integers are never routed through floats.

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Serialize, Serializer};
use std::fs::File;
use std::path::Path;
use triangle::{Kind, Side, Sides};

use crate::util::create_parent_dir;

const COLUMNS: [&str; 3] = ["a", "b", "c"];

/// Outcome for one input row.
#[derive(Debug, Serialize, PartialEq)]
pub struct RowResult {
    pub row: usize,
    pub sides: [Option<SideValue>; 3],
    #[serde(serialize_with = "kind_label")]
    pub kind: Option<Kind>,
    pub error: Option<String>,
}

fn kind_label<S: Serializer>(kind: &Option<Kind>, s: S) -> Result<S::Ok, S::Error> {
    match kind {
        Some(k) => s.serialize_some(k.label()),
        None => s.serialize_none(),
    }
}

/// One side length as read from the input.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum SideValue {
    Int(i64),
    Float(f64),
}

impl From<i64> for SideValue {
    fn from(v: i64) -> Self {
        SideValue::Int(v)
    }
}

impl From<f64> for SideValue {
    fn from(v: f64) -> Self {
        SideValue::Float(v)
    }
}

/// Row counts per outcome.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub equilateral: usize,
    pub isosceles: usize,
    pub scalene: usize,
    pub invalid: usize,
}

impl Summary {
    pub fn from_results(results: &[RowResult]) -> Self {
        let mut s = Summary {
            rows: results.len(),
            ..Summary::default()
        };
        for r in results {
            match r.kind {
                Some(Kind::Equilateral) => s.equilateral += 1,
                Some(Kind::Isosceles) => s.isosceles += 1,
                Some(Kind::Scalene) => s.scalene += 1,
                None => s.invalid += 1,
            }
        }
        s
    }
}

/// Read a CSV with columns `a`, `b`, `c` (any numeric type).
pub fn read_sides_csv(path: &Path) -> Result<DataFrame> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(df)
}

/// Classify every row of `df`. Missing values are reported per row.
pub fn classify_frame(df: &DataFrame) -> Result<Vec<RowResult>> {
    let mut cols = Vec::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        let col = df
            .column(name)
            .with_context(|| format!("missing column {name:?}"))?;
        cols.push(col);
    }

    if cols.iter().all(|col| is_integer_dtype(col.dtype())) {
        let mut values: Vec<Vec<Option<i64>>> = Vec::with_capacity(COLUMNS.len());
        for (name, col) in COLUMNS.iter().zip(&cols) {
            let col = col
                .cast(&DataType::Int64)
                .with_context(|| format!("column {name:?} is not an integer column"))?;
            values.push(col.i64()?.into_iter().collect());
        }
        Ok(classify_columns(df.height(), &values))
    } else {
        let mut values: Vec<Vec<Option<f64>>> = Vec::with_capacity(COLUMNS.len());
        for (name, col) in COLUMNS.iter().zip(&cols) {
            let col = col
                .cast(&DataType::Float64)
                .with_context(|| format!("column {name:?} is not numeric"))?;
            values.push(col.f64()?.into_iter().collect());
        }
        Ok(classify_columns(df.height(), &values))
    }
}

/// Integer dtypes that fit in `i64` without loss.
fn is_integer_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
    )
}

fn classify_columns<T>(height: usize, cols: &[Vec<Option<T>>]) -> Vec<RowResult>
where
    T: Side + Into<SideValue>,
{
    (0..height)
        .map(|row| classify_row(row, [cols[0][row], cols[1][row], cols[2][row]]))
        .collect()
}

fn classify_row<T>(row: usize, sides: [Option<T>; 3]) -> RowResult
where
    T: Side + Into<SideValue>,
{
    let (kind, error) = match sides {
        [Some(a), Some(b), Some(c)] => match Sides::new(a, b, c).classify() {
            Ok(kind) => (Some(kind), None),
            Err(err) => (None, Some(err.to_string())),
        },
        _ => (None, Some("missing side length".to_string())),
    };
    RowResult {
        row,
        sides: sides.map(|s| s.map(Into::into)),
        kind,
        error,
    }
}

/// Write sides as a CSV with columns `a`, `b`, `c`.
pub fn write_sides_csv(path: &Path, sides: &[Sides<f64>]) -> Result<()> {
    create_parent_dir(path)?;
    let mut df = df!(
        COLUMNS[0] => sides.iter().map(|s| s.a).collect::<Vec<f64>>(),
        COLUMNS[1] => sides.iter().map(|s| s.b).collect::<Vec<f64>>(),
        COLUMNS[2] => sides.iter().map(|s| s.c).collect::<Vec<f64>>()
    )?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use triangle::rand::{draw_many, KindChoice, SampleCfg};

    #[test]
    fn classifies_rows_with_errors_inline() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sides.csv");
        fs::write(&input, "a,b,c\n3,4,5\n2,2,2\n2,2,3\n2,2,4\n0,1,1\n3,,5\n").unwrap();

        let df = read_sides_csv(&input).unwrap();
        let results = classify_frame(&df).unwrap();
        let kinds: Vec<_> = results.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Some(Kind::Scalene),
                Some(Kind::Equilateral),
                Some(Kind::Isosceles),
                None,
                None,
                None
            ]
        );
        assert_eq!(
            results[5].sides,
            [Some(SideValue::Int(3)), None, Some(SideValue::Int(5))]
        );
        assert_eq!(results[5].error.as_deref(), Some("missing side length"));
        assert!(results[4].error.as_deref().unwrap().contains("positive"));

        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["kind"], "scalene");
        assert_eq!(json["sides"], serde_json::json!([3, 4, 5]));
        assert!(serde_json::to_value(&results[3]).unwrap()["kind"].is_null());

        let summary = Summary::from_results(&results);
        assert_eq!(
            summary,
            Summary {
                rows: 6,
                equilateral: 1,
                isosceles: 1,
                scalene: 1,
                invalid: 3,
            }
        );
    }

    #[test]
    fn large_integer_sides_keep_exact_equality() {
        // 2^53 + 1 and 2^53 collapse to the same f64.
        let dir = tempdir().unwrap();
        let input = dir.path().join("big.csv");
        fs::write(
            &input,
            "a,b,c\n9007199254740993,9007199254740992,9007199254740992\n",
        )
        .unwrap();
        let results = classify_frame(&read_sides_csv(&input).unwrap()).unwrap();
        assert_eq!(results[0].kind, Some(Kind::Isosceles));
        assert_eq!(results[0].sides[0], Some(SideValue::Int(9_007_199_254_740_993)));
    }

    #[test]
    fn float_columns_are_classified_as_floats() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("mixed.csv");
        fs::write(&input, "a,b,c\n1.5,2,2\n0.5,0.5,0.5\n").unwrap();
        let results = classify_frame(&read_sides_csv(&input).unwrap()).unwrap();
        assert_eq!(results[0].kind, Some(Kind::Isosceles));
        assert_eq!(results[0].sides[1], Some(SideValue::Float(2.0)));
        assert_eq!(results[1].kind, Some(Kind::Equilateral));
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.csv");
        fs::write(&input, "a,b\n1,1\n").unwrap();
        let df = read_sides_csv(&input).unwrap();
        let err = classify_frame(&df).unwrap_err();
        assert!(err.to_string().contains("missing column \"c\""));
    }

    #[test]
    fn sampled_csv_reads_back_as_requested_kind() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("iso.csv");
        let cfg = SampleCfg {
            kind: KindChoice::Exactly(Kind::Isosceles),
            ..SampleCfg::default()
        };
        let sides = draw_many(cfg, 11, 25).unwrap();
        write_sides_csv(&out, &sides).unwrap();

        let results = classify_frame(&read_sides_csv(&out).unwrap()).unwrap();
        assert_eq!(results.len(), 25);
        assert!(results.iter().all(|r| r.kind == Some(Kind::Isosceles)));
    }
}
