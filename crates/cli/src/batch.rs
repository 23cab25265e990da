//! CSV batch of operand pairs → JSON decisions.
//!
//! Input columns: `op,a_min_x,a_min_y,a_max_x,a_max_y,b_min_x,b_min_y,b_max_x,b_max_y`.
//! All four cells of an operand empty ⇒ empty operand.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use overlay_kit::{Envelope, OpCode, PrecisionModel};
use polars::prelude::*;
use serde::Serialize;

use crate::decide::{decide, Decision};

const BOUND_COLUMNS: [&str; 8] = [
    "a_min_x", "a_min_y", "a_max_x", "a_max_y", "b_min_x", "b_min_y", "b_max_x", "b_max_y",
];

/// One output record: the CSV row index plus its decision.
#[derive(Debug, Serialize)]
pub struct BatchRecord {
    pub row: usize,
    #[serde(flatten)]
    pub decision: Decision,
}

/// Read `input`, decide every row under `pm`, write a JSON array to `out`.
/// Returns the number of rows processed.
pub fn run_batch(input: &Path, out: &Path, pm: &PrecisionModel) -> Result<usize> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", input.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "batch_input_shape");

    let records = decide_frame(&df, pm)?;
    let empty = records.iter().filter(|r| r.decision.is_empty_result).count();
    tracing::info!(rows = records.len(), empty, "batch_decided");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&records)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(records.len())
}

fn decide_frame(df: &DataFrame, pm: &PrecisionModel) -> Result<Vec<BatchRecord>> {
    let ops: Vec<Option<String>> = df
        .column("op")
        .context("missing column `op`")?
        .cast(&DataType::String)?
        .str()?
        .into_iter()
        .map(|s| s.map(str::to_string))
        .collect();

    let bounds = BOUND_COLUMNS
        .iter()
        .map(|name| float_column(df, name))
        .collect::<Result<Vec<_>>>()?;

    let mut records = Vec::with_capacity(ops.len());
    for (row, op) in ops.iter().enumerate() {
        let op: OpCode = op
            .as_deref()
            .ok_or_else(|| anyhow!("row {row}: empty op"))?
            .parse()
            .with_context(|| format!("row {row}"))?;
        let cell = |k: usize| bounds[k][row];
        let a = envelope_from_cells([cell(0), cell(1), cell(2), cell(3)])
            .with_context(|| format!("row {row}: operand A"))?;
        let b = envelope_from_cells([cell(4), cell(5), cell(6), cell(7)])
            .with_context(|| format!("row {row}: operand B"))?;
        tracing::debug!(row, %op, "batch_row");
        records.push(BatchRecord {
            row,
            decision: decide(op, &a, &b, pm),
        });
    }
    Ok(records)
}

/// Column `name` as floats. Empty cells stay `None`; a non-empty cell that
/// does not parse as a number is an error rather than a silent null.
fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let raw = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?;
    let values: Vec<Option<f64>> = raw
        .cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .collect();
    let was_null = raw.is_null();
    let bad = values
        .iter()
        .zip(&was_null)
        .position(|(v, null)| v.is_none() && null == Some(false));
    if let Some(row) = bad {
        bail!("row {row}: column `{name}` is not a number");
    }
    Ok(values)
}

/// `[min_x, min_y, max_x, max_y]` cells → envelope; all empty ⇒ null.
fn envelope_from_cells(cells: [Option<f64>; 4]) -> Result<Envelope> {
    match cells {
        [Some(min_x), Some(min_y), Some(max_x), Some(max_y)] => {
            if [min_x, min_y, max_x, max_y].iter().any(|v| !v.is_finite()) {
                bail!("non-finite envelope bound {cells:?}");
            }
            Ok(Envelope::new(min_x, max_x, min_y, max_y))
        }
        [None, None, None, None] => Ok(Envelope::null()),
        _ => bail!("partially specified envelope {cells:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "op,a_min_x,a_min_y,a_max_x,a_max_y,b_min_x,b_min_y,b_max_x,b_max_y\n";

    #[test]
    fn envelope_cells() {
        assert!(envelope_from_cells([None; 4]).unwrap().is_null());
        let e = envelope_from_cells([Some(0.0), Some(1.0), Some(2.0), Some(3.0)]).unwrap();
        assert_eq!(e, Envelope::new(0.0, 2.0, 1.0, 3.0));
        assert!(envelope_from_cells([Some(0.0), None, None, None]).is_err());
        let nan = envelope_from_cells([Some(f64::NAN), Some(0.0), Some(1.0), Some(1.0)]);
        assert!(format!("{:#}", nan.unwrap_err()).contains("non-finite"));
        let inf = [Some(0.0), Some(0.0), Some(f64::INFINITY), Some(1.0)];
        assert!(envelope_from_cells(inf).is_err());
    }

    #[test]
    fn batch_writes_one_record_per_row() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pairs.csv");
        let out = dir.path().join("nested").join("decisions.json");
        let csv = format!(
            "{HEADER}intersection,0,0,1,1,5,5,6,6\n\
             union,0,0,1,1,,,,\n\
             difference,,,,,0,0,1,1\n"
        );
        fs::write(&input, csv).unwrap();

        let n = run_batch(&input, &out, &PrecisionModel::Floating).unwrap();
        assert_eq!(n, 3);
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows[0]["is_empty_result"], true);
        assert_eq!(rows[0]["empty_result_type"], "Polygon");
        assert_eq!(rows[1]["is_empty_result"], false);
        assert_eq!(rows[1]["clip"]["kind"], "none");
        assert_eq!(rows[2]["row"], 2);
        assert_eq!(rows[2]["is_empty_result"], true);
    }

    #[test]
    fn batch_rejects_unknown_op() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.csv");
        fs::write(&input, format!("{HEADER}clip,0,0,1,1,0,0,1,1\n")).unwrap();
        let err = run_batch(&input, &dir.path().join("o.json"), &PrecisionModel::Floating)
            .unwrap_err();
        assert!(format!("{err:#}").contains("unknown overlay operation"));
    }

    #[test]
    fn batch_rejects_non_numeric_bounds() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("o.json");

        let input = dir.path().join("letters.csv");
        fs::write(&input, format!("{HEADER}union,x,x,x,x,y,y,y,y\n")).unwrap();
        let err = run_batch(&input, &out, &PrecisionModel::Floating).unwrap_err();
        assert!(format!("{err:#}").contains("row 0: column `a_min_x` is not a number"));

        let input = dir.path().join("mixed.csv");
        let csv = format!(
            "{HEADER}intersection,0,0,1,1,0,0,1,1\n\
             intersection,0,0,1,1,abc,abc,abc,abc\n"
        );
        fs::write(&input, csv).unwrap();
        let err = run_batch(&input, &out, &PrecisionModel::Floating).unwrap_err();
        assert!(format!("{err:#}").contains("row 1: column `b_min_x` is not a number"));
        assert!(!out.exists());
    }

    #[test]
    fn batch_rejects_nan_bounds() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("nan.csv");
        fs::write(&input, format!("{HEADER}intersection,0,0,1,1,nan,0,1,1\n")).unwrap();
        let out = dir.path().join("o.json");
        assert!(run_batch(&input, &out, &PrecisionModel::Floating).is_err());
        assert!(!out.exists());
    }
}
