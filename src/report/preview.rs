// src/report/preview.rs

use crate::report::dataset::{COL_CLIENT, COL_PROJECT, COL_USER, RawTable};
use crate::utils::formatting::distinct;
use serde::Serialize;
use std::collections::BTreeMap;

pub const SAMPLE_ROWS: usize = 5;

/// Lightweight summary used to drive filter selection before converting.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Preview {
    pub columns: Vec<String>,
    pub sample_data: Vec<BTreeMap<String, String>>,
    pub unique_values: BTreeMap<String, Vec<String>>,
    pub total_rows: usize,
}

impl Preview {
    pub fn from_table(table: &RawTable) -> Self {
        let sample_data = table
            .rows
            .iter()
            .take(SAMPLE_ROWS)
            .map(|row| {
                table
                    .headers
                    .iter()
                    .enumerate()
                    .map(|(i, h)| (h.clone(), table.cell(row, i).to_string()))
                    .collect()
            })
            .collect();

        let mut unique_values = BTreeMap::new();
        for name in [COL_PROJECT, COL_CLIENT, COL_USER] {
            if let Some(idx) = table.column_index(name) {
                let values: Vec<String> = distinct(table.rows.iter().map(|r| table.cell(r, idx)))
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                unique_values.insert(name.to_string(), values);
            }
        }

        Self {
            columns: table.headers.clone(),
            sample_data,
            unique_values,
            total_rows: table.rows.len(),
        }
    }
}
