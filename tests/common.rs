#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{Cursor, Read};
use std::path::PathBuf;
use tsreport::models::{Identity, OutputFormat, ReportSchema};
use tsreport::report::{ReportFilters, ReportRequest, Upload};

pub const HEADER: &str = "Project,Client,User,Start Date,Duration (h),Billable,Description";

pub fn tsr() -> Command {
    let mut cmd = cargo_bin_cmd!("tsreport");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tsreport", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write a CSV made of `HEADER` plus `rows` and return its path
pub fn write_csv(dir: &PathBuf, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = String::from(HEADER);
    for r in rows {
        content.push('\n');
        content.push_str(r);
    }
    content.push('\n');
    fs::write(&path, content).expect("write csv");
    path
}

pub fn upload(rows: &[&str]) -> Upload {
    upload_with_header(HEADER, rows)
}

pub fn upload_with_header(header: &str, rows: &[&str]) -> Upload {
    let mut content = String::from(header);
    for r in rows {
        content.push('\n');
        content.push_str(r);
    }
    Upload::new("export.csv", content.into_bytes())
}

pub fn request(schema: ReportSchema, format: OutputFormat) -> ReportRequest {
    ReportRequest {
        schema,
        format,
        filters: ReportFilters::default(),
        identity: Identity::Individual {
            full_name: "Jane Doe".to_string(),
        },
    }
}

/// Read one part of a generated XLSX (a zip archive)
pub fn xlsx_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid xlsx zip");
    let mut part = archive.by_name(name).expect("part present");
    let mut out = String::new();
    part.read_to_string(&mut out).expect("utf-8 part");
    out
}

pub fn shared_strings(bytes: &[u8]) -> String {
    xlsx_part(bytes, "xl/sharedStrings.xml")
}

pub fn sheet_xml(bytes: &[u8]) -> String {
    xlsx_part(bytes, "xl/worksheets/sheet1.xml")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
