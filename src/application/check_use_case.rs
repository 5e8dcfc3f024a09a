// ============================================================
// Layer 2 — CheckUseCase
// ============================================================
// Answers "are the generated files up to date?" without writing
// anything. The four outputs are rebuilt in memory from the two
// inputs and compared byte for byte with what the store holds.
//
// Missing inputs are still errors; missing outputs are a verdict.

use anyhow::Result;

use crate::domain::layout::{
    COMBINED_HEADER, COMBINED_SOURCE, DOUBLE_HEADER, DOUBLE_SOURCE, FLOAT_HEADER,
    FLOAT_SOURCE,
};
use crate::domain::traits::TextStore;
use crate::transform::{
    merge::{merge_headers, merge_sources},
    precision::{derive_double_header, derive_double_source},
};

/// State of one generated file relative to its inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    UpToDate,
    Stale,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub files: Vec<(&'static str, FileStatus)>,
}

impl CheckReport {
    /// True when every generated file matches
    pub fn is_clean(&self) -> bool {
        self.files.iter().all(|(_, s)| *s == FileStatus::UpToDate)
    }

    /// Names of files that are stale or missing
    pub fn outdated(&self) -> Vec<&'static str> {
        self.files
            .iter()
            .filter(|(_, s)| *s != FileStatus::UpToDate)
            .map(|(n, _)| *n)
            .collect()
    }
}

/// Build all four outputs from the two inputs, in write order.
pub fn render_outputs(float_header: &str, float_source: &str) -> [(&'static str, String); 4] {
    let double_header = derive_double_header(float_header);
    let double_source = derive_double_source(float_source);
    let combined_header = merge_headers(float_header, &double_header);
    let combined_source = merge_sources(float_source, &double_source);

    [
        (DOUBLE_HEADER, double_header),
        (DOUBLE_SOURCE, double_source),
        (COMBINED_HEADER, combined_header),
        (COMBINED_SOURCE, combined_source),
    ]
}

pub struct CheckUseCase<'a, S: TextStore> {
    store: &'a S,
}

impl<'a, S: TextStore> CheckUseCase<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Result<CheckReport> {
        let float_header = self.store.read(FLOAT_HEADER)?;
        let float_source = self.store.read(FLOAT_SOURCE)?;

        let mut files = Vec::with_capacity(4);

        for (name, expected) in render_outputs(&float_header, &float_source) {
            let status = match self.store.read_optional(name)? {
                None => FileStatus::Missing,
                Some(on_disk) if on_disk == expected => FileStatus::UpToDate,
                Some(_) => FileStatus::Stale,
            };
            tracing::debug!("{}: {:?}", name, status);
            files.push((name, status));
        }

        Ok(CheckReport { files })
    }
}
