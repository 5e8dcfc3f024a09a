// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// Runs the regeneration top to bottom:
//
//   Step 1: linalgf.h ──derive──► linalgd.h   (read, write)
//   Step 2: linalgf.c ──derive──► linalgd.c   (read, write)
//   Step 3: re-read all four files from the store
//   Step 4: merge headers ──► linalg.h        (write)
//   Step 5: merge sources ──► linalg.c        (write)
//
// Step 3 deliberately reads the files back instead of reusing
// the buffers from steps 1-2: the merge sees exactly what is on
// disk. Any error aborts immediately; whatever was already
// written stays written.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::Result;

use crate::domain::layout::{
    COMBINED_HEADER, COMBINED_SOURCE, DOUBLE_HEADER, DOUBLE_SOURCE, FLOAT_HEADER,
    FLOAT_SOURCE, GENERATED_FILES,
};
use crate::domain::traits::TextStore;
use crate::transform::{
    merge::{merge_headers, merge_sources},
    precision::{derive_double_header, derive_double_source},
};

// ─── Configuration ────────────────────────────────────────────────────────────
/// Where to run. The six filenames are fixed; only their
/// directory can be chosen.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub dir: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self { dir: ".".to_string() }
    }
}

/// Byte sizes of everything written, for the CLI summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub written: Vec<(&'static str, usize)>,
}

impl GenerateReport {
    fn record(&mut self, name: &'static str, text: &str) {
        self.written.push((name, text.len()));
    }
}

// ─── GenerateUseCase ──────────────────────────────────────────────────────────
pub struct GenerateUseCase<S: TextStore> {
    store: S,
}

impl<S: TextStore> GenerateUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Give the store back (tests inspect it after a run)
    #[cfg(test)]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Execute the full regeneration end to end
    pub fn execute(&mut self) -> Result<GenerateReport> {
        let mut report = GenerateReport::default();

        // ── Step 1: double header ─────────────────────────────────────────────
        let float_header  = self.store.read(FLOAT_HEADER)?;
        let double_header = derive_double_header(&float_header);
        self.store.write(DOUBLE_HEADER, &double_header)?;
        report.record(DOUBLE_HEADER, &double_header);

        // ── Step 2: double source ─────────────────────────────────────────────
        let float_source  = self.store.read(FLOAT_SOURCE)?;
        let double_source = derive_double_source(&float_source);
        self.store.write(DOUBLE_SOURCE, &double_source)?;
        report.record(DOUBLE_SOURCE, &double_source);

        // ── Step 3: read everything back ──────────────────────────────────────
        let float_header  = self.store.read(FLOAT_HEADER)?;
        let double_header = self.store.read(DOUBLE_HEADER)?;
        let float_source  = self.store.read(FLOAT_SOURCE)?;
        let double_source = self.store.read(DOUBLE_SOURCE)?;

        // ── Step 4: combined header ───────────────────────────────────────────
        let combined_header = merge_headers(&float_header, &double_header);

        // ── Step 5: combined source ───────────────────────────────────────────
        let combined_source = merge_sources(&float_source, &double_source);

        self.store.write(COMBINED_HEADER, &combined_header)?;
        report.record(COMBINED_HEADER, &combined_header);
        self.store.write(COMBINED_SOURCE, &combined_source)?;
        report.record(COMBINED_SOURCE, &combined_source);

        tracing::info!("Generated {}", GENERATED_FILES.join(", "));
        Ok(report)
    }
}
