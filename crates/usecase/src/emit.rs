use std::path::Path;

use toolchain_domain::{CaseDictionary, TargetName, compose_fragment, fragment_is_current};
use toolchain_ports::documents::DocumentStore;
use toolchain_shared_kernel::Result;
use tracing::{debug, info};

/// What [`EmitCase::run`] did with the fragment file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    Written,
    /// The file already held the same bytes and was left untouched.
    Unchanged,
}

/// Writes the case fragment consumed by the downstream build.
///
/// Rewriting an identical fragment would bump its timestamp and invalidate the
/// build, so the file is only written when its content differs.
pub struct EmitCase<'a> {
    documents: &'a dyn DocumentStore,
}

impl<'a> EmitCase<'a> {
    pub fn new(documents: &'a dyn DocumentStore) -> Self {
        Self { documents }
    }

    pub fn run(&self, case: &CaseDictionary, target: &TargetName, output: &Path) -> Result<EmitOutcome> {
        let composed = compose_fragment(case, target);
        let existing = self.documents.read_existing(output)?;

        if fragment_is_current(existing.as_deref(), &composed) {
            debug!(path = %output.display(), "case fragment unchanged");
            return Ok(EmitOutcome::Unchanged);
        }

        self.documents.write_text(output, &composed)?;
        info!(path = %output.display(), code = %target, "wrote case fragment");
        Ok(EmitOutcome::Written)
    }
}
