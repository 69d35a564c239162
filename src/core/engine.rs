use crate::config::PatchConfig;
use crate::core::brand::HtmlBrander;
use crate::core::bundle::BundlePatcher;
use crate::core::recolor::Recolorer;
use crate::domain::model::{join_paths, BrandOutcome, BundleOutcome, RecolorOutcome, RunSummary};
use crate::domain::ports::Pass;
use crate::utils::error::Result;
use std::io::Write;

/// Runs bundle patch, HTML branding and recolor, in that order.
pub struct PatchEngine {
    config: PatchConfig,
}

impl PatchEngine {
    pub fn new(config: PatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    /// Run with summary lines on stdout and warnings on stderr.
    pub fn run(&self) -> Result<RunSummary> {
        self.run_with(&mut std::io::stdout(), &mut std::io::stderr())
    }

    /// Only the bundle pass can fail the run; the later passes report and carry on.
    /// Nothing is written to `out` once a pass has failed.
    pub fn run_with<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Result<RunSummary> {
        if self.config.dry_run {
            tracing::info!("🔍 DRY RUN MODE - no files will be written");
        }

        let bundle = self.run_pass(&BundlePatcher::new()?)?;
        report_bundle(&bundle, out);

        let brand = self.run_pass(&HtmlBrander)?;
        report_brand(&brand, out, err);

        let recolor = self.run_pass(&Recolorer::new(&self.config.recolor.target)?)?;
        report_recolor(&recolor, out, err);

        Ok(RunSummary {
            bundle,
            brand,
            recolor,
        })
    }

    fn run_pass<P: Pass>(&self, pass: &P) -> Result<P::Outcome> {
        tracing::info!("▶ Running {} pass", pass.name());
        let outcome = pass.run(&self.config);
        if let Err(e) = &outcome {
            tracing::error!("❌ {} pass failed: {}", pass.name(), e);
        }
        outcome
    }
}

// Summary output is best effort; a closed stdout must not fail the run.
fn emit<W: Write>(w: &mut W, line: &str) {
    if let Err(e) = writeln!(w, "{line}") {
        tracing::debug!("Failed to write summary line: {}", e);
    }
}

fn report_bundle<O: Write>(outcome: &BundleOutcome, out: &mut O) {
    emit(out, &format!("Patched bundle(s): {}", join_paths(&outcome.patched)));
}

fn report_brand<O: Write, E: Write>(outcome: &BrandOutcome, out: &mut O, err: &mut E) {
    for failure in &outcome.failures {
        tracing::warn!("Failed to brand {}: {}", failure.path.display(), failure.reason);
        emit(err, &format!("Failed to brand {}: {}", failure.path.display(), failure.reason));
    }

    if outcome.branded.is_empty() {
        tracing::warn!(
            "No HTML branding targets updated ({} candidate(s))",
            outcome.candidates
        );
        emit(err, "No HTML branding targets updated; upstream layout may have changed");
    } else {
        emit(
            out,
            &format!("Heartbeat branding injected into: {}", join_paths(&outcome.branded)),
        );
    }
}

fn report_recolor<O: Write, E: Write>(outcome: &RecolorOutcome, out: &mut O, err: &mut E) {
    for failure in &outcome.failures {
        tracing::warn!("Failed to recolor {}: {}", failure.path.display(), failure.reason);
        emit(err, &format!("Failed to recolor {}: {}", failure.path.display(), failure.reason));
    }

    if outcome.touched.is_empty() {
        emit(
            out,
            &format!("No occurrences of {} found; nothing replaced.", outcome.target),
        );
    } else {
        tracing::debug!("{} occurrence(s) replaced in total", outcome.occurrences);
        emit(
            out,
            &format!(
                "Swapped {} -> {} in {} asset(s).",
                outcome.target,
                outcome.replacement,
                outcome.touched.len()
            ),
        );
    }
}
