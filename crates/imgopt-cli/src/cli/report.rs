//! Human-readable progress and summary on stdout.

use imgopt_core::processor::{ItemEvent, ProcessError};
use imgopt_core::summary::{self, ItemOutcome, RunSummary};
use imgopt_core::url_model::OUTPUT_EXTENSION;
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 70;
const LABEL_WIDTH: usize = 40;
const ERROR_WIDTH: usize = 40;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Directory as shown to the user, always with one trailing `/`.
pub fn dir_display(dir: &Path) -> String {
    let s = dir.display().to_string();
    format!("{}/", s.trim_end_matches('/'))
}

pub fn progress_prefix(index: usize, total: usize) -> String {
    format!("[{:2}/{}] ", index, total)
}

pub fn fetching_line(label: &str) -> String {
    format!(
        "Downloading: {:<width$} ",
        summary::truncate_chars(label, LABEL_WIDTH),
        width = LABEL_WIDTH
    )
}

pub fn outcome_line(id: &str, result: &Result<ItemOutcome, ProcessError>) -> String {
    match result {
        Ok(ItemOutcome::Skipped { bytes }) => format!(
            "✓ Skip (exists): {}.{} ({:.1} KB)",
            id,
            OUTPUT_EXTENSION,
            summary::kib(*bytes)
        ),
        Ok(ItemOutcome::Written {
            downloaded,
            written,
        }) => format!(
            "✓ {:5.1} KB (saved {:.0}%)",
            summary::kib(*written),
            summary::savings_percent(*downloaded, *written)
        ),
        Err(e) => {
            let msg = e.to_string();
            format!("✗ ERROR: {}", summary::truncate_chars(&msg, ERROR_WIDTH))
        }
    }
}

pub fn summary_block(s: &RunSummary, output_dir: &Path) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format!(
        "COMPLETED: {}/{} images downloaded\n",
        s.succeeded, s.total
    ));
    out.push_str(&format!("Total size: {:.2} MB\n", summary::mib(s.total_bytes)));
    out.push_str(&format!("Output directory: {}\n", dir_display(output_dir)));
    out.push_str(&rule());
    out.push('\n');

    if s.all_succeeded() {
        out.push_str("\n✓ SUCCESS! All images optimized and ready for deployment.\n");
        out.push_str("\nNext steps:\n");
        out.push_str(&format!(
            "  1. Commit the {} directory to git\n",
            dir_display(output_dir)
        ));
        out.push_str("  2. Push to GitHub\n");
        out.push_str("  3. Deploy the site so pages serve the WebP images\n");
    } else {
        out.push_str(&format!(
            "\n⚠ WARNING: {} images failed to download.\n",
            s.failed_count()
        ));
        out.push_str("Please check your internet connection and try again.\n");
    }
    out
}

/// Writes the report to any sink (stdout in the binary, a buffer in tests).
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self, total: usize, output_dir: &Path) -> io::Result<()> {
        writeln!(self.out, "{}", rule())?;
        writeln!(self.out, "IMAGE OPTIMIZATION")?;
        writeln!(self.out, "{}", rule())?;
        writeln!(
            self.out,
            "\nDownloading {} images to {}\n",
            total,
            dir_display(output_dir)
        )?;
        self.out.flush()
    }

    /// Progress output must not abort the run, so write errors are dropped here.
    pub fn on_event(&mut self, event: &ItemEvent<'_>) {
        let _ = self.write_event(event);
    }

    fn write_event(&mut self, event: &ItemEvent<'_>) -> io::Result<()> {
        match event {
            ItemEvent::Started { index, total, .. } => {
                write!(self.out, "{}", progress_prefix(*index, *total))?;
            }
            ItemEvent::Fetching { spec } => {
                write!(self.out, "{}", fetching_line(spec.label))?;
            }
            ItemEvent::Finished { spec, result } => {
                writeln!(self.out, "{}", outcome_line(spec.id, result))?;
            }
        }
        self.out.flush()
    }

    pub fn summary(&mut self, s: &RunSummary, output_dir: &Path) -> io::Result<()> {
        write!(self.out, "{}", summary_block(s, output_dir))?;
        self.out.flush()
    }
}
