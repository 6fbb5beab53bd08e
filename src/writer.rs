use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use goto_target::{FormattedTarget, GotoSession, ResolutionKind};

/// One resolved (or rejected) input line, as printed by the CLI
#[derive(Debug, Serialize)]
pub struct TargetRecord {
    pub input: String,
    pub offset: Option<usize>,
    pub kind: Option<ResolutionKind>,
    /// Why nothing matched, when nothing did
    pub miss: Option<String>,
    #[serde(flatten)]
    pub display: FormattedTarget,
}

impl TargetRecord {
    pub fn from_session(session: &GotoSession<'_>) -> Self {
        let (offset, kind, miss) = match session.resolution() {
            Some(Ok(resolution)) => (Some(resolution.offset), Some(resolution.kind), None),
            Some(Err(miss)) => (None, None, Some(miss.to_string())),
            None => (None, None, None),
        };
        Self {
            input: session.input().to_string(),
            offset,
            kind,
            miss,
            display: session.display().clone(),
        }
    }
}

pub fn write_record<W: Write + ?Sized>(out: &mut W, record: &TargetRecord, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(record)?)?;
        return Ok(());
    }

    match record.kind {
        Some(kind) => writeln!(
            out,
            "{} {} {} {} {}",
            record.input.trim().bright_white().bold(),
            record.display.offset_text.bright_green().bold(),
            record.display.address_text.bright_blue(),
            record.display.label_text.bright_yellow(),
            format!("({})", kind).bright_black()
        )?,
        None => writeln!(
            out,
            "{} {} {}",
            record.input.trim().bright_white().bold(),
            "no match".bright_red().bold(),
            format!("({})", record.miss.as_deref().unwrap_or("no input")).bright_black()
        )?,
    }
    Ok(())
}
