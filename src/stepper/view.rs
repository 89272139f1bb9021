//! Render-ready view model computed from the stepper state.

use crate::stepper::Step;

/// Number of label words kept in a popover row preview.
pub const PREVIEW_WORD_LIMIT: usize = 10;

const ELLIPSIS: &str = "\u{2026}";

/// Snapshot the host renders; recomputed after every state or input change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepperView {
    /// "Step {current} of {total}", with `current` clamped into `[1, N]`.
    pub summary: String,
    /// Progress indicator, `round(current / total * 100)`.
    pub progress_pct: u32,
    pub open: bool,
    /// Popover rows; empty while the popover is closed.
    pub rows: Vec<StepRow>,
}

/// One popover row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRow {
    pub id: u32,
    /// "Step {id}".
    pub heading: String,
    /// First words of the label, with an ellipsis when any were dropped.
    pub preview: String,
    /// Full label, surfaced as the hover/tooltip affordance.
    pub label: String,
    /// Whether this row's id equals the raw (unclamped) active value.
    pub current: bool,
}

pub(crate) fn build(steps: &[Step], active: u32, open: bool) -> Option<StepperView> {
    if steps.is_empty() {
        return None;
    }

    let total = u32::try_from(steps.len()).unwrap_or(u32::MAX);
    let current = active.clamp(1, total);

    let rows = if open {
        steps
            .iter()
            .map(|step| StepRow {
                id: step.id,
                heading: format!("Step {}", step.id),
                preview: preview(&step.label),
                label: step.label.clone(),
                current: step.id == active,
            })
            .collect()
    } else {
        Vec::new()
    };

    Some(StepperView {
        summary: format!("Step {current} of {total}"),
        progress_pct: progress_pct(current, total),
        open,
        rows,
    })
}

// Integer round() of current / total * 100.
fn progress_pct(current: u32, total: u32) -> u32 {
    let scaled = (u64::from(current) * 100 + u64::from(total) / 2) / u64::from(total);
    u32::try_from(scaled).unwrap_or(100)
}

fn preview(label: &str) -> String {
    let mut words = label.split_whitespace();
    let head: Vec<&str> = words.by_ref().take(PREVIEW_WORD_LIMIT).collect();
    let mut preview = head.join(" ");
    if words.next().is_some() {
        preview.push_str(ELLIPSIS);
    }
    preview
}
