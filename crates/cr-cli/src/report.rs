use crate::notice::{StatusNotice, indicator_label};
use crate::{CliError, CliResult};

use cr_health::ServerState;

use std::time::Duration;

use serde::Serialize;

/// One rendered state recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub state: ServerState,
    pub indicator: &'static str,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<StatusNotice>,
}

impl StatusReport {
    pub fn new(state: ServerState, waking_for: Duration) -> Self {
        Self {
            state,
            indicator: indicator_label(state),
            available: state.is_fully_available(),
            notice: StatusNotice::for_state(state, waking_for),
        }
    }

    /// Render as a single JSON line or as indented text.
    pub fn render(&self, json: bool) -> CliResult<String> {
        if json {
            return serde_json::to_string(self).map_err(CliError::from);
        }
        Ok(self.to_text())
    }

    fn to_text(&self) -> String {
        let mut lines = vec![format!("{} ({})", self.indicator, self.state)];

        if let Some(notice) = &self.notice {
            lines.push(format!("  {}", notice.heading));
            lines.extend(notice.body.iter().map(|line| format!("  {line}")));
            if let Some(hint) = notice.hint {
                lines.push(format!("  {hint}"));
            }
            if let Some(action) = notice.action {
                lines.push(format!("  [{action}]"));
            }
        }

        lines.join("\n")
    }
}
