use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedBehavior {
    pub behavior: String,
    pub reason: String,
}

/// Which behaviors bound to the page and which were left out, in install order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    installed: Vec<String>,
    skipped: Vec<SkippedBehavior>,
}

impl InstallReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_installed(&mut self, behavior: &str) {
        self.installed.push(behavior.to_string());
    }

    pub fn record_skipped(&mut self, behavior: &str, reason: impl Into<String>) {
        self.skipped.push(SkippedBehavior {
            behavior: behavior.to_string(),
            reason: reason.into(),
        });
    }

    pub fn installed(&self) -> &[String] {
        &self.installed
    }

    pub fn skipped(&self) -> &[SkippedBehavior] {
        &self.skipped
    }

    pub fn is_installed(&self, behavior: &str) -> bool {
        self.installed.iter().any(|name| name == behavior)
    }

    pub fn is_skipped(&self, behavior: &str) -> bool {
        self.skipped.iter().any(|entry| entry.behavior == behavior)
    }

    /// One-line form for the console, e.g. `6 installed, 1 skipped (eyes: ...)`.
    pub fn summary(&self) -> String {
        let mut line = format!("{} installed", self.installed.len());
        if !self.skipped.is_empty() {
            let reasons: Vec<String> = self
                .skipped
                .iter()
                .map(|entry| format!("{}: {}", entry.behavior, entry.reason))
                .collect();
            line.push_str(&format!(
                ", {} skipped ({})",
                self.skipped.len(),
                reasons.join("; ")
            ));
        }
        line
    }
}
