#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewCounter {
    value: u64,
}

impl ViewCounter {
    pub fn new(initial: u64) -> Self {
        Self { value: initial }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn tick(&mut self) -> u64 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    pub fn label(&self) -> String {
        self.value.to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UptimeClock {
    seconds: u64,
}

impl UptimeClock {
    pub fn new() -> Self {
        Self { seconds: 0 }
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn tick(&mut self) -> u64 {
        self.seconds = self.seconds.saturating_add(1);
        self.seconds
    }

    pub fn label(&self) -> String {
        format_uptime(self.seconds)
    }
}

/// `m:ss`, minutes unbounded.
pub fn format_uptime(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
