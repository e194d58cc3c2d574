/// A mutually exclusive set of named members (pages, nav links, tabs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveGroup {
    ids: Vec<String>,
    active: Option<usize>,
}

impl ActiveGroup {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|member| member == id)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.and_then(|index| self.ids.get(index)).map(String::as_str)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    /// Marks `id` as the only active member. Unknown ids leave the group
    /// untouched and return None.
    pub fn activate(&mut self, id: &str) -> Option<usize> {
        let index = self.position(id)?;
        self.active = Some(index);
        Some(index)
    }

    pub fn activate_index(&mut self, index: usize) -> Option<usize> {
        if index >= self.ids.len() {
            return None;
        }
        self.active = Some(index);
        Some(index)
    }
}

/// Content element id for a tab trigger value (`"skills"` → `"skills-content"`).
pub fn content_id(tab: &str, suffix: &str) -> String {
    format!("{tab}{suffix}")
}
