/// Single active item in an ordered sequence, moved by direct selection or by
/// stepping one position without wraparound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    len: usize,
    active: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

impl Step {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Step::Prev),
            "ArrowRight" => Some(Step::Next),
            _ => None,
        }
    }
}

impl Selection {
    pub fn new(len: usize, active: Option<usize>) -> Self {
        Self {
            len,
            active: active.filter(|index| *index < len),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.active = Some(index);
        Some(index)
    }

    /// Moves the selection one position. Returns the new index, or None when
    /// nothing is active or the move would leave the sequence.
    pub fn step(&mut self, step: Step) -> Option<usize> {
        let current = self.active?;
        let next = match step {
            Step::Prev => current.checked_sub(1)?,
            Step::Next => current + 1,
        };
        self.select(next)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}
