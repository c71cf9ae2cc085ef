//! Line-range edits between two texts
//!
//! An `Edit` describes one contiguous region that differs between the old
//! side (`a`) and the new side (`b`) as two half-open line ranges. An edit
//! list is ordered and its ranges never overlap.

use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditType {
    /// Both ranges are empty; never produced by the edit list computer
    Empty,
    Delete,
    Insert,
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Edit {
    pub begin_a: usize,
    pub end_a: usize,
    pub begin_b: usize,
    pub end_b: usize,
}

impl Edit {
    pub fn edit_type(&self) -> EditType {
        match (self.begin_a == self.end_a, self.begin_b == self.end_b) {
            (true, true) => EditType::Empty,
            (false, true) => EditType::Delete,
            (true, false) => EditType::Insert,
            (false, false) => EditType::Replace,
        }
    }

    /// Both cursors have walked past this edit
    pub fn is_passed(&self, a: usize, b: usize) -> bool {
        self.end_a <= a && self.end_b <= b
    }
}

pub type EditList = Vec<Edit>;
