use common::validation::{ReviewDraft, ValidationErrors};

pub struct ReviewForm {
    pub draft: ReviewDraft,
    pub errors: ValidationErrors,
    pub submitting: bool,
    /// Star currently hovered in the picker, 0 when none.
    pub hovered: u8,
}

impl ReviewForm {
    pub fn new() -> Self {
        Self {
            draft: ReviewDraft::default(),
            errors: ValidationErrors::new(),
            submitting: false,
            hovered: 0,
        }
    }
}
