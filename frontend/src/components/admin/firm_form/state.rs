use common::model::firm::PropFirm;
use common::validation::{FirmDraft, ValidationErrors};

pub struct FirmForm {
    pub draft: FirmDraft,
    /// Comma-separated raw inputs, split into the draft lists on submit.
    pub features_input: String,
    pub pros_input: String,
    pub cons_input: String,
    pub errors: ValidationErrors,
    pub submitting: bool,
}

impl FirmForm {
    /// Empty defaults for a new record, or a draft seeded from the record
    /// being edited.
    pub fn from_editing(editing: Option<&PropFirm>) -> Self {
        match editing {
            Some(firm) => Self {
                draft: FirmDraft::from_firm(firm),
                features_input: firm.features.join(", "),
                pros_input: firm.pros.join(", "),
                cons_input: firm.cons.join(", "),
                errors: ValidationErrors::new(),
                submitting: false,
            },
            None => Self {
                draft: FirmDraft::default(),
                features_input: String::new(),
                pros_input: String::new(),
                cons_input: String::new(),
                errors: ValidationErrors::new(),
                submitting: false,
            },
        }
    }

    /// Folds the raw list inputs into the draft before validation.
    pub fn sync_lists(&mut self) {
        self.draft.features = parse_list(&self.features_input);
        self.draft.pros = parse_list(&self.pros_input);
        self.draft.cons = parse_list(&self.cons_input);
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}
