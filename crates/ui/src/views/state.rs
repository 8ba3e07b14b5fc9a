/// Failures surfaced to the user by a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidAnswers,
    ExportFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::InvalidAnswers => "Your answers could not be scored. Please try again.",
            ViewError::ExportFailed => "The journal could not be saved to disk.",
        }
    }
}
