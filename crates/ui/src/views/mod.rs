mod home;
pub(crate) mod journal;
mod motivation;
pub(crate) mod quiz;
mod results;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use journal::JournalView;
pub use motivation::MotivationView;
pub use quiz::QuizView;
pub use results::ResultsView;
pub use state::ViewError;
