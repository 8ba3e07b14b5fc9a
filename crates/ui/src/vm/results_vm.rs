use services::ScoreReport;

pub const RESULTS_TIP: &str =
    "📌 Tip: Focus on embracing challenges and seeing effort as growth.";

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsVm {
    pub score_label: String,
    /// Bar height as a share of the 0-100 axis.
    pub bar_percent: f64,
    pub tip: Option<&'static str>,
}

#[must_use]
pub fn map_results(report: &ScoreReport) -> ResultsVm {
    ResultsVm {
        score_label: format!("{}%", report.score),
        bar_percent: report.score.percentage().clamp(0.0, 100.0),
        tip: report.show_tip.then_some(RESULTS_TIP),
    }
}
