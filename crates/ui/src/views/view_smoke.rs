use mindset_core::catalog::quotes;
use mindset_core::model::{Answer, QuizScore};
use services::QuotePicker;
use std::path::PathBuf;

use super::journal::JournalIntent;
use super::quiz::QuizIntent;
use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_with_session, test_services,
};

#[test]
fn home_view_smoke_renders_welcome_copy() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Growth Mindset Challenge"), "missing title in {html}");
    assert!(html.contains("Reflect through journaling"), "missing goals in {html}");
    assert!(html.contains("What is a Growth Mindset?"), "missing heading in {html}");
}

#[test]
fn motivation_view_smoke_renders_a_known_quote() {
    let mut harness = setup_view_harness(ViewKind::Motivation);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Growth Mindset Quote"), "missing title in {html}");
    // The view draws first from a picker seeded like this one.
    let expected = QuotePicker::new(Some(5)).pick().expect("quote");
    assert!(quotes().contains(&expected));
    // Markup escapes apostrophes, so match on the text before the first one.
    let probe = expected.split('\'').next().unwrap_or(expected);
    assert!(html.contains(probe), "missing {expected} in {html}");
    assert!(html.contains("callout-success"), "missing quote callout in {html}");
}

#[test]
fn quiz_view_smoke_renders_every_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Answer the following questions honestly:"), "missing intro in {html}");
    assert!(html.contains("Effort is more important than talent."), "missing question in {html}");
    assert_eq!(html.matches("class=\"quiz-question\"").count(), 5, "{html}");
    assert_eq!(html.matches("type=\"radio\"").count(), 10, "{html}");
    assert!(html.contains("Get My Score"), "missing submit in {html}");
    assert!(!html.contains("Your Growth Mindset Score"), "feedback before submit in {html}");
}

#[test]
fn results_view_smoke_warns_without_score() {
    let mut harness = setup_view_harness(ViewKind::Results);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Please take the quiz first!"), "missing warning in {html}");
    assert!(!html.contains("chart-bar"), "unexpected chart in {html}");
}

#[test]
fn results_view_smoke_renders_developing_score_with_tip() {
    let services = test_services(PathBuf::from("."));
    let mut session = services.new_session();
    session.record_score(QuizScore::new(60.0).unwrap());

    let mut harness = setup_view_harness_with_session(ViewKind::Results, services, session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("60.0%"), "missing metric in {html}");
    assert!(html.contains("height: 60%;"), "missing bar height in {html}");
    assert!(html.contains("Growth Mindset"), "missing bar label in {html}");
    assert!(html.contains("Tip: Focus on embracing challenges"), "missing tip in {html}");
}

#[test]
fn results_view_smoke_hides_tip_for_strong_score() {
    let services = test_services(PathBuf::from("."));
    let mut session = services.new_session();
    session.record_score(QuizScore::new(80.0).unwrap());

    let mut harness = setup_view_harness_with_session(ViewKind::Results, services, session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("80.0%"), "missing metric in {html}");
    assert!(!html.contains("Tip:"), "unexpected tip in {html}");
}

#[test]
fn journal_view_smoke_hides_table_when_empty() {
    let mut harness = setup_view_harness(ViewKind::Journal);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Save Entry"), "missing save button in {html}");
    assert!(!html.contains("Past Entries"), "unexpected table in {html}");
    assert!(!html.contains("Download Journal"), "unexpected download in {html}");
}

#[test]
fn journal_view_smoke_lists_entries_in_order() {
    let services = test_services(PathBuf::from("."));
    let journal = services.journal();
    let mut session = services.new_session();
    journal.save_entry(&mut session, "Retried the hard problem");
    journal.save_entry(&mut session, "Asked for feedback");

    let mut harness = setup_view_harness_with_session(ViewKind::Journal, services, session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Past Entries"), "missing heading in {html}");
    assert!(html.contains("2023-11-14 22:13:20"), "missing date in {html}");
    let first = html.find("Retried the hard problem").expect("first entry");
    let second = html.find("Asked for feedback").expect("second entry");
    assert!(first < second, "entries out of order in {html}");
    assert!(html.contains("Download Journal"), "missing download in {html}");
}

#[test]
fn quiz_view_submit_shows_feedback_and_stores_score() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    harness.quiz(QuizIntent::Choose {
        index: 2,
        answer: Answer::Disagree,
    });
    harness.quiz(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Your Growth Mindset Score: 80.0%"), "missing score in {html}");
    assert!(html.contains("celebrate"), "missing balloons in {html}");

    harness.quiz(QuizIntent::Choose {
        index: 0,
        answer: Answer::Disagree,
    });
    harness.quiz(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Your Growth Mindset Score: 60.0%"), "missing rescore in {html}");
    assert!(!html.contains("🎈"), "unexpected balloons in {html}");
}

#[test]
fn quiz_view_rejects_out_of_range_choice() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    harness.quiz(QuizIntent::Choose {
        index: 9,
        answer: Answer::Agree,
    });
    let html = harness.render();
    assert!(html.contains("could not be scored"), "missing error in {html}");
}

#[test]
fn journal_view_save_confirms_and_lists_entry() {
    let mut harness = setup_view_harness(ViewKind::Journal);
    harness.rebuild();

    harness.journal(JournalIntent::EditDraft("Kept going after a failed test".to_string()));
    harness.journal(JournalIntent::Save);
    let html = harness.render();
    assert!(html.contains("Entry saved!"), "missing confirmation in {html}");
    assert!(html.contains("Past Entries"), "missing table in {html}");
    assert!(html.contains("Kept going after a failed test"), "missing entry in {html}");
    assert!(html.contains("2023-11-14 22:13:20"), "missing date in {html}");

    harness.journal(JournalIntent::EditDraft("Next".to_string()));
    let html = harness.render();
    assert!(!html.contains("Entry saved!"), "stale confirmation in {html}");
}

#[test]
fn journal_view_download_writes_csv_into_export_dir() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let services = test_services(tmp.path().to_path_buf());
    let session = services.new_session();
    let mut harness = setup_view_harness_with_session(ViewKind::Journal, services, session);
    harness.rebuild();

    harness.journal(JournalIntent::EditDraft("Asked a mentor".to_string()));
    harness.journal(JournalIntent::Save);
    harness.journal(JournalIntent::Export);
    let html = harness.render();
    assert!(html.contains("growth_journal.csv"), "missing saved path in {html}");

    let written = std::fs::read_to_string(tmp.path().join("growth_journal.csv")).expect("csv");
    assert_eq!(written, "date,entry\n2023-11-14 22:13:20,Asked a mentor\n");
}

#[test]
fn journal_view_download_reports_unwritable_dir() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, b"").expect("blocker file");
    let services = test_services(blocker);
    let session = services.new_session();
    let mut harness = setup_view_harness_with_session(ViewKind::Journal, services, session);
    harness.rebuild();

    harness.journal(JournalIntent::Save);
    harness.journal(JournalIntent::Export);
    let html = harness.render();
    assert!(html.contains("could not be saved to disk"), "missing error in {html}");
    assert!(!html.contains("export-status"), "unexpected success in {html}");
}
