use super::*;
use chrono::NaiveDate;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    day().and_hms_opt(h, m, 0).unwrap()
}

fn entry(id: &str, title: &str, start: NaiveDateTime, end: NaiveDateTime) -> ScheduleEntry {
    ScheduleEntry {
        id: Some(id.to_string()),
        title: title.to_string(),
        description: None,
        start_time: start,
        end_time: end,
        created_at: None,
        updated_at: None,
    }
}

fn draft(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> ScheduleDraft {
    ScheduleDraft {
        title: Some(title.to_string()),
        description: None,
        start_time: Some(start),
        end_time: Some(end),
    }
}

#[test]
fn accepts_well_formed_draft() {
    assert_eq!(validate_schedule_draft(&draft("Standup", at(9, 0), at(9, 30))), Ok(()));
}

#[test]
fn rejects_missing_title() {
    let mut d = draft("Standup", at(9, 0), at(9, 30));
    d.title = None;
    assert_eq!(validate_schedule_draft(&d), Err(ValidationError::InvalidTitle));
}

#[test]
fn rejects_empty_and_whitespace_titles() {
    for title in ["", "   ", "\t\n"] {
        let d = draft(title, at(9, 0), at(9, 30));
        assert_eq!(validate_schedule_draft(&d), Err(ValidationError::InvalidTitle));
    }
}

#[test]
fn rejects_title_over_255_chars() {
    let d = draft(&"x".repeat(256), at(9, 0), at(9, 30));
    assert_eq!(validate_schedule_draft(&d), Err(ValidationError::TitleTooLong));

    // 255 exactly is still fine
    let d = draft(&"x".repeat(255), at(9, 0), at(9, 30));
    assert_eq!(validate_schedule_draft(&d), Ok(()));
}

#[test]
fn rejects_missing_times() {
    let mut d = draft("Standup", at(9, 0), at(9, 30));
    d.start_time = None;
    assert_eq!(validate_schedule_draft(&d), Err(ValidationError::MissingStartTime));

    let mut d = draft("Standup", at(9, 0), at(9, 30));
    d.end_time = None;
    assert_eq!(validate_schedule_draft(&d), Err(ValidationError::MissingEndTime));
}

#[test]
fn rejects_inverted_and_zero_length_intervals() {
    let d = draft("Standup", at(10, 0), at(9, 0));
    assert_eq!(validate_schedule_draft(&d), Err(ValidationError::InvalidInterval));

    // equal start and end is invalid, not merely "not after"
    let d = draft("Standup", at(9, 0), at(9, 0));
    assert_eq!(validate_schedule_draft(&d), Err(ValidationError::InvalidInterval));
}

#[test]
fn title_checks_precede_time_checks() {
    let d = ScheduleDraft {
        title: Some("  ".to_string()),
        description: None,
        start_time: None,
        end_time: None,
    };
    assert_eq!(validate_schedule_draft(&d), Err(ValidationError::InvalidTitle));
}

#[test]
fn goal_and_todo_drafts_require_dates() {
    let g = GoalDraft {
        title: Some("Ship it".to_string()),
        description: None,
        date: None,
    };
    assert_eq!(validate_goal_draft(&g), Err(ValidationError::MissingDate));

    let t = TodoDraft {
        title: Some("Buy milk".to_string()),
        description: None,
        completed: false,
        date: None,
    };
    assert_eq!(validate_todo_draft(&t), Err(ValidationError::MissingDate));
}

#[test]
fn overlap_is_symmetric() {
    let cases = [
        (at(9, 0), at(10, 0), at(9, 30), at(10, 30)),
        (at(9, 0), at(10, 0), at(10, 0), at(11, 0)),
        (at(9, 0), at(12, 0), at(10, 0), at(10, 30)),
        (at(9, 0), at(9, 30), at(14, 0), at(15, 0)),
    ];
    for (a_start, a_end, b_start, b_end) in cases {
        assert_eq!(
            intervals_overlap(a_start, a_end, b_start, b_end),
            intervals_overlap(b_start, b_end, a_start, a_end),
        );
    }
}

#[test]
fn touching_intervals_do_not_conflict() {
    let existing = vec![entry("a", "Morning", at(10, 0), at(11, 0))];
    assert_eq!(check_conflicts(at(11, 0), at(12, 0), &existing, None), Ok(()));
    assert_eq!(check_conflicts(at(9, 0), at(10, 0), &existing, None), Ok(()));
}

#[test]
fn strict_overlap_is_rejected_naming_the_entry() {
    let existing = vec![entry("a", "Morning", at(10, 0), at(11, 0))];
    let err = check_conflicts(at(10, 30), at(11, 30), &existing, None).unwrap_err();
    assert_eq!(err.id, "a");
    assert_eq!(err.title, "Morning");
}

#[test]
fn containment_is_rejected() {
    let existing = vec![entry("a", "Focus", at(10, 30), at(11, 0))];
    assert!(check_conflicts(at(10, 0), at(12, 0), &existing, None).is_err());

    // and the mirror case: candidate inside an existing entry
    let existing = vec![entry("a", "Focus", at(10, 0), at(12, 0))];
    assert!(check_conflicts(at(10, 30), at(11, 0), &existing, None).is_err());
}

#[test]
fn update_excludes_own_prior_version() {
    let existing = vec![entry("a", "Standup", at(10, 0), at(11, 0))];
    assert_eq!(
        check_conflicts(at(10, 15), at(11, 15), &existing, Some("a")),
        Ok(()),
    );
    // but other entries still conflict
    assert!(check_conflicts(at(10, 15), at(11, 15), &existing, Some("b")).is_err());
}

#[test]
fn first_conflict_in_iteration_order_is_reported() {
    let existing = vec![
        entry("a", "First", at(9, 0), at(10, 0)),
        entry("b", "Second", at(9, 30), at(10, 30)),
    ];
    let err = check_conflicts(at(9, 45), at(10, 15), &existing, None).unwrap_err();
    assert_eq!(err.id, "a");
}

#[test]
fn check_is_idempotent_over_identical_inputs() {
    let existing = vec![entry("a", "Morning", at(10, 0), at(11, 0))];
    let first = check_conflicts(at(10, 30), at(11, 30), &existing, None);
    let second = check_conflicts(at(10, 30), at(11, 30), &existing, None);
    assert_eq!(first, second);
}

#[test]
fn day_window_spans_midnight_to_last_microsecond() {
    let (start, end) = day_window(day());
    assert_eq!(start, day().and_hms_opt(0, 0, 0).unwrap());
    assert_eq!(end, day().and_hms_micro_opt(23, 59, 59, 999_999).unwrap());
    // the next midnight lies outside the window
    let next_midnight = day().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap();
    assert!(end < next_midnight);
}
