use super::*;

#[test]
fn test_record_counts() {
    let mut rate = WinRate::new(3, 0);
    for winner in [0, 1, 0, -1, 0] {
        rate.record(winner);
    }

    assert_eq!(rate.wins, 3);
    assert_eq!(rate.losses, 1);
    assert_eq!(rate.draws, 1);
    assert_eq!(rate.total, 5);
    assert_eq!(rate.wins + rate.losses + rate.draws, rate.total);
}

#[test]
fn test_record_other_player() {
    let mut rate = WinRate::new(3, 1);
    for winner in [0, 1, 1] {
        rate.record(winner);
    }

    assert_eq!(rate.wins, 2);
    assert_eq!(rate.losses, 1);
}

#[test]
fn test_ratio() {
    let mut rate = WinRate::new(3, 0);
    assert_eq!(rate.ratio(), None);

    rate.record(0);
    rate.record(1);
    rate.record(0);
    rate.record(0);
    let ratio = rate.ratio().unwrap();
    assert!((ratio - 0.75).abs() < 1e-9);
}

#[test]
fn test_report_line() {
    let mut rate = WinRate::new(3, 0);
    rate.record(0);
    rate.record(1);
    rate.record(0);

    assert_eq!(rate.report_line(), "Tournament #3 Win-Rate: 2/3 = 0.666667");
    assert_eq!(rate.to_string(), rate.report_line());
}

#[test]
fn test_report_line_zero_total() {
    let rate = WinRate::new(12, 0);
    assert_eq!(rate.report_line(), "Tournament #12 Error total == 0");
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rate.json");

    let mut rate = WinRate::new(5, 0);
    rate.record(0);
    rate.record(-1);
    rate.skipped = 2;
    rate.save(&path).unwrap();

    assert_eq!(WinRate::load(&path).unwrap(), rate);
}
