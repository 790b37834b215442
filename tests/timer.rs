mod tests {
    use myrtio_board_composer::{Duration, Instant, timer::TickTimer};

    #[test]
    fn test_first_tick_after_one_interval() {
        let timer = TickTimer::new(Duration::from_millis(50), Instant::from_millis(100));
        assert_eq!(timer.deadline(), Instant::from_millis(150));
        assert!(!timer.is_due(Instant::from_millis(149)));
        assert!(timer.is_due(Instant::from_millis(150)));
    }

    #[test]
    fn test_advance_keeps_cadence() {
        let mut timer = TickTimer::new(Duration::from_millis(50), Instant::from_millis(0));
        // Late by less than two intervals: no drift
        timer.advance(Instant::from_millis(120));
        assert_eq!(timer.deadline(), Instant::from_millis(100));

        // Stalled: restart from now
        timer.advance(Instant::from_millis(1_000));
        assert_eq!(timer.deadline(), Instant::from_millis(1_050));
    }

    #[test]
    fn test_deadline_saturates() {
        let mut timer = TickTimer::new(Duration::MAX, Instant::from_millis(5));
        assert_eq!(timer.deadline(), Instant::MAX);

        let late = Instant::MAX;
        let mut near_end = TickTimer::new(Duration::from_secs(1), late);
        assert_eq!(near_end.deadline(), Instant::MAX);
        assert!(near_end.is_due(late));
        near_end.advance(late);
        assert_eq!(near_end.deadline(), Instant::MAX);

        timer.advance(Instant::from_millis(10));
        assert_eq!(timer.deadline(), Instant::MAX);
    }
}
