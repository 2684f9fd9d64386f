//! Property-based tests for the eligibility engine.

use crate::dates;
use crate::denial::Denial;
use crate::engine::{evaluate, evaluate_with_rules};
use crate::rules::Rule;
use crate::test_support::{book, candidate, domain, edition, limits, reader, staff, StubHistory, TODAY};
use proptest::prelude::*;
use time::{Date, Duration, Month};

fn arb_date() -> impl Strategy<Value = Date> {
    (2000i32..2100, 1u8..=12, 1u8..=28).prop_map(|(year, month, day)| {
        let month = Month::try_from(month).expect("month in range");
        Date::from_calendar_date(year, month, day).expect("day 1..=28 exists in every month")
    })
}

proptest! {
    #[test]
    fn months_back_is_total_and_monotonic(date in arb_date(), months in 0u32..600) {
        let shifted = dates::months_back(date, months);
        prop_assert!(shifted <= date);
        if months == 0 {
            prop_assert_eq!(shifted, date);
        }
    }

    #[test]
    fn bad_date_order_always_fails_structurally(
        borrow in arb_date(),
        gap in 1i64..365,
        active in 0u32..20,
        in_period in 0u32..20,
    ) {
        let fiction = domain(1, "Fiction");
        let mut record = candidate(reader(1), staff(2), edition(1, book(1, &[&fiction]), 10, 0));
        record.borrow_date = borrow;
        record.due_date = borrow - Duration::days(gap);

        let history = StubHistory { active, in_period, ..StubHistory::default() };
        let verdict = evaluate(&record, TODAY, &limits(), &history);
        prop_assert!(matches!(verdict, Err(Denial::Structural(_))));
    }

    #[test]
    fn availability_matches_the_margin_formula(
        can_borrow in 0u32..50,
        can_not_borrow in 0u32..50,
        active in 0u32..60,
    ) {
        let fiction = domain(1, "Fiction");
        let record = candidate(
            reader(1),
            staff(2),
            edition(1, book(1, &[&fiction]), can_borrow, can_not_borrow),
        );
        let history = StubHistory { active, ..StubHistory::default() };

        let eligible = (i64::from(can_borrow) - i64::from(active)) * 10
            > i64::from(can_borrow) + i64::from(can_not_borrow);
        let verdict =
            evaluate_with_rules(&record, TODAY, &limits(), &history, &[Rule::Availability]);
        prop_assert_eq!(verdict.is_ok(), eligible);
    }

    #[test]
    fn verdicts_are_idempotent(
        active in 0u32..20,
        in_period in 0u32..10,
        today_count in 0u32..5,
        of_edition in 0u32..3,
    ) {
        let fiction = domain(1, "Fiction");
        let record = candidate(reader(1), staff(2), edition(1, book(1, &[&fiction]), 10, 0));
        let history = StubHistory {
            active,
            in_period,
            today_count,
            of_edition,
            ..StubHistory::default()
        };
        let cfg = limits();

        let first = evaluate(&record, TODAY, &cfg, &history);
        let second = evaluate(&record, TODAY, &cfg, &history);
        prop_assert_eq!(first, second);
    }
}
