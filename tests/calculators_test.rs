use months_calculator::core::pension::{ELIGIBLE_MONTHS, MAX_PERCENTAGE};
use months_calculator::{calculate_pension, months_between, PensionResult, YearMonth};

fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

fn sample_months() -> Vec<YearMonth> {
    let mut months = Vec::new();
    for year in [1970, 1999, 2000, 2023, 2024, 2050] {
        for month in 1..=12 {
            months.push(ym(year, month));
        }
    }
    months
}

#[test]
fn test_same_month_counts_once() {
    for m in sample_months() {
        assert_eq!(months_between(m, m), 1, "{}", m);
    }
}

#[test]
fn test_months_between_is_symmetric_and_positive() {
    let months = sample_months();
    for &a in &months {
        for &b in &months {
            let forward = months_between(a, b);
            assert_eq!(forward, months_between(b, a), "{} / {}", a, b);
            assert!(forward >= 1);
        }
    }
}

#[test]
fn test_known_month_spans() {
    assert_eq!(months_between(ym(2024, 1), ym(2024, 12)), 12);
    assert_eq!(months_between(ym(2023, 6), ym(2024, 6)), 13);
    assert_eq!(months_between(ym(2000, 1), ym(2024, 12)), 300);
}

#[test]
fn test_below_threshold_is_never_eligible() {
    for salary in [0.0, 1.0, 12000.0, 1_000_000.0, -500.0] {
        for months in [i32::MIN, -1, 0, 1, 100, ELIGIBLE_MONTHS - 1] {
            assert_eq!(
                calculate_pension(salary, months),
                PensionResult::not_eligible(),
                "salary={} months={}",
                salary,
                months
            );
        }
    }
}

#[test]
fn test_threshold_example() {
    assert_eq!(
        calculate_pension(12000.0, 180),
        PensionResult {
            pension_pay: 375.0,
            pension_right: 37.5,
            is_eligible: true,
        }
    );
}

#[test]
fn test_pension_right_stays_within_bounds() {
    for months in (-240..=2400).step_by(7).chain([i32::MAX]) {
        let right = calculate_pension(12000.0, months).pension_right;
        assert!((0.0..=MAX_PERCENTAGE).contains(&right), "months={} right={}", months, right);
    }
}

#[test]
fn test_pension_is_monotonic_in_months() {
    let salary = 36000.0;
    let mut previous = calculate_pension(salary, ELIGIBLE_MONTHS);

    for months in ELIGIBLE_MONTHS + 1..=ELIGIBLE_MONTHS + 600 {
        let current = calculate_pension(salary, months);
        assert!(current.is_eligible);
        assert!(current.pension_right >= previous.pension_right, "months={}", months);
        assert!(current.pension_pay >= previous.pension_pay, "months={}", months);
        previous = current;
    }

    assert_eq!(previous.pension_right, MAX_PERCENTAGE);
}

#[test]
fn test_calculators_are_safe_to_share_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let span = months_between(ym(2020, 1), ym(2020 + i, 1));
                let pension = calculate_pension(12000.0, 180 + i * 12);
                (span, pension.pension_right)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (span, right) = handle.join().unwrap();
        assert_eq!(span, i as i32 * 12 + 1);
        assert!((right - (37.5 + i as f64 * 1.125)).abs() < 1e-9);
    }
}

#[test]
fn test_extreme_years_give_defined_spans() {
    let max = YearMonth::parse(&YearMonth::max_value().to_iso_string()).unwrap();
    let zero = YearMonth::parse("0-01").unwrap();

    assert_eq!(months_between(max, zero), max.year() * 12 + 12);
    assert_eq!(months_between(zero, max), months_between(max, zero));
    assert!(months_between(YearMonth::min_value(), max) >= 1);
    assert!(YearMonth::parse("2147483647-01").is_err());
}
