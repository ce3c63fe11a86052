//! Problem generator integration tests
//!
//! Properties every generated worksheet must satisfy, per operation mode.

use mathgen::problem::{generate, GenerationError, OperationMode, Problem, ProblemGenerator, Range};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;

fn range(min: i64, max: i64) -> Range {
    Range::new(min, max).unwrap()
}

fn generate_seeded(mode: OperationMode, r: Range, count: usize, seed: u64) -> Vec<Problem> {
    let mut rng = StdRng::seed_from_u64(seed);
    ProblemGenerator::new()
        .generate(mode, r, count, &mut rng)
        .unwrap()
        .iter()
        .cloned()
        .collect()
}

/// Split `"a op b = rhs"` into its parts
fn parts(problem: &Problem) -> (String, char, String, String) {
    let re = Regex::new(r"^(\S+) ([-+*/]) (\S+) = (\S*)$").unwrap();
    let caps = re
        .captures(problem.text())
        .unwrap_or_else(|| panic!("unexpected problem shape: {:?}", problem.text()));
    (
        caps[1].to_string(),
        caps[2].chars().next().unwrap(),
        caps[3].to_string(),
        caps[4].to_string(),
    )
}

// =============================================================================
// Addition / subtraction
// =============================================================================

mod add_sub_tests {
    use super::*;

    #[test]
    fn test_scenario_four_problems_zero_to_twenty() {
        let shape = Regex::new(r"^\d+ [+-] \d+ = $").unwrap();
        let problems = generate(OperationMode::AddSub, range(0, 20), 4).unwrap();

        assert_eq!(problems.len(), 4);
        for problem in &problems {
            assert!(shape.is_match(problem.text()), "{:?}", problem.text());
            let (a, op, b, _) = parts(problem);
            let (a, b): (i64, i64) = (a.parse().unwrap(), b.parse().unwrap());
            let result = if op == '+' { a + b } else { a - b };
            for value in [a, b, result] {
                assert!((0..=20).contains(&value), "{} out of range in {:?}", value, problem.text());
            }
        }
    }

    #[test]
    fn test_operands_and_results_stay_in_range() {
        for seed in 0..5 {
            for problem in generate_seeded(OperationMode::AddSub, range(5, 60), 400, seed) {
                let (a, op, b, rhs) = parts(&problem);
                assert!(rhs.is_empty());
                let (a, b): (i64, i64) = (a.parse().unwrap(), b.parse().unwrap());
                let result = if op == '+' { a + b } else { a - b };
                assert!(matches!(op, '+' | '-'));
                assert!((5..=60).contains(&a));
                assert!((5..=60).contains(&b));
                if op == '+' {
                    assert!(result <= 60);
                } else {
                    assert!(result >= 5);
                }
            }
        }
    }

    #[test]
    fn test_both_operations_appear() {
        let problems = generate_seeded(OperationMode::AddSub, range(0, 100), 200, 11);
        assert!(problems.iter().any(|p| p.text().contains(" + ")));
        assert!(problems.iter().any(|p| p.text().contains(" - ")));
    }
}

// =============================================================================
// Multiplication / division
// =============================================================================

mod mul_div_tests {
    use super::*;

    #[test]
    fn test_division_is_exact_and_above_minimum() {
        for problem in generate_seeded(OperationMode::MulDiv, range(1, 100), 800, 5) {
            let (a, op, b, _) = parts(&problem);
            let (a, b): (i64, i64) = (a.parse().unwrap(), b.parse().unwrap());
            match op {
                '*' => assert!(a * b <= 100),
                '/' => {
                    assert_ne!(b, 0);
                    assert_eq!(a % b, 0, "{:?}", problem.text());
                    assert!(a / b >= 1);
                }
                other => panic!("unexpected operator {}", other),
            }
        }
    }

    #[test]
    fn test_zero_is_never_a_divisor() {
        for problem in generate_seeded(OperationMode::MulDiv, range(0, 12), 400, 8) {
            assert!(!problem.text().contains("/ 0 "), "{:?}", problem.text());
        }
    }

    #[test]
    fn test_single_value_range_terminates() {
        let problems = generate(OperationMode::MulDiv, range(1, 1), 1).unwrap();
        assert_eq!(problems.len(), 1);
        let text = problems.as_slice()[0].text();
        assert!(text == "1 * 1 = " || text == "1 / 1 = ", "{:?}", text);
    }

    #[test]
    fn test_one_to_ten_single_problem() {
        let problems = generate(OperationMode::MulDiv, range(1, 10), 1).unwrap();
        assert_eq!(problems.len(), 1);
    }
}

// =============================================================================
// Algebra
// =============================================================================

mod algebra_tests {
    use super::*;

    /// Solve for the single unknown; `None` when the shape is wrong
    fn solve(problem: &Problem) -> Option<(Vec<i64>, i64)> {
        let (left, op, right, result) = parts(problem);
        let unknowns = [&left, &right, &result].iter().filter(|t| t.as_str() == "X").count();
        if unknowns != 1 || problem.text().matches('X').count() != 1 {
            return None;
        }
        let num = |s: &str| s.parse::<i64>().ok();

        let (shown, x) = match (left.as_str(), right.as_str(), result.as_str(), op) {
            (a, b, "X", '+') => (vec![num(a)?, num(b)?], num(a)? + num(b)?),
            (a, b, "X", '-') => (vec![num(a)?, num(b)?], num(a)? - num(b)?),
            ("X", b, r, '+') => (vec![num(b)?, num(r)?], num(r)? - num(b)?),
            ("X", b, r, '-') => (vec![num(b)?, num(r)?], num(r)? + num(b)?),
            (a, "X", r, '+') => (vec![num(a)?, num(r)?], num(r)? - num(a)?),
            (a, "X", r, '-') => (vec![num(a)?, num(r)?], num(a)? - num(r)?),
            _ => return None,
        };
        Some((shown, x))
    }

    fn holds(problem: &Problem, x: i64) -> bool {
        let (left, op, right, result) = parts(problem);
        let value = |s: &str| if s == "X" { x } else { s.parse().unwrap() };
        let (a, b, r) = (value(&left), value(&right), value(&result));
        match op {
            '+' => a + b == r,
            '-' => a - b == r,
            _ => false,
        }
    }

    #[test]
    fn test_exactly_one_unknown_and_solution_satisfies() {
        for seed in 0..3 {
            for problem in generate_seeded(OperationMode::Algebra, range(0, 30), 400, seed) {
                let (shown, x) = solve(&problem)
                    .unwrap_or_else(|| panic!("not a one-unknown equation: {:?}", problem.text()));
                assert!(holds(&problem, x), "{:?} with X = {}", problem.text(), x);
                assert!((0..=30).contains(&x), "{:?} solution {}", problem.text(), x);
                assert!(shown.iter().all(|v| (0..=30).contains(v)), "{:?}", problem.text());
            }
        }
    }

    #[test]
    fn test_unknown_appears_in_every_position() {
        let problems = generate_seeded(OperationMode::Algebra, range(0, 50), 300, 4);
        assert!(problems.iter().any(|p| p.text().starts_with("X ")));
        assert!(problems.iter().any(|p| p.text().ends_with("= X")));
        assert!(problems.iter().any(|p| p.text().contains(" X =")));
    }
}

// =============================================================================
// Termination and counts
// =============================================================================

mod termination_tests {
    use super::*;

    #[test]
    fn test_exact_count_for_every_mode() {
        for mode in OperationMode::all() {
            for count in [0, 1, 39, 400] {
                let problems = generate_seeded(*mode, range(0, 20), count, 2);
                assert_eq!(problems.len(), count, "{:?} x {}", mode, count);
            }
        }
    }

    #[test]
    fn test_unsatisfiable_ranges_report_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let generator = ProblemGenerator::new().with_max_attempts(1_000);

        // 1 + 1 > 1 and 1 - 1 < 1
        let err = generator
            .generate(OperationMode::AddSub, range(1, 1), 1, &mut rng)
            .unwrap_err();
        assert!(matches!(err, GenerationError::Unsatisfiable { attempts: 1_000, .. }));

        // 2 * 2 > 2 and 2 / 2 < 2
        let err = generator
            .generate(OperationMode::MulDiv, range(2, 2), 1, &mut rng)
            .unwrap_err();
        assert!(err.to_string().contains("2-2"));
    }

    #[test]
    fn test_order_is_acceptance_order() {
        let first = generate_seeded(OperationMode::AddSub, range(0, 20), 50, 77);
        let prefix = generate_seeded(OperationMode::AddSub, range(0, 20), 10, 77);
        assert_eq!(&first[..10], &prefix[..]);
    }
}
