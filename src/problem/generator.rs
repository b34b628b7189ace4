//! Problem sampling and expression sizing

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::bounds::OperandBounds;
use super::operator::{EQUALS, Operator};
use crate::config::limits::MAX_DIVISOR_DRAWS;

/// Whether both operands share one range or each has its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeMode {
    #[default]
    Independent,
    Shared,
}

/// Validated generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    bounds1: OperandBounds,
    bounds2: OperandBounds,
    operator: Operator,
}

impl Configuration {
    /// Independent bounds per operand, each pair validated on its own
    pub fn configure(min1: i64, max1: i64, min2: i64, max2: i64, operator: Operator) -> Self {
        Self::from_bounds(
            OperandBounds::validate(min1, max1),
            OperandBounds::validate(min2, max2),
            operator,
        )
    }

    /// One range shared by both operands
    pub fn configure_shared(min: i64, max: i64, operator: Operator) -> Self {
        let bounds = OperandBounds::validate(min, max);
        Self::from_bounds(bounds, bounds, operator)
    }

    pub fn from_bounds(bounds1: OperandBounds, bounds2: OperandBounds, operator: Operator) -> Self {
        Self {
            bounds1,
            bounds2,
            operator,
        }
    }

    pub fn bounds1(&self) -> OperandBounds {
        self.bounds1
    }

    pub fn bounds2(&self) -> OperandBounds {
        self.bounds2
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Upper bound on the character count of any question or answer this
    /// configuration can produce. Derived from the configured maxima only.
    pub fn expression_chars(&self) -> usize {
        let max1 = self.bounds1.max();
        let max2 = self.bounds2.max();

        // operator + equals sign
        let base = 2 + digit_len(max1) + digit_len(max2);
        let result_field = match self.operator {
            // could carry
            Operator::Add => digit_len(max1 + max2),
            Operator::Subtract => digit_len(max1.max(max2)),
            Operator::Multiply | Operator::Divide => digit_len(max1 * max2),
        };
        base + result_field
    }
}

/// Number of characters in the decimal rendering of `n`, including any minus sign
pub fn digit_len(n: i64) -> usize {
    let sign = usize::from(n < 0);
    let mut magnitude = n.unsigned_abs();
    let mut digits = 1;
    while magnitude >= 10 {
        magnitude /= 10;
        digits += 1;
    }
    sign + digits
}

/// A generated flash card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub operand1: i64,
    pub operand2: i64,
    pub result: i64,
    pub operator: Operator,
}

impl Problem {
    /// `"a op b=?"`
    pub fn question_text(&self) -> String {
        format!("{}?", self.prefix())
    }

    /// `"a op b=result"`
    pub fn answer_text(&self) -> String {
        format!("{}{}", self.prefix(), self.result)
    }

    fn prefix(&self) -> String {
        format!(
            "{}{}{}{}",
            self.operand1,
            self.operator.symbol(),
            self.operand2,
            EQUALS
        )
    }
}

/// Samples problems for a configuration
pub struct ProblemGenerator<R = StdRng> {
    rng: R,
}

impl ProblemGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator for tests and `--seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, config: &Configuration) -> Problem {
        let operator = config.operator();
        let mut operand1 = config.bounds1().sample(&mut self.rng);
        let mut operand2 = config.bounds2().sample(&mut self.rng);

        // Either range may print first, except for division
        if operator != Operator::Divide && self.rng.gen_bool(0.5) {
            std::mem::swap(&mut operand1, &mut operand2);
        }

        match operator {
            Operator::Add => Problem {
                operand1,
                operand2,
                result: operand1 + operand2,
                operator,
            },
            Operator::Subtract => {
                if operand1 < operand2 {
                    std::mem::swap(&mut operand1, &mut operand2);
                }
                Problem {
                    operand1,
                    operand2,
                    result: operand1 - operand2,
                    operator,
                }
            }
            Operator::Multiply => Problem {
                operand1,
                operand2,
                result: operand1 * operand2,
                operator,
            },
            Operator::Divide => {
                let divisor = self.nonzero_divisor(operand2, config.bounds2());
                let quotient = operand1;
                Problem {
                    operand1: quotient * divisor,
                    operand2: divisor,
                    result: quotient,
                    operator,
                }
            }
        }
    }

    /// Resample `first` from `bounds` until it is nonzero
    fn nonzero_divisor(&mut self, first: i64, bounds: OperandBounds) -> i64 {
        let mut divisor = first;
        let mut draws = 0;
        while divisor == 0 {
            if draws == MAX_DIVISOR_DRAWS {
                return bounds.max().max(1);
            }
            divisor = bounds.sample(&mut self.rng);
            draws += 1;
        }
        divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: usize = 10_000;

    fn configs() -> Vec<Configuration> {
        let mut configs = Vec::new();
        for op in Operator::ALL {
            configs.push(Configuration::configure(2, 5, 3, 7, op));
            configs.push(Configuration::configure(0, 12, 0, 12, op));
            configs.push(Configuration::configure(0, 9, 90, 999, op));
            configs.push(Configuration::configure(0, 1, 0, 0, op));
            configs.push(Configuration::configure_shared(0, 100, op));
        }
        configs
    }

    #[test]
    fn test_digit_len() {
        assert_eq!(digit_len(0), 1);
        assert_eq!(digit_len(9), 1);
        assert_eq!(digit_len(10), 2);
        assert_eq!(digit_len(-10), 3);
        assert_eq!(digit_len(i64::MIN), 20);
    }

    #[test]
    fn test_expression_chars_formula() {
        // 2 + len(10) + len(10) + len(20)
        assert_eq!(Configuration::configure(0, 10, 0, 10, Operator::Add).expression_chars(), 8);
        // 2 + len(9) + len(99) + len(99)
        assert_eq!(Configuration::configure(0, 9, 0, 99, Operator::Subtract).expression_chars(), 7);
        // 2 + len(12) + len(12) + len(144)
        assert_eq!(Configuration::configure(0, 12, 0, 12, Operator::Multiply).expression_chars(), 9);
        assert_eq!(Configuration::configure(0, 12, 0, 12, Operator::Divide).expression_chars(), 9);
        // 2 + len(5) + len(5) + len(10)
        assert_eq!(Configuration::configure_shared(1, 5, Operator::Add).expression_chars(), 6);
    }

    #[test]
    fn test_operands_stay_in_bounds() {
        let mut generator = ProblemGenerator::seeded(1);
        for op in [Operator::Add, Operator::Multiply] {
            let config = Configuration::configure(2, 5, 30, 70, op);
            for _ in 0..SAMPLES {
                let p = generator.generate(&config);
                let (b1, b2) = (config.bounds1(), config.bounds2());
                let straight = b1.contains(p.operand1) && b2.contains(p.operand2);
                let swapped = b2.contains(p.operand1) && b1.contains(p.operand2);
                assert!(straight || swapped, "{p:?}");
            }
        }
    }

    #[test]
    fn test_swap_puts_either_range_first() {
        let mut generator = ProblemGenerator::seeded(2);
        let config = Configuration::configure(1, 1, 2, 2, Operator::Add);
        let firsts: Vec<i64> = (0..200).map(|_| generator.generate(&config).operand1).collect();
        assert!(firsts.contains(&1));
        assert!(firsts.contains(&2));
    }

    #[test]
    fn test_subtraction_never_negative() {
        let mut generator = ProblemGenerator::seeded(3);
        let config = Configuration::configure(0, 20, 0, 50, Operator::Subtract);
        for _ in 0..SAMPLES {
            let p = generator.generate(&config);
            assert!(p.result >= 0, "{p:?}");
            assert_eq!(p.operand1 - p.operand2, p.result);
        }
    }

    #[test]
    fn test_division_is_exact_with_nonzero_divisor() {
        let mut generator = ProblemGenerator::seeded(4);
        let config = Configuration::configure(0, 12, 0, 12, Operator::Divide);
        for _ in 0..SAMPLES {
            let p = generator.generate(&config);
            assert_ne!(p.operand2, 0);
            assert_eq!(p.operand1 % p.operand2, 0);
            assert_eq!(p.operand1 / p.operand2, p.result);
            assert!(config.bounds1().contains(p.result));
            assert!(config.bounds2().contains(p.operand2));
        }
    }

    #[test]
    fn test_division_never_swaps() {
        let mut generator = ProblemGenerator::seeded(5);
        let config = Configuration::configure(3, 3, 2, 2, Operator::Divide);
        for _ in 0..100 {
            let p = generator.generate(&config);
            assert_eq!((p.operand1, p.operand2, p.result), (6, 2, 3));
        }
    }

    #[test]
    fn test_degenerate_division_terminates() {
        let mut generator = ProblemGenerator::seeded(6);
        let config = Configuration::configure(1, 1, 0, 0, Operator::Divide);
        assert_eq!((config.bounds2().min(), config.bounds2().max()), (0, 1));
        let p = generator.generate(&config);
        assert_eq!(p.question_text(), "1\u{00f7}1=?");
        assert_eq!(p.answer_text(), "1\u{00f7}1=1");
    }

    #[test]
    fn test_divisor_fallback_after_repeated_zero_draws() {
        let mut generator = ProblemGenerator::new(rand::rngs::mock::StepRng::new(0, 0));
        let bounds = OperandBounds::validate(0, 1);
        assert_eq!(generator.nonzero_divisor(0, bounds), 1);
    }

    #[test]
    fn test_expression_chars_bounds_every_text() {
        let mut generator = ProblemGenerator::seeded(7);
        for config in configs() {
            let limit = config.expression_chars();
            for _ in 0..SAMPLES {
                let p = generator.generate(&config);
                let question = p.question_text().chars().count();
                let answer = p.answer_text().chars().count();
                assert!(question <= limit, "{p:?} question exceeds {limit}");
                assert!(answer <= limit, "{p:?} answer exceeds {limit}");
            }
        }
    }

    #[test]
    fn test_addition_question_and_answer_text() {
        let p = Problem {
            operand1: 4,
            operand2: 6,
            result: 10,
            operator: Operator::Add,
        };
        assert_eq!(p.question_text(), "4+6=?");
        assert_eq!(p.answer_text(), "4+6=10");
    }

    #[test]
    fn test_addition_operands_within_ranges() {
        let mut generator = ProblemGenerator::seeded(8);
        let config = Configuration::configure(2, 5, 3, 7, Operator::Add);
        for _ in 0..1000 {
            let p = generator.generate(&config);
            assert_eq!(p.result, p.operand1 + p.operand2);
            assert!((5..=12).contains(&p.result));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let config = Configuration::configure(0, 100, 0, 100, Operator::Multiply);
        let mut a = ProblemGenerator::seeded(42);
        let mut b = ProblemGenerator::seeded(42);
        for _ in 0..50 {
            assert_eq!(a.generate(&config), b.generate(&config));
        }
    }
}
