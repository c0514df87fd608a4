//! Question sequencing.
//!
//! Four base questions are always asked. Enabling advanced configuration adds
//! the start category, plus one exact-count question per enabled class.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    Length,
    UseDigits,
    UseSymbols,
    Advanced,
    StartCategory,
    ExactDigits,
    ExactSymbols,
}

impl Question {
    pub fn prompt(self) -> &'static str {
        match self {
            Question::Length => "Password length (8-32)",
            Question::UseDigits => "Include digits? [y/n]",
            Question::UseSymbols => "Include symbols? [y/n]",
            Question::Advanced => "Enable advanced configuration? [y/n]",
            Question::StartCategory => "Start with 1) upper 2) lower 3) digit 4) symbol",
            Question::ExactDigits => "Exact number of digits (Enter or 's' to skip)",
            Question::ExactSymbols => "Exact number of symbols (Enter or 's' to skip)",
        }
    }
}

pub const BASE_QUESTIONS: [Question; 4] = [
    Question::Length,
    Question::UseDigits,
    Question::UseSymbols,
    Question::Advanced,
];

/// What is known so far about which questions apply.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuestionPlan {
    pub digits: bool,
    pub symbols: bool,
    pub advanced: bool,
}

impl QuestionPlan {
    /// Questions in the order they are asked.
    pub fn questions(&self) -> Vec<Question> {
        let mut questions = BASE_QUESTIONS.to_vec();
        if self.advanced {
            questions.push(Question::StartCategory);
            if self.digits {
                questions.push(Question::ExactDigits);
            }
            if self.symbols {
                questions.push(Question::ExactSymbols);
            }
        }
        questions
    }

    pub fn total(&self) -> usize {
        self.questions().len()
    }

    /// 1-based position of `question`, if it is part of the plan.
    pub fn position(&self, question: Question) -> Option<usize> {
        self.questions()
            .iter()
            .position(|&q| q == question)
            .map(|i| i + 1)
    }

    /// `(current/total) prompt` line for `question`.
    pub fn progress_prompt(&self, question: Question) -> String {
        let current = self.position(question).unwrap_or(self.total());
        format!("({}/{}) {}", current, self.total(), question.prompt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_plan_has_four_questions() {
        let plan = QuestionPlan::default();
        assert_eq!(plan.total(), 4);
        assert_eq!(plan.questions(), BASE_QUESTIONS.to_vec());
    }

    #[test]
    fn class_answers_alone_do_not_extend_plan() {
        let plan = QuestionPlan {
            digits: true,
            symbols: true,
            advanced: false,
        };
        assert_eq!(plan.total(), 4);
        assert_eq!(plan.position(Question::ExactDigits), None);
    }

    #[test]
    fn advanced_extends_by_enabled_classes() {
        let cases = [
            (false, false, 5),
            (true, false, 6),
            (false, true, 6),
            (true, true, 7),
        ];
        for (digits, symbols, total) in cases {
            let plan = QuestionPlan {
                digits,
                symbols,
                advanced: true,
            };
            assert_eq!(plan.total(), total, "digits={digits} symbols={symbols}");
            assert_eq!(plan.position(Question::StartCategory), Some(5));
        }
    }

    #[test]
    fn symbols_follow_digits() {
        let plan = QuestionPlan {
            digits: true,
            symbols: true,
            advanced: true,
        };
        assert_eq!(plan.position(Question::ExactDigits), Some(6));
        assert_eq!(plan.position(Question::ExactSymbols), Some(7));

        let no_digits = QuestionPlan { digits: false, ..plan };
        assert_eq!(no_digits.position(Question::ExactSymbols), Some(6));
    }

    #[test]
    fn progress_prompt_shows_current_and_total() {
        let plan = QuestionPlan::default();
        assert_eq!(
            plan.progress_prompt(Question::UseDigits),
            "(2/4) Include digits? [y/n]"
        );

        let plan = QuestionPlan {
            digits: true,
            symbols: false,
            advanced: true,
        };
        assert!(plan.progress_prompt(Question::ExactDigits).starts_with("(6/6) "));
    }
}
