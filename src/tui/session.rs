//! Constraint gathering and the accept/regenerate loop.

use log::{debug, info};
use rand::Rng;
use zeroize::Zeroize;

use super::parse::{parse_exact_count, parse_length, parse_start_category, parse_yes_no};
use super::questions::{Question, QuestionPlan};
use super::text::{print_constraints, print_preview};
use super::{InputError, LineSource, SessionError};
use crate::pass::{CharClass, Constraints, synthesize};
use crate::terminal::{print_error, print_notice};

const ACCEPT_PROMPT: &str = "Use this password? [y/n]";

pub struct Session<S, R> {
    input: S,
    rng: R,
    plan: QuestionPlan,
    attempts: usize,
}

impl<S: LineSource, R: Rng> Session<S, R> {
    pub fn new(input: S, rng: R) -> Self {
        Self {
            input,
            rng,
            plan: QuestionPlan::default(),
            attempts: 0,
        }
    }

    /// Number of candidates synthesized so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Gather constraints, then regenerate until a candidate is accepted.
    pub fn run(&mut self) -> Result<String, SessionError> {
        let constraints = self.gather()?;
        debug!("constraints: {constraints:?}");
        print_constraints(&constraints);
        self.review(&constraints)
    }

    /// Ask the base questions and, if enabled, the advanced ones.
    pub fn gather(&mut self) -> Result<Constraints, SessionError> {
        self.plan = QuestionPlan::default();

        let length = self.ask(Question::Length, parse_length)?;
        self.plan.digits = self.ask(Question::UseDigits, parse_yes_no)?;
        self.plan.symbols = self.ask(Question::UseSymbols, parse_yes_no)?;
        self.plan.advanced = self.ask(Question::Advanced, parse_yes_no)?;

        let mut constraints = Constraints {
            length,
            allow_digits: self.plan.digits,
            allow_symbols: self.plan.symbols,
            ..Default::default()
        };

        if !self.plan.advanced {
            return Ok(constraints);
        }

        constraints.start = Some(self.ask(Question::StartCategory, parse_start_category)?);
        if self.plan.digits {
            constraints.exact_digits =
                self.ask_exact(Question::ExactDigits, CharClass::Digit, &constraints)?;
        }
        if self.plan.symbols {
            constraints.exact_symbols =
                self.ask_exact(Question::ExactSymbols, CharClass::Symbol, &constraints)?;
        }

        Ok(constraints)
    }

    /// Synthesize and preview candidates until one is accepted. Every
    /// attempt uses the same `constraints`.
    pub fn review(&mut self, constraints: &Constraints) -> Result<String, SessionError> {
        loop {
            let mut candidate = synthesize(constraints, &mut self.rng);
            self.attempts += 1;
            print_preview(&candidate, self.attempts);

            if self.confirm(ACCEPT_PROMPT)? {
                info!("password accepted after {} attempt(s)", self.attempts);
                return Ok(candidate);
            }
            candidate.zeroize();
            debug!("candidate #{} rejected", self.attempts);
        }
    }

    fn ask<T>(
        &mut self,
        question: Question,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, SessionError> {
        let prompt = self.plan.progress_prompt(question);
        self.ask_until_valid(&prompt, parse)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, SessionError> {
        self.ask_until_valid(prompt, parse_yes_no)
    }

    fn ask_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, SessionError> {
        loop {
            let line = self.input.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("rejected answer: {e}");
                    print_error(&e.to_string());
                }
            }
        }
    }

    /// Exact count for `class`, clamped into what the length still allows.
    fn ask_exact(
        &mut self,
        question: Question,
        class: CharClass,
        constraints: &Constraints,
    ) -> Result<Option<usize>, SessionError> {
        let Some(requested) = self.ask(question, parse_exact_count)? else {
            return Ok(None);
        };
        let count = constraints.clamp_exact(class, requested);
        if count != requested {
            print_notice(&format!("Adjusted {class} count from {requested} to {count}."));
        }
        Ok(Some(count))
    }
}
