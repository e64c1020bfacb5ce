//! Ordered rule tables shared by the risk, compliance, SLA and alert stages.
//!
//! Each table is a priority list of named predicates paired with a fixed outcome,
//! closed by an unconditional fallback. Evaluation walks the list top-down and the
//! first matching rule wins.

use std::fmt;

/// A named predicate and the outcome it selects.
pub struct Rule<I, O> {
    pub name: &'static str,
    pub applies: fn(&I) -> bool,
    pub outcome: O,
}

impl<I, O> fmt::Debug for Rule<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Priority-ordered rules plus the outcome used when nothing matches.
pub struct RuleTable<I: 'static, O: 'static> {
    rules: &'static [Rule<I, O>],
    fallback_name: &'static str,
    fallback: O,
}

impl<I: 'static, O: 'static> RuleTable<I, O> {
    pub const fn new(
        rules: &'static [Rule<I, O>],
        fallback_name: &'static str,
        fallback: O,
    ) -> Self {
        Self {
            rules,
            fallback_name,
            fallback,
        }
    }

    /// Name of the rule that fires for `input`.
    pub fn matched(&self, input: &I) -> &'static str {
        self.select(input).0
    }

    pub fn evaluate(&self, input: &I) -> &O {
        self.select(input).1
    }

    /// Rule names in evaluation order, fallback last.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .iter()
            .map(|rule| rule.name)
            .chain(std::iter::once(self.fallback_name))
    }

    fn select(&self, input: &I) -> (&'static str, &O) {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(input))
            .map(|rule| (rule.name, &rule.outcome))
            .unwrap_or((self.fallback_name, &self.fallback))
    }
}

impl<I: 'static, O: 'static> fmt::Debug for RuleTable<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
