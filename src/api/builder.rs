use crate::logging::{AuditSink, FactsEmitter};
use crate::policy::Policy;

/// Builder for constructing an `OwnersGate` with ergonomic chaining.
pub struct ApiBuilder<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    deterministic: bool,
}

impl<E: FactsEmitter, A: AuditSink> ApiBuilder<E, A> {
    pub fn new(facts: E, audit: A) -> Self {
        Self {
            facts,
            audit,
            policy: Policy::default(),
            deterministic: false,
        }
    }

    #[must_use]
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn deterministic_facts(mut self, on: bool) -> Self {
        self.deterministic = on;
        self
    }

    pub fn build(self) -> super::OwnersGate<E, A> {
        super::OwnersGate::new(self.facts, self.audit, self.policy)
            .with_deterministic_facts(self.deterministic)
    }
}
