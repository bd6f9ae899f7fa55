// Audit helpers that emit facts across the stages of an ownership check.
//
// Every fact carries a minimal envelope: `schema_version`, `ts`, `check_id`,
// `stage`, `decision`, `path`. Redaction zeroes timestamps and drops volatile
// fields when deterministic output is requested.
use serde_json::{json, Value};

use crate::constants::FACTS_SCHEMA_VERSION;
use crate::logging::{redact_event, FactsEmitter};

pub(crate) struct AuditCtx<'a> {
    pub facts: &'a dyn FactsEmitter,
    pub check_id: String,
    pub ts: String,
    pub redact: bool,
}

impl<'a> AuditCtx<'a> {
    pub(crate) fn new(facts: &'a dyn FactsEmitter, check_id: String, ts: String, redact: bool) -> Self {
        Self {
            facts,
            check_id,
            ts,
            redact,
        }
    }
}

/// Stage for typed audit emission.
#[derive(Clone, Copy, Debug)]
pub enum Stage {
    CheckStart,
    OwnersLoad,
    ShortCircuit,
    Filter,
    Descend,
    CheckResult,
}

impl Stage {
    fn as_event(self) -> &'static str {
        match self {
            Stage::CheckStart => "check.start",
            Stage::OwnersLoad => "owners.load",
            Stage::ShortCircuit => "owners.short_circuit",
            Stage::Filter => "owners.filter",
            Stage::Descend => "owners.descend",
            Stage::CheckResult => "check.result",
        }
    }
}

/// Decision severity for audit events.
#[derive(Clone, Copy, Debug)]
pub enum Decision {
    Success,
    Failure,
    Warn,
}

impl Decision {
    fn as_str(self) -> &'static str {
        match self {
            Decision::Success => "success",
            Decision::Failure => "failure",
            Decision::Warn => "warn",
        }
    }
}

/// Builder facade over audit emission with centralized envelope+redaction.
pub struct StageLogger<'a> {
    ctx: &'a AuditCtx<'a>,
}

impl<'a> StageLogger<'a> {
    pub(crate) fn new(ctx: &'a AuditCtx<'a>) -> Self { Self { ctx } }

    pub fn check_start(&self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::CheckStart) }
    pub fn owners_load(&self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::OwnersLoad) }
    pub fn short_circuit(&self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::ShortCircuit) }
    pub fn filter(&self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::Filter) }
    pub fn descend(&self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::Descend) }
    pub fn check_result(&self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::CheckResult) }
}

pub struct EventBuilder<'a> {
    ctx: &'a AuditCtx<'a>,
    stage: Stage,
    fields: serde_json::Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    fn new(ctx: &'a AuditCtx<'a>, stage: Stage) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("stage".to_string(), json!(stage.as_event()));
        Self { ctx, stage, fields }
    }

    /// Directory (relative to the check root) the event concerns.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.fields.insert("path".into(), json!(path.into()));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn emit(self, decision: Decision) {
        let mut fields = Value::Object(self.fields);
        if let Some(obj) = fields.as_object_mut() {
            obj.entry("decision").or_insert(json!(decision.as_str()));
            obj.entry("schema_version").or_insert(json!(FACTS_SCHEMA_VERSION));
            obj.entry("ts").or_insert(json!(self.ctx.ts));
            obj.entry("check_id").or_insert(json!(self.ctx.check_id));
            obj.entry("path").or_insert(json!(""));
        }
        let out = if self.ctx.redact { redact_event(fields) } else { fields };
        self.ctx
            .facts
            .emit("ownersgate", self.stage.as_event(), decision.as_str(), out);
    }

    pub fn emit_success(self) { self.emit(Decision::Success) }
    pub fn emit_failure(self) { self.emit(Decision::Failure) }
    pub fn emit_warn(self) { self.emit(Decision::Warn) }
}
