use std::{
    collections::HashMap,
    sync::Mutex,
};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use revops_decision_api::decisioning::{
    domain::model::{
        enums::{
            action_status::ActionStatus, action_type::ActionType,
            decision_status::DecisionStatus,
            decisioning_domain_error::DecisioningDomainError,
        },
    },
    domain::services::runtime_context::Clock,
    infrastructure::{
        executors::action_executor::{ActionExecutionRequest, ActionExecutor},
        persistence::repositories::{
            action_log_repository::{ActionLogRepository, NewActionLogRecord},
            decision_repository::{DecisionRecord, DecisionRepository},
            event_repository::{
                EventInsertOutcome, EventRepository, NewEventRecord, StoredEventRecord,
            },
        },
    },
};
use uuid::Uuid;

pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new() -> Self {
        Self {
            now: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[derive(Default)]
struct FakeEventState {
    insert_calls: usize,
    stored: HashMap<(String, String), StoredEventRecord>,
}

pub struct FakeEventRepository {
    state: Mutex<FakeEventState>,
}

impl FakeEventRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeEventState::default()),
        }
    }

    pub fn insert_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").insert_calls
    }

    pub fn stored_events(&self) -> Vec<StoredEventRecord> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .stored
            .values()
            .cloned()
            .collect()
    }
}

#[async_trait]
impl EventRepository for FakeEventRepository {
    async fn try_insert(
        &self,
        record: NewEventRecord,
    ) -> Result<EventInsertOutcome, DecisioningDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.insert_calls += 1;
        let key = (record.tenant_id.clone(), record.idempotency_key.clone());
        if let Some(existing) = state.stored.get(&key) {
            return Ok(EventInsertOutcome::AlreadyExists(existing.clone()));
        }
        let stored = StoredEventRecord {
            id: record.id,
            tenant_id: record.tenant_id,
            event_type: record.event_type,
            source_system: record.source_system,
            entity_type: record.entity_type,
            entity_id: record.entity_id,
            correlation_id: record.correlation_id,
            idempotency_key: record.idempotency_key,
            payload: record.payload,
            occurred_at: record.occurred_at,
            recorded_at: record.recorded_at,
        };
        state.stored.insert(key, stored.clone());
        Ok(EventInsertOutcome::Inserted(stored))
    }
}

#[derive(Default)]
struct FakeDecisionState {
    decisions: Vec<DecisionRecord>,
}

pub struct FakeDecisionRepository {
    state: Mutex<FakeDecisionState>,
}

impl FakeDecisionRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeDecisionState::default()),
        }
    }

    pub fn decisions(&self) -> Vec<DecisionRecord> {
        self.state.lock().expect("mutex poisoned").decisions.clone()
    }
}

#[async_trait]
impl DecisionRepository for FakeDecisionRepository {
    async fn insert_decision(
        &self,
        record: &DecisionRecord,
    ) -> Result<(), DecisioningDomainError> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .decisions
            .push(record.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        decision_id: Uuid,
        from: DecisionStatus,
        to: DecisionStatus,
    ) -> Result<(), DecisioningDomainError> {
        if !from.can_transition_to(to) {
            return Err(DecisioningDomainError::InvalidStatusTransition);
        }
        let mut state = self.state.lock().expect("mutex poisoned");
        let decision = state
            .decisions
            .iter_mut()
            .find(|d| d.id == decision_id && d.status == from)
            .ok_or(DecisioningDomainError::InvalidStatusTransition)?;
        decision.status = to;
        Ok(())
    }

    async fn find_by_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<DecisionRecord>, DecisioningDomainError> {
        Ok(self
            .state
            .lock()
            .expect("mutex poisoned")
            .decisions
            .iter()
            .filter(|d| d.event_id == event_id)
            .cloned()
            .collect())
    }
}

#[derive(Clone)]
pub struct FakeActionRow {
    pub record: NewActionLogRecord,
    pub status: ActionStatus,
    pub result: Option<serde_json::Value>,
    pub error_text: Option<String>,
}

pub struct FakeActionLogRepository {
    rows: Mutex<Vec<FakeActionRow>>,
}

impl FakeActionLogRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn rows(&self) -> Vec<FakeActionRow> {
        self.rows.lock().expect("mutex poisoned").clone()
    }

    fn update_row<F>(&self, action_id: Uuid, apply: F) -> Result<(), DecisioningDomainError>
    where
        F: FnOnce(&mut FakeActionRow),
    {
        let mut rows = self.rows.lock().expect("mutex poisoned");
        let row = rows
            .iter_mut()
            .find(|r| r.record.id == action_id)
            .ok_or_else(|| {
                DecisioningDomainError::InfrastructureError("unknown action row".to_string())
            })?;
        apply(row);
        Ok(())
    }
}

#[async_trait]
impl ActionLogRepository for FakeActionLogRepository {
    async fn insert_action(
        &self,
        record: &NewActionLogRecord,
    ) -> Result<(), DecisioningDomainError> {
        self.rows.lock().expect("mutex poisoned").push(FakeActionRow {
            record: record.clone(),
            status: ActionStatus::Logged,
            result: None,
            error_text: None,
        });
        Ok(())
    }

    async fn mark_executed(
        &self,
        action_id: Uuid,
        result: serde_json::Value,
        _executed_at: DateTime<Utc>,
    ) -> Result<(), DecisioningDomainError> {
        self.update_row(action_id, |row| {
            row.status = ActionStatus::Executed;
            row.result = Some(result);
        })
    }

    async fn mark_failed(
        &self,
        action_id: Uuid,
        error_text: &str,
        _executed_at: DateTime<Utc>,
    ) -> Result<(), DecisioningDomainError> {
        self.update_row(action_id, |row| {
            row.status = ActionStatus::Failed;
            row.error_text = Some(error_text.to_string());
        })
    }

    async fn mark_skipped(
        &self,
        action_id: Uuid,
        reason_code: &str,
    ) -> Result<(), DecisioningDomainError> {
        self.update_row(action_id, |row| {
            row.status = ActionStatus::Skipped;
            row.result = Some(serde_json::json!({ "skip_reason": reason_code }));
        })
    }
}

#[derive(Default)]
struct FakeExecutorState {
    calls: usize,
    fail_with: Option<String>,
}

pub struct FakeActionExecutor {
    action_type: ActionType,
    state: Mutex<FakeExecutorState>,
}

impl FakeActionExecutor {
    pub fn new(action_type: ActionType) -> Self {
        Self {
            action_type,
            state: Mutex::new(FakeExecutorState::default()),
        }
    }

    pub fn fail_with(&self, message: &str) {
        self.state.lock().expect("mutex poisoned").fail_with = Some(message.to_string());
    }

    pub fn calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").calls
    }
}

#[async_trait]
impl ActionExecutor for FakeActionExecutor {
    fn action_type(&self) -> ActionType {
        self.action_type
    }

    async fn execute(
        &self,
        _request: ActionExecutionRequest<'_>,
    ) -> Result<serde_json::Value, DecisioningDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.calls += 1;
        if let Some(message) = &state.fail_with {
            return Err(DecisioningDomainError::ActionExecution(message.clone()));
        }
        Ok(serde_json::json!({ "executed_by": self.action_type.as_str() }))
    }
}
