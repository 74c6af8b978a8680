use serde_json::Value;
use uuid::Uuid;

/// Structured audit trail for mutating operations. Events go to the
/// "audit" target so the back office can filter them out of the general
/// request log.
pub fn log_audit(actor: Option<Uuid>, action: &str, resource: Option<&str>, metadata: Option<Value>) {
    let actor = actor.map(|id| id.to_string());
    let metadata = metadata.unwrap_or(Value::Null);
    tracing::info!(
        target: "audit",
        actor = actor.as_deref().unwrap_or("-"),
        action,
        resource = resource.unwrap_or("-"),
        metadata = %metadata,
    );
}
