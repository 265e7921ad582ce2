//! A validated load run and the entry point that executes it.

use crate::dispatcher::Dispatcher;
use crate::error::LoadError;
use crate::metrics::RunSummary;
use crate::namespace::Namespace;
use crate::store::StoreClient;
use loadtest_generator::ShapeDescriptor;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn, Span};

/// Everything a load run needs besides the store connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPlan {
    pub namespace: Namespace,
    pub worker_count: usize,
    pub duration: Duration,
    pub shape: ShapeDescriptor,
    pub identity_start: usize,
    pub embed_identity: bool,
    pub empty_first: bool,
}

impl LoadPlan {
    /// Create a plan with identities starting at `worker-0`, embedded, and
    /// without emptying the collection.
    pub fn new(
        namespace: Namespace,
        worker_count: usize,
        duration: Duration,
        shape: ShapeDescriptor,
    ) -> Self {
        Self {
            namespace,
            worker_count,
            duration,
            shape,
            identity_start: 0,
            embed_identity: true,
            empty_first: false,
        }
    }

    pub fn with_identity_start(mut self, start: usize) -> Self {
        self.identity_start = start;
        self
    }

    pub fn with_embedded_identity(mut self, embed: bool) -> Self {
        self.embed_identity = embed;
        self
    }

    pub fn with_empty_first(mut self, empty: bool) -> Self {
        self.empty_first = empty;
        self
    }

    /// Check the plan before anything touches the store.
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.worker_count == 0 {
            return Err(LoadError::Config(
                "Worker count must be at least 1".to_string(),
            ));
        }
        if self
            .identity_start
            .checked_add(self.worker_count - 1)
            .is_none()
        {
            return Err(LoadError::Config(format!(
                "Worker identity start {} overflows with {} workers",
                self.identity_start, self.worker_count
            )));
        }
        if Instant::now().checked_add(self.duration).is_none() {
            return Err(LoadError::Config(format!(
                "Duration {:?} is too large",
                self.duration
            )));
        }
        // i{field_count + 2} must be representable
        if self.shape.field_count.checked_add(2).is_none() {
            return Err(LoadError::Config(format!(
                "Field count {} is too large",
                self.shape.field_count
            )));
        }
        Ok(())
    }
}

/// Run a load for `plan.duration` against `plan.namespace`.
///
/// The deadline is computed once, after the optional emptying step, and
/// shared by all workers. Returns after every worker has finished, or with
/// the first fatal error.
pub async fn run_load(
    store: Arc<dyn StoreClient>,
    plan: &LoadPlan,
    span: Span,
) -> Result<RunSummary, LoadError> {
    plan.validate()?;

    if plan.shape.nesting_depth != 0 {
        warn!(
            parent: &span,
            depth = plan.shape.nesting_depth,
            "Nesting depth is accepted but not applied; documents stay flat"
        );
    }

    if plan.empty_first {
        info!(parent: &span, namespace = %plan.namespace, "Emptying collection");
        store.empty(&plan.namespace).await?;
    }

    let deadline = Instant::now()
        .checked_add(plan.duration)
        .ok_or_else(|| LoadError::Config(format!("Duration {:?} is too large", plan.duration)))?;

    info!(
        parent: &span,
        "Inserting into {} for {:?} with {} workers ({} fields, binary: {})",
        plan.namespace,
        plan.duration,
        plan.worker_count,
        plan.shape.field_count,
        plan.shape.has_binary()
    );

    Dispatcher::new(store, plan.namespace.clone(), plan.shape, span)
        .with_identity_start(plan.identity_start)
        .with_embedded_identity(plan.embed_identity)
        .execute(plan.worker_count, deadline)
        .await
}
