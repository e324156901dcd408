use std::{future::Future, sync::Arc, time::Duration};

use models::jersey::JerseyInput;
use tracing::{debug, error, info, instrument, warn};

use super::outcome::{AdminForm, Location, Outcome};
use super::policy::{AdminAction, AdminPolicy, AllowAll};
use super::repository::JerseyRepository;
use super::Jersey;
use crate::errors::ServiceError;

/// Upper bound for a single store round-trip unless configured otherwise.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// One operation per catalog action; holds no state besides its collaborators.
pub struct CatalogService {
    repo: Arc<dyn JerseyRepository>,
    policy: Arc<dyn AdminPolicy>,
    store_timeout: Duration,
}

impl CatalogService {
    /// Service over `repo` with open admin actions and the default store timeout.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::catalog::{CatalogService, JerseyInput, Location, Outcome};
    /// use service::catalog::repository::mock::InMemoryJerseyRepository;
    /// let svc = CatalogService::new(Arc::new(InMemoryJerseyRepository::default()));
    /// let input = JerseyInput::new("Super Eagles", "Nigeria", "59.99", "https://x/y.jpg");
    /// let outcome = tokio_test::block_on(svc.create_jersey(input));
    /// assert_eq!(outcome, Outcome::Redirect(Location::List));
    /// let listed = tokio_test::block_on(svc.list_jerseys()).ok().unwrap();
    /// assert_eq!(listed[0].team, "Super Eagles");
    /// ```
    pub fn new(repo: Arc<dyn JerseyRepository>) -> Self {
        Self { repo, policy: Arc::new(AllowAll), store_timeout: DEFAULT_STORE_TIMEOUT }
    }

    pub fn with_policy(mut self, policy: Arc<dyn AdminPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    async fn store<T, F>(&self, op: &'static str, fut: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ServiceError>> + Send,
    {
        match tokio::time::timeout(self.store_timeout, fut).await {
            Ok(res) => res,
            Err(_) => {
                warn!(op, timeout_ms = self.store_timeout.as_millis() as u64, "store_timeout");
                Err(ServiceError::Timeout(self.store_timeout))
            }
        }
    }

    fn permits(&self, action: AdminAction) -> bool {
        let allowed = self.policy.allows(action);
        if !allowed {
            warn!(?action, "admin_action_denied");
        }
        allowed
    }

    #[instrument(skip(self))]
    pub async fn list_jerseys(&self) -> Outcome<Vec<Jersey>> {
        let res = self.store("list", self.repo.list()).await;
        match res {
            Ok(all) => {
                debug!(count = all.len(), "jerseys_listed");
                Outcome::Ok(all)
            }
            Err(e) => failed("list", e),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_jersey_detail(&self, id: &str) -> Outcome<Jersey> {
        let res = self.store("get", self.repo.get(id)).await;
        match res {
            Ok(jersey) => Outcome::Ok(jersey),
            Err(e) => failed("get", e),
        }
    }

    /// Blank form without an id; edit form for a known id; unknown ids fall back
    /// to the blank form through a redirect.
    #[instrument(skip(self))]
    pub async fn show_admin_form(&self, id: Option<&str>) -> Outcome<AdminForm> {
        if !self.permits(AdminAction::ViewForm) {
            return Outcome::Forbidden;
        }
        let Some(id) = id.map(str::trim).filter(|s| !s.is_empty()) else {
            return Outcome::Ok(AdminForm::Blank);
        };
        let res = self.store("get", self.repo.get(id)).await;
        match res {
            Ok(jersey) => Outcome::Ok(AdminForm::Edit(jersey)),
            Err(ServiceError::NotFound(_)) => {
                debug!(%id, "admin_form_unknown_id");
                Outcome::Redirect(Location::BlankForm)
            }
            Err(e) => failed("get", e),
        }
    }

    #[instrument(skip(self, input), fields(team = %input.team))]
    pub async fn create_jersey(&self, input: JerseyInput) -> Outcome<()> {
        if !self.permits(AdminAction::Create) {
            return Outcome::Forbidden;
        }
        let res = self.store("create", self.repo.create(&input)).await;
        match res {
            Ok(jersey) => {
                info!(jersey_id = %jersey.id, team = %jersey.team, "jersey_created");
                Outcome::Redirect(Location::List)
            }
            Err(e) => rejected("create", e, input),
        }
    }

    #[instrument(skip(self, input), fields(team = %input.team))]
    pub async fn update_jersey(&self, id: &str, input: JerseyInput) -> Outcome<()> {
        if !self.permits(AdminAction::Update) {
            return Outcome::Forbidden;
        }
        let res = self.store("update", self.repo.update(id, &input)).await;
        match res {
            Ok(jersey) => {
                info!(jersey_id = %jersey.id, "jersey_updated");
                Outcome::Redirect(Location::Detail(jersey.id))
            }
            Err(e) => rejected("update", e, input),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_jersey(&self, id: &str) -> Outcome<()> {
        if !self.permits(AdminAction::Delete) {
            return Outcome::Forbidden;
        }
        let res = self.store("delete", self.repo.delete(id)).await;
        match res {
            Ok(jersey) => {
                info!(jersey_id = %jersey.id, "jersey_deleted");
                Outcome::Redirect(Location::List)
            }
            Err(e) => failed("delete", e),
        }
    }
}

fn failed<T>(op: &'static str, err: ServiceError) -> Outcome<T> {
    match err {
        ServiceError::NotFound(_) => Outcome::NotFound,
        other => {
            error!(op, error = %other, "catalog_store_unavailable");
            Outcome::Unavailable
        }
    }
}

fn rejected(op: &'static str, err: ServiceError, input: JerseyInput) -> Outcome<()> {
    match err {
        ServiceError::Validation(errors) => {
            info!(op, %errors, "jersey_rejected");
            Outcome::ValidationFailed { errors, input }
        }
        other => failed(op, other),
    }
}
