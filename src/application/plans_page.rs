//! PlansPage - One viewer's session on the plans page.
//!
//! Mounting starts the plan lookup in the background; until it lands the page
//! is loading and refuses actions. Actions replace the single visible
//! notification and schedule its dismissal. Unmounting aborts the lookup and
//! every pending timer, so nothing touches the page afterwards.
//!
//! State sits behind a `std::sync::Mutex` that is never held across an
//! `.await`. Must be mounted inside a Tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::foundation::UserId;
use crate::domain::notification::{Notification, NotificationSlot};
use crate::domain::plans::{PlanError, PlanId, PlanTier};
use crate::ports::{BillingGateway, PlanReader};

use super::handlers::{
    CurrentPlan, GetCurrentPlanHandler, GetCurrentPlanQuery, PlanSource, PlansOverview,
    PurchaseCreditsCommand, PurchaseCreditsHandler, RequestPlanChangeCommand,
    RequestPlanChangeHandler,
};
use super::PlansSettings;

/// Ports and settings a page session needs.
#[derive(Clone)]
pub struct PlansPageDeps {
    pub plan_reader: Arc<dyn PlanReader>,
    pub billing_gateway: Arc<dyn BillingGateway>,
    pub settings: PlansSettings,
}

/// What the page shows at one instant.
#[derive(Debug, Clone)]
pub struct PlansPageSnapshot {
    pub loading: bool,
    pub overview: PlansOverview,
    pub notification: Option<Notification>,
}

struct PageState {
    mounted: bool,
    loading: bool,
    current: CurrentPlan,
    notification: NotificationSlot,
    timers: Vec<JoinHandle<()>>,
}

/// A mounted plans page.
pub struct PlansPage {
    viewer: Option<UserId>,
    settings: PlansSettings,
    plan_change: RequestPlanChangeHandler,
    purchase: PurchaseCreditsHandler,
    state: Arc<Mutex<PageState>>,
    lookup: Mutex<Option<JoinHandle<()>>>,
    loaded: watch::Receiver<bool>,
}

impl PlansPage {
    /// Mounts the page for `viewer`, starting the plan lookup if signed in.
    pub fn mount(deps: PlansPageDeps, viewer: Option<UserId>) -> Self {
        let signed_in = viewer.is_some();
        let (loaded_tx, loaded_rx) = watch::channel(!signed_in);

        let state = Arc::new(Mutex::new(PageState {
            mounted: true,
            loading: signed_in,
            current: CurrentPlan::free(PlanSource::Anonymous),
            notification: NotificationSlot::new(),
            timers: Vec::new(),
        }));

        let lookup = viewer.clone().map(|viewer| {
            let handler = GetCurrentPlanHandler::new(deps.plan_reader.clone(), deps.settings.lookup_timeout);
            let state = Arc::clone(&state);
            tokio::spawn(async move {
                let current = handler
                    .handle(GetCurrentPlanQuery {
                        viewer: Some(viewer),
                    })
                    .await;

                let mut page = lock(&state);
                if !page.mounted {
                    return;
                }
                page.current = current;
                page.loading = false;
                drop(page);
                let _ = loaded_tx.send(true);
            })
        });

        Self {
            viewer,
            settings: deps.settings,
            plan_change: RequestPlanChangeHandler::new(deps.billing_gateway.clone()),
            purchase: PurchaseCreditsHandler::new(deps.billing_gateway),
            state,
            lookup: Mutex::new(lookup),
            loaded: loaded_rx,
        }
    }

    /// Waits for the plan lookup to land. Returns at once when not loading,
    /// or when the page was unmounted first.
    pub async fn wait_until_loaded(&self) {
        let mut loaded = self.loaded.clone();
        let _ = loaded.wait_for(|loaded| *loaded).await;
    }

    pub fn snapshot(&self) -> PlansPageSnapshot {
        let page = lock(&self.state);
        PlansPageSnapshot {
            loading: page.loading,
            overview: PlansOverview::for_plan(page.current.clone(), self.settings.visibility),
            notification: page.notification.current().cloned(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        lock(&self.state).mounted
    }

    /// Starts an upgrade or downgrade to `tier`.
    pub async fn request_plan_change(&self, tier: PlanTier) -> Result<Notification, PlanError> {
        let current = self.begin_action()?;
        let result = self
            .plan_change
            .handle(RequestPlanChangeCommand {
                viewer: self.viewer.clone(),
                current,
                target: tier,
            })
            .await?;
        self.present(result.notification.clone());
        Ok(result.notification)
    }

    /// Buys the credit package of `amount`.
    pub async fn buy_credits(&self, amount: u32) -> Result<Notification, PlanError> {
        let current = self.begin_action()?;
        let result = self
            .purchase
            .handle(PurchaseCreditsCommand {
                viewer: self.viewer.clone(),
                current,
                amount,
            })
            .await?;
        self.present(result.notification.clone());
        Ok(result.notification)
    }

    /// Unmounts the page. Late lookup results and timers are discarded.
    pub fn unmount(&self) {
        let timers = {
            let mut page = lock(&self.state);
            if !page.mounted {
                return;
            }
            page.mounted = false;
            std::mem::take(&mut page.timers)
        };

        if let Some(lookup) = lock(&self.lookup).take() {
            lookup.abort();
        }
        for timer in timers {
            timer.abort();
        }
        tracing::debug!(viewer = ?self.viewer.as_ref().map(|v| v.as_str()), "Plans page unmounted");
    }

    /// Checks the page can act and clears the previous notification.
    fn begin_action(&self) -> Result<PlanId, PlanError> {
        let mut page = lock(&self.state);
        if page.loading {
            return Err(PlanError::StillLoading);
        }
        page.notification.clear();
        Ok(page.current.plan_id.clone())
    }

    fn present(&self, notification: Notification) {
        let dismiss_after = self.settings.timings.dismiss_after(notification.severity);

        let mut page = lock(&self.state);
        if !page.mounted {
            return;
        }
        let generation = page.notification.show(notification);

        if let Some(delay) = dismiss_after {
            let state = Arc::clone(&self.state);
            let timer = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let mut page = lock(&state);
                if page.mounted {
                    page.notification.dismiss(generation);
                }
            });
            page.timers.retain(|t| !t.is_finished());
            page.timers.push(timer);
        }
    }
}

impl Drop for PlansPage {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
