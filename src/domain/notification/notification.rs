//! Transient user-facing notifications.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::plans::{ChangeDirection, PlanTier};

/// Severity of a notification; decides styling and dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSeverity {
    Info,
    Success,
    Error,
}

impl NotificationSeverity {
    /// Default heading for this severity.
    pub fn title(&self) -> &'static str {
        match self {
            NotificationSeverity::Info => "Processando",
            NotificationSeverity::Success => "Sucesso",
            NotificationSeverity::Error => "Acesso Restrito",
        }
    }
}

/// A message shown to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: NotificationSeverity,
    pub title: String,
    pub message: String,
    pub issued_at: Timestamp,
}

impl Notification {
    /// Creates a notification with the severity's default title.
    pub fn new(severity: NotificationSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: severity.title().to_string(),
            message: message.into(),
            issued_at: Timestamp::now(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Shown when a plan change flow starts.
    pub fn plan_change_started(tier: PlanTier, direction: ChangeDirection) -> Self {
        Self::new(
            NotificationSeverity::Info,
            format!(
                "Iniciando fluxo de {} para o plano {}...",
                direction.label(),
                tier.display_name()
            ),
        )
    }

    /// Shown when a free viewer tries to buy credits.
    pub fn credit_purchase_denied() -> Self {
        Self::new(
            NotificationSeverity::Error,
            "Ação Bloqueada: Você está no Plano Gratuito. Para comprar créditos adicionais, \
             é necessário fazer um Upgrade para um Plano Pago.",
        )
    }

    /// Shown when a credit purchase was handed to checkout.
    pub fn credit_purchase_started(amount: u32) -> Self {
        Self::new(
            NotificationSeverity::Success,
            format!(
                "Pedido de {} créditos iniciado! Redirecionando para checkout seguro...",
                amount
            ),
        )
    }

    /// Shown when the billing service could not take the command.
    pub fn billing_unavailable() -> Self {
        Self::new(
            NotificationSeverity::Error,
            "Não foi possível iniciar o checkout agora. Tente novamente em instantes.",
        )
        .with_title("Falha no Checkout")
    }

    pub fn is_error(&self) -> bool {
        self.severity == NotificationSeverity::Error
    }
}
