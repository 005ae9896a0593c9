//! Static tier and add-on catalog.
//!
//! Prices and features are compiled in; changing them means a redeploy.
//!
//! | Tier | Price | Popular |
//! |------|-------|---------|
//! | Free | R$ 0/mês | No |
//! | Starter | R$ 97/mês | No |
//! | Pro | R$ 197/mês | Yes |
//! | Agency | R$ 497/mês | No |

use serde::Serialize;

use super::PlanTier;

/// Immutable catalog entry for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanCatalogEntry {
    pub tier: PlanTier,
    pub name: &'static str,
    /// Opaque, already formatted price.
    pub price_label: &'static str,
    pub description: &'static str,
    /// Feature bullets in display order.
    pub features: &'static [&'static str],
    /// Icon reference understood by the front end.
    pub icon: &'static str,
    /// Accent color token.
    pub accent: &'static str,
    pub popular: bool,
}

/// Add-on credit package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreditPackage {
    /// Number of tokens granted.
    pub amount: u32,
    pub price_label: &'static str,
    pub label: &'static str,
    pub popular: bool,
}

static PLAN_CATALOG: [PlanCatalogEntry; 4] = [
    PlanCatalogEntry {
        tier: PlanTier::Free,
        name: "Free",
        price_label: "R$ 0/mês",
        description: "Para explorar a plataforma.",
        features: &["Acesso Limitado", "Geração Nano", "Sem uso comercial"],
        icon: "box",
        accent: "text-slate-400",
        popular: false,
    },
    PlanCatalogEntry {
        tier: PlanTier::Starter,
        name: "Starter",
        price_label: "R$ 97/mês",
        description: "Para criadores iniciantes.",
        features: &[
            "500 Créditos Mensais",
            "Geração de Imagens",
            "Licença Comercial",
            "Suporte por Email",
        ],
        icon: "rocket",
        accent: "text-blue-400",
        popular: false,
    },
    PlanCatalogEntry {
        tier: PlanTier::Pro,
        name: "Pro",
        price_label: "R$ 197/mês",
        description: "Para profissionais de marketing.",
        features: &[
            "1.500 Créditos Mensais",
            "Acesso ao Modelo Banana",
            "Editor Mágico",
            "Suporte Prioritário",
            "Sem Marca D'água",
        ],
        icon: "star",
        accent: "text-primary",
        popular: true,
    },
    PlanCatalogEntry {
        tier: PlanTier::Agency,
        name: "Agency",
        price_label: "R$ 497/mês",
        description: "Potência máxima para times.",
        features: &[
            "4.000 Créditos Mensais",
            "Acesso ao Modelo Flow (4K)",
            "API Access",
            "Gerente Dedicado",
            "Múltiplos Usuários",
        ],
        icon: "crown",
        accent: "text-purple-400",
        popular: false,
    },
];

static CREDIT_PACKAGES: [CreditPackage; 3] = [
    CreditPackage {
        amount: 500,
        price_label: "R$ 30",
        label: "Pack Básico",
        popular: false,
    },
    CreditPackage {
        amount: 1500,
        price_label: "R$ 75",
        label: "Melhor Valor",
        popular: true,
    },
    CreditPackage {
        amount: 4000,
        price_label: "R$ 180",
        label: "Pack Pro",
        popular: false,
    },
];

/// Read access to the compiled-in catalog.
pub struct PlanCatalog;

impl PlanCatalog {
    /// All tiers in display order.
    pub fn entries() -> &'static [PlanCatalogEntry] {
        &PLAN_CATALOG
    }

    /// Entry for a tier.
    pub fn entry(tier: PlanTier) -> &'static PlanCatalogEntry {
        // PLAN_CATALOG is indexed by rank
        &PLAN_CATALOG[tier.rank() as usize]
    }

    /// Add-on credit packages in display order.
    pub fn credit_packages() -> &'static [CreditPackage] {
        &CREDIT_PACKAGES
    }

    /// Finds the package granting exactly `amount` tokens.
    pub fn credit_package(amount: u32) -> Option<&'static CreditPackage> {
        CREDIT_PACKAGES.iter().find(|pkg| pkg.amount == amount)
    }
}
