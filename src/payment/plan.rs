use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const TRIAL_DAYS: i64 = 30;
/// Annual billing is twelve months minus 10%
const ANNUAL_DISCOUNT_PERCENT: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Gratuito,
    Profissional,
    Empresarial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    #[serde(rename = "ativo")]
    Active,
    Trial,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Gratuito, Plan::Profissional, Plan::Empresarial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Gratuito => "gratuito",
            Plan::Profissional => "profissional",
            Plan::Empresarial => "empresarial",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Plan::Gratuito => "Plano Gratuito",
            Plan::Profissional => "Plano Profissional",
            Plan::Empresarial => "Plano Empresarial",
        }
    }

    pub fn monthly_price_cents(&self) -> u64 {
        match self {
            Plan::Gratuito => 0,
            Plan::Profissional => 1990,
            Plan::Empresarial => 3990,
        }
    }

    pub fn price_cents(&self, cycle: BillingCycle) -> u64 {
        let monthly = self.monthly_price_cents();
        match cycle {
            BillingCycle::Monthly => monthly,
            BillingCycle::Annual => monthly * 12 * (100 - ANNUAL_DISCOUNT_PERCENT) / 100,
        }
    }

    pub fn is_paid(&self) -> bool {
        !matches!(self, Plan::Gratuito)
    }
}

/// Plan state recorded at sign-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub plan: Plan,
    pub status: PlanStatus,
    #[serde(rename = "trialStart")]
    pub trial_start: Option<DateTime<Utc>>,
    #[serde(rename = "trialEnd")]
    pub trial_end: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Free plans are active right away; paid plans start a trial
    pub fn start(plan: Plan, now: DateTime<Utc>) -> Self {
        if plan.is_paid() {
            Self {
                plan,
                status: PlanStatus::Trial,
                trial_start: Some(now),
                trial_end: Some(now + Duration::days(TRIAL_DAYS)),
            }
        } else {
            Self {
                plan,
                status: PlanStatus::Active,
                trial_start: None,
                trial_end: None,
            }
        }
    }

    pub fn in_trial(&self, at: DateTime<Utc>) -> bool {
        match (self.status, self.trial_end) {
            (PlanStatus::Trial, Some(end)) => at < end,
            _ => false,
        }
    }

    /// Payment confirmed: the plan is active from now on
    pub fn activate(&mut self) {
        self.status = PlanStatus::Active;
    }
}

/// Plain-text adhesion contract issued once a payment is confirmed
pub fn adhesion_contract(name: &str, tax_id: &str, plan: Plan, txid: &str, confirmed_at: &str) -> String {
    format!(
        "CONTRATO DE ADESÃO - VERYSING\n\
         \n\
         Pelo presente instrumento particular, de um lado VERYSING DIGITAL LTDA., e de outro lado\n\
         {name}, portador(a) do CPF {tax_id}, doravante denominado(a) CONTRATANTE.\n\
         \n\
         O CONTRATANTE adere ao plano {plan}, com os benefícios descritos na plataforma.\n\
         \n\
         O pagamento foi confirmado e a assinatura deste contrato é realizada digitalmente neste ato.\n\
         \n\
         Data: {confirmed_at}\n\
         \n\
         Assinado digitalmente por VerySing System\n\
         Transação ID: {txid}\n",
        name = name.trim(),
        tax_id = tax_id.trim(),
        plan = plan.as_str().to_uppercase(),
        confirmed_at = confirmed_at,
        txid = txid,
    )
}

pub fn adhesion_contract_file_name(txid: &str) -> String {
    format!("contrato_{}.txt", txid)
}
