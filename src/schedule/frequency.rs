use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;

/// How often a scheduled expense recurs. Stored records from the legacy
/// system carry Spanish labels, accepted here as input aliases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// One-off obligation; never advanced by the scheduler.
    #[serde(alias = "unico", alias = "único")]
    Once,
    #[serde(alias = "semanal")]
    Weekly,
    #[serde(alias = "quincenal")]
    Biweekly,
    #[serde(alias = "mensual")]
    Monthly,
    #[serde(alias = "bimestral")]
    Bimonthly,
    #[serde(alias = "trimestral")]
    Quarterly,
    #[serde(alias = "semestral")]
    Semiannual,
    #[serde(alias = "anual")]
    Annual,
}

impl Frequency {
    /// Whether the scheduler may advance a due date with this frequency.
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Frequency::Once)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Once => "Once",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Every 2 Weeks",
            Frequency::Monthly => "Monthly",
            Frequency::Bimonthly => "Every 2 Months",
            Frequency::Quarterly => "Quarterly",
            Frequency::Semiannual => "Every 6 Months",
            Frequency::Annual => "Yearly",
        }
    }
}

impl FromStr for Frequency {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "once" | "unico" | "único" => Ok(Frequency::Once),
            "weekly" | "semanal" => Ok(Frequency::Weekly),
            "biweekly" | "quincenal" => Ok(Frequency::Biweekly),
            "monthly" | "mensual" => Ok(Frequency::Monthly),
            "bimonthly" | "bimestral" => Ok(Frequency::Bimonthly),
            "quarterly" | "trimestral" => Ok(Frequency::Quarterly),
            "semiannual" | "semestral" => Ok(Frequency::Semiannual),
            "annual" | "anual" => Ok(Frequency::Annual),
            other => Err(ScheduleError::UnsupportedFrequency(other.to_string())),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spanish_aliases() {
        assert_eq!("mensual".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!(
            "quincenal".parse::<Frequency>().unwrap(),
            Frequency::Biweekly
        );
        assert_eq!("unico".parse::<Frequency>().unwrap(), Frequency::Once);
    }

    #[test]
    fn rejects_unknown_labels() {
        assert_eq!(
            "fortnightly".parse::<Frequency>(),
            Err(ScheduleError::UnsupportedFrequency("fortnightly".into()))
        );
    }

    #[test]
    fn only_once_is_non_recurring() {
        assert!(!Frequency::Once.is_recurring());
        assert!(Frequency::Annual.is_recurring());
    }
}
