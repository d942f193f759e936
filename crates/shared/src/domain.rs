use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

id_newtype!(EmployeeId);

/// Closed string enumeration with a fixed, ordered member list.
///
/// `ALL` order is significant: enrichment indexes into it and form defaults
/// take its first entry.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn first() -> Self {
                Self::ALL[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == raw)
                    .ok_or_else(|| UnknownVariant::new(stringify!($name), raw))
            }
        }
    };
}

labeled_enum!(
    Department {
        Engineering => "Engineering",
        HumanResources => "Human Resources",
        Marketing => "Marketing",
        Sales => "Sales",
        Finance => "Finance",
        Operations => "Operations",
        Legal => "Legal",
        CustomerSupport => "Customer Support",
    }
);

labeled_enum!(
    Position {
        JuniorDeveloper => "Junior Developer",
        SeniorDeveloper => "Senior Developer",
        TeamLead => "Team Lead",
        Manager => "Manager",
        Director => "Director",
        Vp => "VP",
        Analyst => "Analyst",
        Specialist => "Specialist",
        Coordinator => "Coordinator",
        Administrator => "Administrator",
    }
);

labeled_enum!(
    EmployeeStatus {
        Active => "active",
        OnLeave => "on-leave",
        Terminated => "terminated",
    }
);

labeled_enum!(
    Gender {
        Male => "male",
        Female => "female",
    }
);

impl EmployeeStatus {
    /// Human-facing label shown in badges and detail views.
    pub fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
            EmployeeStatus::Terminated => "Terminated",
        }
    }
}

/// Selector used by list filters: either everything or one exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq + Copy> Selection<T> {
    pub fn admits(&self, value: Option<T>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => value == Some(*wanted),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        raw.parse().map(Selection::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_lists_have_fixed_sizes_and_order() {
        assert_eq!(Department::ALL.len(), 8);
        assert_eq!(Position::ALL.len(), 10);
        assert_eq!(Department::first(), Department::Engineering);
        assert_eq!(Position::first(), Position::JuniorDeveloper);
        assert_eq!(Department::ALL[7], Department::CustomerSupport);
        assert_eq!(Position::ALL[9], Position::Administrator);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        assert_eq!(
            "Human Resources".parse::<Department>().expect("department"),
            Department::HumanResources
        );
        assert_eq!(
            "on-leave".parse::<EmployeeStatus>().expect("status"),
            EmployeeStatus::OnLeave
        );
        assert!("engineering".parse::<Department>().is_err());
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&Position::Vp).expect("serialize");
        assert_eq!(json, "\"VP\"");
        let status: EmployeeStatus = serde_json::from_str("\"terminated\"").expect("deserialize");
        assert_eq!(status, EmployeeStatus::Terminated);
    }

    #[test]
    fn selection_parses_all_and_exact_values() {
        assert_eq!("all".parse::<Selection<Department>>().expect("all"), Selection::All);
        assert_eq!(
            "Sales".parse::<Selection<Department>>().expect("sales"),
            Selection::Only(Department::Sales)
        );
        assert!(Selection::Only(EmployeeStatus::Active).admits(Some(EmployeeStatus::Active)));
        assert!(!Selection::Only(EmployeeStatus::Active).admits(None));
        assert!(Selection::<EmployeeStatus>::All.admits(None));
    }
}
