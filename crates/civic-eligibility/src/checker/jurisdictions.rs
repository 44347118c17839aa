use serde::Serialize;

/// Policy parameters for one registration jurisdiction. Loaded once from the
/// fixed table below and never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JurisdictionPolicy {
    pub code: &'static str,
    pub name: &'static str,
    pub strict_documentary_proof: bool,
    pub minimum_residency_days: u32,
    pub notes: &'static str,
}

/// Selection entry exposed to callers that only need code and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JurisdictionSummary {
    pub code: &'static str,
    pub name: &'static str,
}

/// The exhaustive source of selectable jurisdiction codes.
#[derive(Debug)]
pub struct JurisdictionDirectory {
    policies: Vec<JurisdictionPolicy>,
}

impl JurisdictionDirectory {
    pub fn standard() -> Self {
        Self {
            policies: standard_policies(),
        }
    }

    /// Case-insensitive lookup by code.
    pub fn lookup(&self, code: &str) -> Option<&JurisdictionPolicy> {
        let code = code.trim();
        self.policies
            .iter()
            .find(|policy| policy.code.eq_ignore_ascii_case(code))
    }

    /// Summaries in table-declaration order.
    pub fn summaries(&self) -> Vec<JurisdictionSummary> {
        self.policies
            .iter()
            .map(|policy| JurisdictionSummary {
                code: policy.code,
                name: policy.name,
            })
            .collect()
    }

    pub fn policies(&self) -> &[JurisdictionPolicy] {
        &self.policies
    }
}

fn standard_policies() -> Vec<JurisdictionPolicy> {
    vec![
        JurisdictionPolicy {
            code: "AL",
            name: "Alabama",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict physical proof required.",
        },
        JurisdictionPolicy {
            code: "AK",
            name: "Alaska",
            strict_documentary_proof: false,
            minimum_residency_days: 30,
            notes: "Affidavits allowed.",
        },
        JurisdictionPolicy {
            code: "AZ",
            name: "Arizona",
            strict_documentary_proof: true,
            minimum_residency_days: 29,
            notes: "Early adopter of documentary-proof rules; strict enforcement.",
        },
        JurisdictionPolicy {
            code: "AR",
            name: "Arkansas",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Mandatory proof for new registrations.",
        },
        JurisdictionPolicy {
            code: "CA",
            name: "California",
            strict_documentary_proof: false,
            minimum_residency_days: 15,
            notes: "Automatic verification via DMV.",
        },
        JurisdictionPolicy {
            code: "CO",
            name: "Colorado",
            strict_documentary_proof: false,
            minimum_residency_days: 22,
            notes: "Streamlined mail-in system.",
        },
        JurisdictionPolicy {
            code: "CT",
            name: "Connecticut",
            strict_documentary_proof: false,
            minimum_residency_days: 0,
            notes: "Integrated DMV verification.",
        },
        JurisdictionPolicy {
            code: "DE",
            name: "Delaware",
            strict_documentary_proof: false,
            minimum_residency_days: 0,
            notes: "Streamlined process.",
        },
        JurisdictionPolicy {
            code: "DC",
            name: "District of Columbia",
            strict_documentary_proof: false,
            minimum_residency_days: 30,
            notes: "Affidavit and residency focused.",
        },
        JurisdictionPolicy {
            code: "FL",
            name: "Florida",
            strict_documentary_proof: true,
            minimum_residency_days: 29,
            notes: "High strictness for new residents.",
        },
        JurisdictionPolicy {
            code: "GA",
            name: "Georgia",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict verification mandatory.",
        },
        JurisdictionPolicy {
            code: "HI",
            name: "Hawaii",
            strict_documentary_proof: false,
            minimum_residency_days: 30,
            notes: "Streamlined system.",
        },
        JurisdictionPolicy {
            code: "ID",
            name: "Idaho",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Recent strict ID legislation.",
        },
        JurisdictionPolicy {
            code: "IL",
            name: "Illinois",
            strict_documentary_proof: false,
            minimum_residency_days: 30,
            notes: "Automatic registration.",
        },
        JurisdictionPolicy {
            code: "IN",
            name: "Indiana",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict ID jurisdiction.",
        },
        JurisdictionPolicy {
            code: "IA",
            name: "Iowa",
            strict_documentary_proof: true,
            minimum_residency_days: 0,
            notes: "Strict compliance measures.",
        },
        JurisdictionPolicy {
            code: "KS",
            name: "Kansas",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Historical strict documentary-proof rules.",
        },
        JurisdictionPolicy {
            code: "KY",
            name: "Kentucky",
            strict_documentary_proof: true,
            minimum_residency_days: 28,
            notes: "Strict ID and residency verification.",
        },
        JurisdictionPolicy {
            code: "LA",
            name: "Louisiana",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Mandatory documentation.",
        },
        JurisdictionPolicy {
            code: "ME",
            name: "Maine",
            strict_documentary_proof: false,
            minimum_residency_days: 0,
            notes: "Residency-focused verification.",
        },
        JurisdictionPolicy {
            code: "MD",
            name: "Maryland",
            strict_documentary_proof: false,
            minimum_residency_days: 21,
            notes: "Streamlined DMV process.",
        },
        JurisdictionPolicy {
            code: "MA",
            name: "Massachusetts",
            strict_documentary_proof: false,
            minimum_residency_days: 20,
            notes: "Streamlined process.",
        },
        JurisdictionPolicy {
            code: "MI",
            name: "Michigan",
            strict_documentary_proof: false,
            minimum_residency_days: 30,
            notes: "DMV integration.",
        },
        JurisdictionPolicy {
            code: "MN",
            name: "Minnesota",
            strict_documentary_proof: false,
            minimum_residency_days: 20,
            notes: "Affidavit and same-day verification.",
        },
        JurisdictionPolicy {
            code: "MS",
            name: "Mississippi",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict enforcement.",
        },
        JurisdictionPolicy {
            code: "MO",
            name: "Missouri",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict photo ID and proof rules.",
        },
        JurisdictionPolicy {
            code: "MT",
            name: "Montana",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict ID requirements.",
        },
        JurisdictionPolicy {
            code: "NE",
            name: "Nebraska",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "New strict ID laws.",
        },
        JurisdictionPolicy {
            code: "NV",
            name: "Nevada",
            strict_documentary_proof: false,
            minimum_residency_days: 30,
            notes: "Streamlined mail-in verification.",
        },
        JurisdictionPolicy {
            code: "NH",
            name: "New Hampshire",
            strict_documentary_proof: true,
            minimum_residency_days: 0,
            notes: "Strict residency and proof laws.",
        },
        JurisdictionPolicy {
            code: "NJ",
            name: "New Jersey",
            strict_documentary_proof: false,
            minimum_residency_days: 30,
            notes: "Automatic registration.",
        },
        JurisdictionPolicy {
            code: "NM",
            name: "New Mexico",
            strict_documentary_proof: false,
            minimum_residency_days: 30,
            notes: "Affidavit friendly.",
        },
        JurisdictionPolicy {
            code: "NY",
            name: "New York",
            strict_documentary_proof: false,
            minimum_residency_days: 30,
            notes: "Streamlined DMV system.",
        },
        JurisdictionPolicy {
            code: "NC",
            name: "North Carolina",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict ID enforcement.",
        },
        JurisdictionPolicy {
            code: "ND",
            name: "North Dakota",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict ID and residency rules.",
        },
        JurisdictionPolicy {
            code: "OH",
            name: "Ohio",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict compliance.",
        },
        JurisdictionPolicy {
            code: "OK",
            name: "Oklahoma",
            strict_documentary_proof: true,
            minimum_residency_days: 25,
            notes: "High strictness.",
        },
        JurisdictionPolicy {
            code: "OR",
            name: "Oregon",
            strict_documentary_proof: false,
            minimum_residency_days: 20,
            notes: "Automatic DMV registration.",
        },
        JurisdictionPolicy {
            code: "PA",
            name: "Pennsylvania",
            strict_documentary_proof: false,
            minimum_residency_days: 30,
            notes: "Hybrid verification system.",
        },
        JurisdictionPolicy {
            code: "RI",
            name: "Rhode Island",
            strict_documentary_proof: false,
            minimum_residency_days: 30,
            notes: "Streamlined system.",
        },
        JurisdictionPolicy {
            code: "SC",
            name: "South Carolina",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict ID enforcement.",
        },
        JurisdictionPolicy {
            code: "SD",
            name: "South Dakota",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict compliance.",
        },
        JurisdictionPolicy {
            code: "TN",
            name: "Tennessee",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Mandatory proof requirements.",
        },
        JurisdictionPolicy {
            code: "TX",
            name: "Texas",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Very strict enforcement.",
        },
        JurisdictionPolicy {
            code: "UT",
            name: "Utah",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict verification jurisdiction.",
        },
        JurisdictionPolicy {
            code: "VT",
            name: "Vermont",
            strict_documentary_proof: false,
            minimum_residency_days: 0,
            notes: "Streamlined registration.",
        },
        JurisdictionPolicy {
            code: "VA",
            name: "Virginia",
            strict_documentary_proof: false,
            minimum_residency_days: 0,
            notes: "Hybrid system.",
        },
        JurisdictionPolicy {
            code: "WA",
            name: "Washington",
            strict_documentary_proof: false,
            minimum_residency_days: 30,
            notes: "Automatic registration.",
        },
        JurisdictionPolicy {
            code: "WV",
            name: "West Virginia",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict ID laws.",
        },
        JurisdictionPolicy {
            code: "WI",
            name: "Wisconsin",
            strict_documentary_proof: true,
            minimum_residency_days: 28,
            notes: "Strict residency verification.",
        },
        JurisdictionPolicy {
            code: "WY",
            name: "Wyoming",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "Strict ID and proof laws.",
        },
        JurisdictionPolicy {
            code: "OTHER",
            name: "Other Territory",
            strict_documentary_proof: true,
            minimum_residency_days: 30,
            notes: "General federal baseline.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn codes_are_unique() {
        let directory = JurisdictionDirectory::standard();
        let codes: BTreeSet<&str> = directory
            .policies()
            .iter()
            .map(|policy| policy.code)
            .collect();
        assert_eq!(codes.len(), directory.policies().len());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let directory = JurisdictionDirectory::standard();
        let policy = directory.lookup(" tx ").expect("texas resolves");
        assert_eq!(policy.name, "Texas");
        assert!(policy.strict_documentary_proof);
        assert_eq!(policy.minimum_residency_days, 30);
    }

    #[test]
    fn summaries_preserve_declaration_order() {
        let directory = JurisdictionDirectory::standard();
        let summaries = directory.summaries();
        assert_eq!(summaries.first().map(|summary| summary.code), Some("AL"));
        assert_eq!(summaries.last().map(|summary| summary.code), Some("OTHER"));
        assert_eq!(summaries.len(), directory.policies().len());
    }
}
