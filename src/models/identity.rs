use crate::utils::sanitize_cell;

/// Logo image attached to a company profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// Who the report is generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Individual { full_name: String },
    Company { company_name: String, logo: Option<Logo> },
}

impl Identity {
    /// Text written in the first header row.
    pub fn header_line(&self) -> String {
        match self {
            Identity::Individual { full_name } => {
                format!("Name: {}", sanitize_cell(or_na(full_name)))
            }
            Identity::Company { company_name, .. } => {
                format!("Company: {}", sanitize_cell(or_na(company_name)))
            }
        }
    }

    pub fn logo(&self) -> Option<&Logo> {
        match self {
            Identity::Company { logo, .. } => logo.as_ref(),
            Identity::Individual { .. } => None,
        }
    }
}

fn or_na(s: &str) -> &str {
    if s.trim().is_empty() { "N/A" } else { s }
}
