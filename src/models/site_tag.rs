use serde::Serialize;

/// Classification of a clock event against the owning company's geofence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SiteTag {
    OnSite,
    Remote,
}

impl SiteTag {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SiteTag::OnSite => "on-site",
            SiteTag::Remote => "remote",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "on-site" => Some(SiteTag::OnSite),
            "remote" => Some(SiteTag::Remote),
            _ => None,
        }
    }
}
