use serde::Serialize;

/// Capability set derived from the raw role string.
///
/// The flags are purely syntactic and not mutually exclusive: a contrived
/// role such as `"admin-branch"` is both admin and branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub is_admin: bool,
    pub is_super_admin: bool,
    pub is_branch: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tab {
    Dashboard,
    TankerRecords,
    BunkerDetails,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::TankerRecords => "Tanker Records",
            Tab::BunkerDetails => "Bunker Details",
        }
    }
}

/// Map a raw role string to its capability set.
/// A missing role yields no capability at all.
pub fn classify(role: Option<&str>) -> Capabilities {
    let Some(role) = role else {
        return Capabilities::default();
    };

    let r = role.to_lowercase();
    let is_super_admin = r == "superadmin";

    Capabilities {
        is_admin: is_super_admin || r.starts_with("admin"),
        is_super_admin,
        is_branch: r.contains("branch"),
    }
}

impl Capabilities {
    pub fn is_authenticated(&self) -> bool {
        self.is_admin || self.is_super_admin || self.is_branch
    }

    /// Tabs shown after login. Bunker details are admin only.
    pub fn visible_tabs(&self) -> Vec<Tab> {
        let mut tabs = vec![Tab::Dashboard, Tab::TankerRecords];
        if self.is_admin {
            tabs.push(Tab::BunkerDetails);
        }
        tabs
    }

    pub fn greeting(&self) -> &'static str {
        if self.is_admin { "Admin" } else { "Branch User" }
    }
}
