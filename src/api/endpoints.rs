use std::fmt;

/// Named resource collections exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Categories,
    Lessons,
    Outlines,
}

impl Endpoint {
    /// Every known endpoint, in display order
    pub const ALL: [Endpoint; 3] = [Endpoint::Categories, Endpoint::Lessons, Endpoint::Outlines];

    /// Logical name used in configuration and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Categories => "categories",
            Endpoint::Lessons => "lessons",
            Endpoint::Outlines => "outlines",
        }
    }

    /// Path relative to the base address
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Categories => "/categories/",
            Endpoint::Lessons => "/lessons/",
            Endpoint::Outlines => "/outlines/",
        }
    }

    /// Look up an endpoint by its logical name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
