/// Time range used to narrow the transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Window {
    #[default]
    All,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Window {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Unknown selectors fall back to `All`.
    pub(crate) fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" | "today" | "d" => Self::Daily,
            "weekly" | "week" | "w" => Self::Weekly,
            "monthly" | "month" | "m" => Self::Monthly,
            "yearly" | "year" | "y" => Self::Yearly,
            _ => Self::All,
        }
    }

    pub(crate) fn all() -> &'static [Window] {
        &[
            Self::All,
            Self::Daily,
            Self::Weekly,
            Self::Monthly,
            Self::Yearly,
        ]
    }

    pub(crate) fn next(self) -> Self {
        let windows = Self::all();
        let idx = windows.iter().position(|w| *w == self).unwrap_or(0);
        windows[(idx + 1) % windows.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let windows = Self::all();
        let idx = windows.iter().position(|w| *w == self).unwrap_or(0);
        let prev = if idx == 0 { windows.len() - 1 } else { idx - 1 };
        windows[prev]
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All time"),
            Self::Daily => write!(f, "Today"),
            Self::Weekly => write!(f, "Last 7 days"),
            Self::Monthly => write!(f, "This month"),
            Self::Yearly => write!(f, "This year"),
        }
    }
}
