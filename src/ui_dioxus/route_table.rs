//! Route table for the schedule pages.
//!
//! Patterns are tried in order and the first structural match wins. Exact
//! patterns need the same number of segments as the path; the others match
//! any path that starts with them, so `/schedules/x/shifts/2026` still
//! renders the shifts page.

const SCHEDULE_ID: &str = "scheduleID";

/// Which view a matched route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleView {
    List,
    Details,
    Rules,
    OnCallNotifications,
    AssignedTo,
    Overrides,
    Shifts,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub exact: bool,
    pub view: ScheduleView,
}

pub const SCHEDULE_ROUTES: [RouteEntry; 7] = [
    RouteEntry { pattern: "/schedules", exact: true, view: ScheduleView::List },
    RouteEntry { pattern: "/schedules/:scheduleID", exact: true, view: ScheduleView::Details },
    RouteEntry { pattern: "/schedules/:scheduleID/assignments", exact: false, view: ScheduleView::Rules },
    RouteEntry {
        pattern: "/schedules/:scheduleID/on-call-notifications",
        exact: false,
        view: ScheduleView::OnCallNotifications,
    },
    RouteEntry {
        pattern: "/schedules/:scheduleID/escalation-policies",
        exact: false,
        view: ScheduleView::AssignedTo,
    },
    RouteEntry { pattern: "/schedules/:scheduleID/overrides", exact: false, view: ScheduleView::Overrides },
    RouteEntry { pattern: "/schedules/:scheduleID/shifts", exact: false, view: ScheduleView::Shifts },
];

/// Parameters captured by a pattern, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(&'static str, String)>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Path segments with the query string and fragment removed. Empty segments
/// are skipped, so trailing and doubled slashes do not matter.
pub fn path_segments(path: &str) -> Vec<&str> {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

/// Matches one pattern against a path. Static segments compare ASCII
/// case-insensitively; parameters are captured as written.
pub fn match_pattern(pattern: &'static str, exact: bool, path: &str) -> Option<RouteParams> {
    let wanted = path_segments(pattern);
    let actual = path_segments(path);

    if actual.len() < wanted.len() || (exact && actual.len() != wanted.len()) {
        return None;
    }

    let mut params = Vec::new();
    for (want, got) in wanted.into_iter().zip(actual) {
        match want.strip_prefix(':') {
            Some(name) => params.push((name, got.to_string())),
            None if want.eq_ignore_ascii_case(got) => {}
            None => return None,
        }
    }
    Some(RouteParams(params))
}

/// The schedule page a URL path resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleRoute {
    List,
    Details { schedule_id: String },
    Rules { schedule_id: String },
    OnCallNotifications { schedule_id: String },
    AssignedTo { schedule_id: String },
    Overrides { schedule_id: String },
    Shifts { schedule_id: String },
    NotFound,
}

impl ScheduleRoute {
    pub fn resolve(path: &str) -> Self {
        SCHEDULE_ROUTES
            .iter()
            .find_map(|entry| {
                match_pattern(entry.pattern, entry.exact, path)
                    .map(|params| Self::from_match(entry.view, &params))
            })
            .unwrap_or(ScheduleRoute::NotFound)
    }

    fn from_match(view: ScheduleView, params: &RouteParams) -> Self {
        let schedule_id = params.get(SCHEDULE_ID).unwrap_or_default().to_string();
        match view {
            ScheduleView::List => ScheduleRoute::List,
            ScheduleView::Details => ScheduleRoute::Details { schedule_id },
            ScheduleView::Rules => ScheduleRoute::Rules { schedule_id },
            ScheduleView::OnCallNotifications => ScheduleRoute::OnCallNotifications { schedule_id },
            ScheduleView::AssignedTo => ScheduleRoute::AssignedTo { schedule_id },
            ScheduleView::Overrides => ScheduleRoute::Overrides { schedule_id },
            ScheduleView::Shifts => ScheduleRoute::Shifts { schedule_id },
        }
    }

    pub fn schedule_id(&self) -> Option<&str> {
        match self {
            ScheduleRoute::Details { schedule_id }
            | ScheduleRoute::Rules { schedule_id }
            | ScheduleRoute::OnCallNotifications { schedule_id }
            | ScheduleRoute::AssignedTo { schedule_id }
            | ScheduleRoute::Overrides { schedule_id }
            | ScheduleRoute::Shifts { schedule_id } => Some(schedule_id),
            ScheduleRoute::List | ScheduleRoute::NotFound => None,
        }
    }

    /// Canonical path of the route; `None` for the not-found page.
    pub fn path(&self) -> Option<String> {
        let suffix = match self {
            ScheduleRoute::List => return Some("/schedules".to_string()),
            ScheduleRoute::NotFound => return None,
            ScheduleRoute::Details { .. } => "",
            ScheduleRoute::Rules { .. } => "/assignments",
            ScheduleRoute::OnCallNotifications { .. } => "/on-call-notifications",
            ScheduleRoute::AssignedTo { .. } => "/escalation-policies",
            ScheduleRoute::Overrides { .. } => "/overrides",
            ScheduleRoute::Shifts { .. } => "/shifts",
        };
        self.schedule_id()
            .map(|id| format!("/schedules/{}{}", id, suffix))
    }
}
