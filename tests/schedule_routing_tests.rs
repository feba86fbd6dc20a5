use oncall_schedules::domain::{map_schedule_node, PendingDeletion, ScheduleNode};
use oncall_schedules::ui_dioxus::route_table::{match_pattern, path_segments, SCHEDULE_ROUTES};
use oncall_schedules::ui_dioxus::ScheduleRoute;

#[test]
fn test_every_defined_path_shape_routes_with_its_id() {
    let cases = [
        ("/schedules/primary", ScheduleRoute::Details { schedule_id: "primary".into() }),
        ("/schedules/primary/assignments", ScheduleRoute::Rules { schedule_id: "primary".into() }),
        (
            "/schedules/primary/on-call-notifications",
            ScheduleRoute::OnCallNotifications { schedule_id: "primary".into() },
        ),
        (
            "/schedules/primary/escalation-policies",
            ScheduleRoute::AssignedTo { schedule_id: "primary".into() },
        ),
        ("/schedules/primary/overrides", ScheduleRoute::Overrides { schedule_id: "primary".into() }),
        ("/schedules/primary/shifts", ScheduleRoute::Shifts { schedule_id: "primary".into() }),
    ];

    assert_eq!(ScheduleRoute::resolve("/schedules"), ScheduleRoute::List);
    for (path, expected) in cases {
        let route = ScheduleRoute::resolve(path);
        assert_eq!(route, expected, "wrong route for {}", path);
        assert_eq!(route.schedule_id(), Some("primary"));
    }
}

#[test]
fn test_unknown_paths_fall_back_to_not_found() {
    for path in ["/users", "/schedules/a/b/c", "/schedulesx", "/schedules/a/rules"] {
        assert_eq!(ScheduleRoute::resolve(path), ScheduleRoute::NotFound, "{}", path);
    }
}

#[test]
fn test_route_table_order_puts_exact_routes_first() {
    assert_eq!(SCHEDULE_ROUTES.len(), 7);
    assert!(SCHEDULE_ROUTES[0].exact);
    assert!(SCHEDULE_ROUTES[1].exact);
    assert!(SCHEDULE_ROUTES[2..].iter().all(|entry| !entry.exact));
}

#[test]
fn test_empty_parameter_never_matches() {
    assert!(match_pattern("/schedules/:scheduleID", true, "/schedules/").is_none());
    assert_eq!(path_segments("/a//b/?q=1"), vec!["a", "b"]);
}

#[test]
fn test_delete_request_lifecycle() {
    let mut pending = PendingDeletion::default();
    assert!(!pending.is_pending());

    pending.request("X");
    assert_eq!(pending.target(), Some("X"));

    pending.clear();
    assert!(!pending.is_pending());
}

#[test]
fn test_schedule_row_mapping() {
    let node = ScheduleNode {
        id: "S1".to_string(),
        name: "Primary".to_string(),
        description: Some(String::new()),
        is_favorite: true,
    };
    let item = map_schedule_node(&node);
    assert_eq!(item.title, "Primary");
    assert_eq!(item.sub_text, "");
    assert_eq!(item.url, "S1");
    assert!(item.is_favorite);

    let without_description = ScheduleNode {
        description: None,
        ..node
    };
    assert_eq!(map_schedule_node(&without_description).sub_text, "");
}
