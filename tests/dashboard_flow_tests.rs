mod common;

use ecodash_rs::api::{Dashboard, DashboardConfig, DashboardPhase, MapEvent, MapStatus};
use ecodash_rs::render::NullHost;
use serde_json::json;

fn started_dashboard() -> (Dashboard<NullHost>, NullHost) {
    let host = NullHost::new();
    let probe = host.clone();
    let mut dashboard = Dashboard::new(host, DashboardConfig::default());
    dashboard.start(&common::full_source()).expect("start");
    (dashboard, probe)
}

#[test]
fn start_reaches_ready_and_renders_every_widget() {
    let (dashboard, probe) = started_dashboard();

    assert_eq!(dashboard.phase(), DashboardPhase::Ready);
    assert_eq!(dashboard.map_status(), MapStatus::Ready);
    assert!(dashboard.store().is_ready());
    assert!(dashboard.store().is_complete());

    for container in ["trendChart", "gasChart", "natureChart", "humanChart", "pieChart", "barChart", "mainMap", "mapOverview"] {
        assert!(
            !probe.options_for(container).is_empty(),
            "no option applied to {container}"
        );
    }
    assert_eq!(probe.registered_maps(), ["merged"]);
}

#[test]
fn missing_geography_degrades_to_map_error_only() {
    let mut source = common::full_source();
    source.remove("json/china.geojson");
    source.remove("json/jilin_county5.geojson");

    let host = NullHost::new();
    let probe = host.clone();
    let mut dashboard = Dashboard::new(host, DashboardConfig::default());
    dashboard.start(&source).expect("start");

    // Bounded retry: the first failure schedules attempt 1.
    assert_eq!(dashboard.phase(), DashboardPhase::Ready);
    let MapStatus::Retrying { attempt, delay } = dashboard.map_status() else {
        panic!("expected a scheduled retry");
    };
    assert_eq!(attempt, 1);
    assert_eq!(delay.as_secs(), 2);

    // Delays grow linearly until the attempts are exhausted.
    dashboard.retry_map(&source);
    let MapStatus::Retrying { attempt, delay } = dashboard.map_status() else {
        panic!("expected a second retry");
    };
    assert_eq!(attempt, 2);
    assert_eq!(delay.as_secs(), 4);

    dashboard.retry_map(&source);
    dashboard.retry_map(&source);
    assert_eq!(dashboard.map_status(), MapStatus::Failed);
    assert_eq!(dashboard.phase(), DashboardPhase::Error);
    assert!(dashboard.map_error_text().is_some());

    // Non-map charts rendered and stay usable.
    assert!(!probe.options_for("trendChart").is_empty());
    assert!(!probe.options_for("barChart").is_empty());
    assert!(probe.registered_maps().is_empty());
    dashboard
        .select_indicator("自然敏感性")
        .expect("non-map interaction in error phase");
    assert_eq!(dashboard.statistics_title(), "2023年自然敏感性统计情况");
}

#[test]
fn geography_recovers_within_the_retry_budget() {
    let mut broken = common::full_source();
    broken.remove("json/china.geojson");

    let host = NullHost::new();
    let mut dashboard = Dashboard::new(host, DashboardConfig::default());
    dashboard.start(&broken).expect("start");
    assert!(matches!(dashboard.map_status(), MapStatus::Retrying { .. }));

    // The bundle is reachable again before the retries run out.
    dashboard.retry_map(&common::full_source());
    assert_eq!(dashboard.map_status(), MapStatus::Ready);
    assert_eq!(dashboard.phase(), DashboardPhase::Ready);
    assert!(dashboard.map_error_text().is_none());
}

#[test]
fn clicking_a_governed_region_updates_every_consumer() {
    let (mut dashboard, probe) = started_dashboard();

    dashboard.handle_map_event(MapEvent::Click {
        name: "长春市".to_owned(),
    });

    assert_eq!(dashboard.selection().region.as_deref(), Some("长春市"));

    let detail = dashboard.detail().expect("detail panel content");
    assert_eq!(detail.name, "长春市");

    // Overall levels for 长春市 are 2/3/4.
    let trend = probe.last_option_for("trendChart").expect("trend option");
    assert_eq!(trend["series"][0]["data"], json!([2, 3, 4]));

    let actions = probe.actions_for("mainMap");
    assert!(actions.contains(&json!({"type": "select", "name": "长春市"})));
    assert!(actions.contains(&json!({"type": "highlight", "name": "长春市"})));
}

#[test]
fn clicking_a_context_region_is_ignored() {
    let (mut dashboard, _probe) = started_dashboard();

    dashboard.handle_map_event(MapEvent::Click {
        name: "河北省".to_owned(),
    });
    assert_eq!(dashboard.selection().region, None);
    assert!(dashboard.detail().is_none());

    // Same for a name unknown to both geographies.
    dashboard.handle_map_event(MapEvent::Click {
        name: "不存在的区域".to_owned(),
    });
    assert_eq!(dashboard.selection().region, None);
}

#[test]
fn missing_dimension_entry_renders_zero_points_without_crashing() {
    let mut source = common::full_source();
    // Gas data without 四平市.
    source.insert(
        "gas_sensitivity_levels.json",
        common::dataset_document(
            "gas_sensitivity_data",
            &[("长春市", [1, 2, 2]), ("吉林市", [2, 2, 4])],
        ),
    );

    let host = NullHost::new();
    let probe = host.clone();
    let mut dashboard = Dashboard::new(host, DashboardConfig::default());
    dashboard.start(&source).expect("start");

    dashboard.select_indicator("气候敏感性").expect("select gas");
    dashboard.select_year("2020").expect("select year");
    dashboard.handle_map_event(MapEvent::Click {
        name: "四平市".to_owned(),
    });

    let gas = probe.last_option_for("gasChart").expect("gas option");
    assert_eq!(gas["series"][0]["data"], json!([0, 0, 0]));

    // The detail panel still renders the region description.
    let detail = dashboard.detail().expect("detail");
    assert_eq!(detail.name, "四平市");
    assert!(detail.description.contains("农业主导"));
}

#[test]
fn interactions_are_ignored_while_loading() {
    let host = NullHost::new();
    let mut dashboard = Dashboard::new(host, DashboardConfig::default());

    let snapshot = dashboard
        .select_indicator("自然敏感性")
        .expect("ignored, not an error");
    assert_eq!(snapshot, *dashboard.selection());
    assert_eq!(dashboard.selection().indicator, ecodash_rs::core::IndicatorKind::Overall);

    dashboard.handle_map_event(MapEvent::Click {
        name: "长春市".to_owned(),
    });
    assert_eq!(dashboard.selection().region, None);
}

#[test]
fn restart_disposes_previous_instances() {
    let (mut dashboard, probe) = started_dashboard();
    dashboard.start(&common::full_source()).expect("restart");

    for container in ["trendChart", "gasChart", "barChart", "mainMap", "mapOverview"] {
        assert_eq!(
            probe.live_surface_count(container),
            1,
            "leaked instance on {container}"
        );
    }
}

#[test]
fn roam_updates_label_visibility_and_the_overview_rect() {
    let (mut dashboard, probe) = started_dashboard();

    dashboard.handle_map_event(MapEvent::Roam {
        zoom: 2.0,
        center: (126.5, 43.8),
    });

    let main = probe.last_option_for("mainMap").expect("main option");
    assert_eq!(main["series"][0]["label"]["show"], json!(false));

    let overview = probe.last_option_for("mapOverview").expect("overview option");
    let shape = &overview["graphic"][0]["shape"];
    assert_eq!(shape["width"], json!(75.0));
    assert_eq!(shape["height"], json!(50.0));

    dashboard.handle_map_event(MapEvent::Roam {
        zoom: 6.0,
        center: (126.5, 43.8),
    });
    let main = probe.last_option_for("mainMap").expect("main option");
    assert_eq!(main["series"][0]["label"]["show"], json!(true));
}

#[test]
fn render_failures_exhaust_into_the_error_phase() {
    let (mut dashboard, _probe) = started_dashboard();

    for _ in 0..4 {
        dashboard.handle_map_event(MapEvent::RenderFailure {
            reason: "tile decode failed".to_owned(),
        });
        // A scheduled retry needs the host to call retry_map; simulate the
        // geography staying broken by reporting another failure instead.
    }
    assert_eq!(dashboard.map_status(), MapStatus::Failed);
    assert_eq!(dashboard.phase(), DashboardPhase::Error);
}

#[test]
fn resize_fans_out_to_every_surface() {
    let (mut dashboard, probe) = started_dashboard();

    dashboard.resize_all();

    let resized: Vec<String> = probe
        .events()
        .into_iter()
        .filter_map(|event| match event {
            ecodash_rs::render::SurfaceEvent::Resized { container } => Some(container),
            _ => None,
        })
        .collect();
    for container in ["trendChart", "gasChart", "natureChart", "humanChart", "pieChart", "barChart", "mainMap", "mapOverview"] {
        assert!(resized.iter().any(|c| c == container), "{container} not resized");
    }
}

#[test]
fn year_selection_rerenders_the_bar_chart() {
    let (mut dashboard, probe) = started_dashboard();

    dashboard.select_year("2017").expect("select 2017");
    let bar = probe.last_option_for("barChart").expect("bar option");
    assert_eq!(bar["title"]["text"], json!("生态敏感性 - 2017年"));
    // Overall 2017: 吉林市 1, 四平市 3, 长春市 2.
    assert_eq!(bar["series"][0]["data"], json!([1, 3, 2]));

    let invalid = dashboard.select_year("2019");
    assert!(invalid.is_err());
    assert_eq!(dashboard.selection().year.as_str(), "2017");
}
