mod common;

use approx::assert_relative_eq;
use ecodash_rs::api::PieBinding;
use ecodash_rs::core::WeightDocument;
use ecodash_rs::data::DataStore;
use ecodash_rs::render::NullHost;
use serde_json::json;

fn parsed_weights() -> WeightDocument {
    WeightDocument::from_document(&common::weights_document()).expect("weights")
}

#[test]
fn inner_ring_carries_the_subcategory_weights() {
    let weights = parsed_weights();
    let inner = weights.inner_ring();
    assert_eq!(inner.len(), 4);

    let total: f64 = inner.iter().map(|slice| slice.value).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-9);
}

#[test]
fn outer_ring_values_are_weight_products() {
    let weights = parsed_weights();
    let outer = weights.outer_ring();
    assert_eq!(outer.len(), 11);

    let elevation = outer
        .iter()
        .find(|slice| slice.name == "高程")
        .expect("高程 slice");
    assert_eq!(elevation.parent.as_deref(), Some("地质敏感性"));
    assert_relative_eq!(elevation.value, 0.2 * 0.4, epsilon = 1e-9);

    // Each ring carries the same total weight mass.
    let total: f64 = outer.iter().map(|slice| slice.value).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-9);
}

#[test]
fn pie_option_projects_both_rings() {
    let mut store = DataStore::new();
    store.load(&common::full_source());

    let mut host = NullHost::new();
    let probe = host.clone();
    let mut pie = PieBinding::new();
    pie.init(&mut host, "pieChart").expect("init");
    pie.update(&store).expect("update");

    let option = probe.last_option_for("pieChart").expect("pie option");
    let inner = option["series"][0]["data"].as_array().expect("inner data");
    let outer = option["series"][1]["data"].as_array().expect("outer data");
    assert_eq!(inner.len(), 4);
    assert_eq!(outer.len(), 11);

    let geological = inner
        .iter()
        .find(|entry| entry["name"] == json!("地质敏感性"))
        .expect("地质敏感性 entry");
    assert_eq!(geological["itemStyle"]["color"], json!("#91cc75"));

    let roads = outer
        .iter()
        .find(|entry| entry["name"] == json!("道路"))
        .expect("道路 entry");
    assert_eq!(roads["parentName"], json!("人类干扰敏感性"));
    assert_eq!(roads["itemStyle"]["color"], json!("#8fd1e8"));
}

#[test]
fn missing_weights_leave_the_chart_untouched() {
    let mut source = common::full_source();
    source.remove("sensitivity_weights.json");
    let mut store = DataStore::new();
    store.load(&source);

    let mut host = NullHost::new();
    let probe = host.clone();
    let mut pie = PieBinding::new();
    pie.init(&mut host, "pieChart").expect("init");
    pie.update(&store).expect("update");

    assert!(probe.last_option_for("pieChart").is_none());
}
