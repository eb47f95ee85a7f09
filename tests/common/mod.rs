#![allow(dead_code)]

use ecodash_rs::core::IndicatorKind;
use ecodash_rs::data::MemorySource;
use serde_json::{Map, Value, json};

/// Fixture regions in alphabetical (code point) order.
pub const REGIONS: [&str; 3] = ["吉林市", "四平市", "长春市"];

pub fn dataset_document(data_key: &str, levels: &[(&str, [u8; 3])]) -> Value {
    let mut data = Map::new();
    for (region, [y2017, y2020, y2023]) in levels {
        data.insert(
            (*region).to_owned(),
            json!({"2017": y2017, "2020": y2020, "2023": y2023}),
        );
    }

    let mut document = Map::new();
    document.insert(data_key.to_owned(), Value::Object(data));
    document.insert(
        "sensitivity_levels".to_owned(),
        json!({
            "1": "不敏感",
            "2": "轻度敏感",
            "3": "中度敏感",
            "4": "高度敏感",
            "5": "极度敏感"
        }),
    );
    Value::Object(document)
}

pub fn default_levels(kind: IndicatorKind) -> Vec<(&'static str, [u8; 3])> {
    match kind {
        IndicatorKind::Overall => vec![
            ("长春市", [2, 3, 4]),
            ("吉林市", [1, 2, 3]),
            ("四平市", [3, 3, 2]),
        ],
        IndicatorKind::Gas => vec![
            ("长春市", [1, 2, 2]),
            ("吉林市", [2, 2, 4]),
            ("四平市", [1, 1, 1]),
        ],
        IndicatorKind::Nature => vec![
            ("长春市", [3, 4, 5]),
            ("吉林市", [2, 3, 3]),
            ("四平市", [2, 2, 3]),
        ],
        IndicatorKind::Human => vec![
            ("长春市", [4, 4, 5]),
            ("吉林市", [3, 3, 2]),
            ("四平市", [2, 3, 3]),
        ],
        IndicatorKind::Geological => vec![
            ("长春市", [1, 1, 2]),
            ("吉林市", [2, 1, 1]),
            ("四平市", [3, 2, 1]),
        ],
    }
}

pub fn region_descriptions() -> Value {
    json!({"region_descriptions": [
        {"name": "长春市", "description": "省会城市，土地利用强度高，整体为中度敏感区域。"},
        {"name": "吉林市", "description": "松花江沿线多为轻度敏感，湿地保护区属极度敏感。"},
        {"name": "四平市", "description": "农业主导区，水土流失带为高度敏感。"}
    ]})
}

pub fn weights_document() -> Value {
    json!({
        "综合生态敏感性": {
            "权重值": 1.0,
            "子指标": {
                "地质敏感性": {
                    "权重值": 0.2,
                    "指标层": {
                        "高程": {"权重值": 0.4},
                        "坡度": {"权重值": 0.35},
                        "坡向": {"权重值": 0.25}
                    }
                },
                "气候敏感性": {
                    "权重值": 0.25,
                    "指标层": {
                        "平均气温": {"权重值": 0.4},
                        "年均降水": {"权重值": 0.35},
                        "相对湿度": {"权重值": 0.25}
                    }
                },
                "自然敏感性": {
                    "权重值": 0.3,
                    "指标层": {
                        "NDVI": {"权重值": 0.4},
                        "土地利用": {"权重值": 0.35},
                        "水域": {"权重值": 0.25}
                    }
                },
                "人类干扰敏感性": {
                    "权重值": 0.25,
                    "指标层": {
                        "道路": {"权重值": 0.5},
                        "人口密度": {"权重值": 0.5}
                    }
                }
            }
        }
    })
}

pub fn named_feature(key: &str, name: &str) -> Value {
    let mut properties = Map::new();
    properties.insert(key.to_owned(), Value::String(name.to_owned()));
    json!({"type": "Feature", "properties": properties, "geometry": null})
}

pub fn base_geography() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            named_feature("name", "北京市"),
            named_feature("name", "朝阳区"),
            named_feature("name", "吉林省"),
            named_feature("name", "河北省")
        ]
    })
}

pub fn overlay_geography() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            named_feature("NAME", "长春市"),
            named_feature("NAME", "吉林市"),
            named_feature("NAME", "四平市")
        ]
    })
}

/// A complete in-memory bundle matching the deployed document set.
pub fn full_source() -> MemorySource {
    let mut source = MemorySource::new();
    for kind in IndicatorKind::ALL {
        source.insert(
            kind.dataset_file(),
            dataset_document(kind.data_key(), &default_levels(kind)),
        );
    }
    source.insert("region_descriptions.json", region_descriptions());
    source.insert("sensitivity_weights.json", weights_document());
    source.insert("json/china.geojson", base_geography());
    source.insert("json/jilin_county5.geojson", overlay_geography());
    source
}
