// src/gantt/chart.rs

//! Chart-library encoding of a timeline: `{ "datasets": [...] }`.
//!
//! This is a field remap; the only derived value is the border color.

use chrono::NaiveDate;
use serde::Serialize;

use crate::gantt::palette;
use crate::gantt::timeline::{ItemType, TimelineItem};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartModel {
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: String,
    pub label: String,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub data: Vec<DataPoint>,
    pub progress: u8,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subsystem: String,
}

/// A floating bar: `x` is `[start, end]`, `y` the row label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub x: [NaiveDate; 2],
    pub y: String,
}

pub fn to_chart_encoding(items: &[TimelineItem]) -> ChartModel {
    ChartModel {
        datasets: items.iter().map(to_dataset).collect(),
    }
}

fn to_dataset(item: &TimelineItem) -> Dataset {
    Dataset {
        id: item.id.clone(),
        label: item.title.clone(),
        background_color: item.color.clone(),
        border_color: palette::border_color(&item.color),
        border_width: 1,
        data: vec![DataPoint {
            x: [item.start_date, item.end_date],
            y: item.title.clone(),
        }],
        progress: item.progress,
        item_type: item.item_type,
        dependencies: item.dependencies.clone(),
        subsystem: item.subsystem.clone(),
    }
}
