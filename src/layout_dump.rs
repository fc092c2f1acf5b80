use crate::config::GRID_WIDTH;
use crate::layout::{Layout, Placement};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub algorithm: String,
    pub grid_width: u32,
    pub height: u32,
    pub panels: Vec<Placement>,
}

/// One entry of the target platform's panel list, reduced to its grid fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDataEntry {
    pub panel_index: String,
    pub grid_data: GridData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridData {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub i: String,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        LayoutDump {
            algorithm: layout.algorithm.to_string(),
            grid_width: GRID_WIDTH,
            height: layout.height,
            panels: layout.iter().cloned().collect(),
        }
    }
}

pub fn grid_data(layout: &Layout) -> Vec<GridDataEntry> {
    layout
        .iter()
        .map(|placement| GridDataEntry {
            panel_index: placement.id.clone(),
            grid_data: GridData {
                x: placement.x,
                y: placement.y,
                w: placement.width,
                h: placement.height,
                i: placement.id.clone(),
            },
        })
        .collect()
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &LayoutDump::from_layout(layout))?;
    Ok(())
}

pub fn write_grid_data(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &grid_data(layout))?;
    Ok(())
}
