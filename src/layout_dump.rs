use crate::layout::FlowLayout;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// JSON view of a layout handed to the renderer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub min_x: f32,
    pub min_y: f32,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDump {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub has_parent: bool,
    pub has_children: bool,
    pub target_handle: bool,
    pub source_handle: bool,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl LayoutDump {
    pub fn from_layout(layout: &FlowLayout) -> Self {
        let nodes = layout
            .nodes
            .iter()
            .map(|node| NodeDump {
                id: node.id.clone(),
                name: node.name.clone(),
                status: node.status.as_str().to_string(),
                duration: node.duration.clone(),
                x: node.position.x,
                y: node.position.y,
                width: node.width,
                height: node.height,
                has_parent: node.has_parent,
                has_children: node.has_children,
                target_handle: node.handles.target,
                source_handle: node.handles.source,
            })
            .collect();

        let edges = layout
            .edges
            .iter()
            .map(|edge| EdgeDump {
                id: edge.id(),
                source: edge.source.clone(),
                target: edge.target.clone(),
            })
            .collect();

        LayoutDump {
            width: layout.bounds.width,
            height: layout.bounds.height,
            min_x: layout.bounds.min_x,
            min_y: layout.bounds.min_y,
            nodes,
            edges,
        }
    }
}

pub fn layout_to_json(layout: &FlowLayout) -> anyhow::Result<String> {
    let dump = LayoutDump::from_layout(layout);
    Ok(serde_json::to_string_pretty(&dump)?)
}

/// Writes the dump to `path`, or to stdout when no path is given.
pub fn write_layout_dump(path: Option<&Path>, layout: &FlowLayout) -> anyhow::Result<()> {
    let dump = LayoutDump::from_layout(layout);
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &dump)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, &dump)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
