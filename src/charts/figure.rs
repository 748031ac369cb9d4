//! Figure Specification Module
//! Serializable, Plotly-compatible chart specifications returned by the
//! dashboard endpoints and rendered client-side.

use serde::Serialize;

/// Slice/trace color for successful launches
pub const SUCCESS_COLOR: &str = "#2ECC71";
/// Slice/trace color for failed launches
pub const FAILURE_COLOR: &str = "#E74C3C";

/// Qualitative palette for sites and booster versions
pub const PALETTE: [&str; 10] = [
    "#8DD3C7", // Teal
    "#FFB347", // Orange
    "#BEBADA", // Lavender
    "#FB8072", // Salmon
    "#80B1D3", // Blue
    "#FDB462", // Apricot
    "#B3DE69", // Lime
    "#FCCDE5", // Pink
    "#BC80BD", // Purple
    "#CCEBC5", // Mint
];

/// Palette color for the i-th category, cycling past the end.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// A complete chart specification: traces plus layout.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    /// True when the figure carries no plottable data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// One plotted trace. The serialized `type` field selects the Plotly renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
        marker: PieMarker,
    },
    Scatter {
        x: Vec<f64>,
        y: Vec<f64>,
        mode: &'static str,
        name: String,
        marker: ScatterMarker,
    },
}

/// Per-slice colors for a pie trace.
#[derive(Debug, Clone, Serialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

/// Marker styling for a scatter trace: one color per trace, one symbol per point.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterMarker {
    pub color: String,
    pub symbol: Vec<&'static str>,
    pub size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl Layout {
    /// Layout with the dashboard's standard margins and no axis titles.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Title {
                text: title.into(),
            },
            margin: Margin::default(),
            xaxis: None,
            yaxis: None,
        }
    }

    pub fn with_axes(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.xaxis = Some(Axis {
            title: Title {
                text: x_title.into(),
            },
        });
        self.yaxis = Some(Axis {
            title: Title {
                text: y_title.into(),
            },
        });
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            l: 20,
            r: 20,
            t: 40,
            b: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}
