//! Grid appearance options.

use serde::{Deserialize, Serialize};

/// Appearance options for an [`AttributeGrid`](crate::AttributeGrid).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridStyle {
    /// Whether to alternate row background colors.
    pub striped: bool,

    /// Horizontal and vertical spacing between cells, in points.
    pub spacing: [f32; 2],

    /// Minimum column width, in points.
    pub min_col_width: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            striped: true,
            spacing: [8.0, 4.0],
            min_col_width: 90.0,
        }
    }
}
