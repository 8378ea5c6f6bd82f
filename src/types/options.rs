//! Scroller configuration: caller overrides and the merged record.

use serde::{Deserialize, Serialize};

/// Prefix for auto-generated mount point ids (`tablescroller-1`, `tablescroller-2`, ...).
pub const MOUNT_ID_PREFIX: &str = "tablescroller-";

/// Caller-supplied overrides. Every field is optional; missing fields fall
/// back to the defaults computed from the source table.
///
/// Deserializes from a JS options object or JSON with camelCase keys. The
/// mount point also accepts the legacy `container` key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollerOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub pinned_rows: Option<usize>,
    pub pinned_cols: Option<usize>,
    #[serde(alias = "container")]
    pub mount_point_id: Option<String>,
    pub remove_original: Option<bool>,
}

impl ScrollerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_pinned(mut self, rows: usize, cols: usize) -> Self {
        self.pinned_rows = Some(rows);
        self.pinned_cols = Some(cols);
        self
    }

    pub fn with_mount_point(mut self, id: impl Into<String>) -> Self {
        self.mount_point_id = Some(id.into());
        self
    }

    pub fn with_remove_original(mut self, remove: bool) -> Self {
        self.remove_original = Some(remove);
        self
    }
}

/// The effective configuration: defaults merged with [`ScrollerOptions`].
///
/// Built once per scroller and never changed afterwards. `mount_point_id`
/// holds the id of the container actually used once the mount is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollerConfig {
    pub width: f64,
    pub height: f64,
    pub pinned_rows: usize,
    pub pinned_cols: usize,
    pub mount_point_id: Option<String>,
    pub remove_original: bool,
}

impl ScrollerConfig {
    pub const DEFAULT_PINNED_ROWS: usize = 1;
    pub const DEFAULT_PINNED_COLS: usize = 0;

    /// Merge `options` over the defaults. `natural_width`/`natural_height`
    /// are the source table's rendered size.
    pub fn resolve(options: &ScrollerOptions, natural_width: f64, natural_height: f64) -> Self {
        Self {
            width: options.width.unwrap_or(natural_width),
            height: options.height.unwrap_or(natural_height),
            pinned_rows: options.pinned_rows.unwrap_or(Self::DEFAULT_PINNED_ROWS),
            pinned_cols: options.pinned_cols.unwrap_or(Self::DEFAULT_PINNED_COLS),
            mount_point_id: options
                .mount_point_id
                .as_deref()
                .map(normalize_mount_id)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            remove_original: options.remove_original.unwrap_or(false),
        }
    }

    /// Record the id of the container the panes were mounted in.
    pub(crate) fn with_resolved_mount(mut self, id: String) -> Self {
        self.mount_point_id = Some(id);
        self
    }
}

/// Accept both `"grid"` and the selector form `"#grid"`.
fn normalize_mount_id(id: &str) -> &str {
    let id = id.trim();
    id.strip_prefix('#').unwrap_or(id)
}
