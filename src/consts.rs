//! Shared numeric and naming constants for the select-area crate.

// ── Configuration defaults ──────────────────────────────────────

/// Minimum selection width in CSS pixels when none is configured.
pub const DEFAULT_MIN_WIDTH: f64 = 100.0;

/// Minimum selection height in CSS pixels when none is configured.
pub const DEFAULT_MIN_HEIGHT: f64 = 70.0;

/// Initial selection width as a fraction of the container width.
pub const DEFAULT_WIDTH_RATIO: f64 = 0.5;

/// Initial selection height as a fraction of the container height.
pub const DEFAULT_HEIGHT_RATIO: f64 = 0.25;

// ── Hit-testing ─────────────────────────────────────────────────

/// Hit slop in pixels around a resize handle's contact point.
///
/// Matches the 7px outset of the generated handle elements.
pub const HANDLE_RADIUS_PX: f64 = 7.0;

// ── DOM ─────────────────────────────────────────────────────────

/// Attribute placed on a host once a widget is attached; its value is the instance id.
pub const INSTANCE_MARKER_ATTR: &str = "selectImageAreaInstance";

/// Prefix shared by every generated element id and class.
pub const ID_PREFIX: &str = "select-image-area__";

/// Class applied to every resize handle element.
pub const HANDLE_CLASS: &str = "select-image-area__resize-handle";

/// Edge length of a resize handle element in pixels.
pub const HANDLE_SIZE_PX: f64 = 14.0;

/// Name of the event dispatched while the selection is being moved.
pub const MOVING_EVENT: &str = "moving";

/// Name of the event dispatched while the selection is being resized.
pub const RESIZING_EVENT: &str = "resizing";
