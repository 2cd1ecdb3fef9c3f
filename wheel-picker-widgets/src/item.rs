use alloc::string::String;

use wheel_picker::DpSize;

/// View-model for one rendered picker entry.
///
/// Taps are routed back through the owning picker's `tap(index)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerItemData {
    pub index: usize,
    pub label: String,
    /// Whether this is the host's current selection.
    pub selected: bool,
    /// Size of the item cell.
    pub size: DpSize,
    pub text_offset_dp: f32,
}
