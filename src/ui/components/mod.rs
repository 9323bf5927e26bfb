//! Reusable UI Components
//!
//! - `InputField` - Text input with focus handling, password masking, and errors
//! - `StatusIndicator` - Spinner, success, and error indicators
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;

pub use dialog_frame::{dialog_area, render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use status_indicator::{get_spinner_char, render_status_indicator, StatusIndicatorType};
