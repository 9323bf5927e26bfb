//! Panic hook that hands the terminal back before the message prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain terminal restoration in front of the current panic hook.
///
/// Install after `color_eyre::install()` so its report is what prints.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(%panic_info, "panic");
        original_hook(panic_info);
    }));
}
