use std::rc::Rc;

use seuil_reactive::{provide_context, use_context};
use tracing::debug;

use crate::{config::SeuilConfig, observer::Seuil, timer::TimerQueue, window::Viewport};

/// Set up the application's breakpoint observer.
///
/// The first call creates the [`Seuil`] and stores it in the application
/// context. Every later call returns that same instance and ignores its
/// arguments.
pub fn install(config: &SeuilConfig, viewport: Rc<dyn Viewport>, timers: TimerQueue) -> Seuil {
    if let Some(seuil) = use_context::<Seuil>() {
        debug!("breakpoint observer already installed, ignoring the new configuration");
        return seuil;
    }

    let seuil = Seuil::new(config, viewport, timers);
    debug!(
        name = %seuil.name(),
        width = seuil.width(),
        delay = ?seuil.debounce_delay(),
        "breakpoint observer installed"
    );
    provide_context(seuil.clone());
    seuil
}

/// The observer set up by [`install`], if any.
pub fn use_seuil() -> Option<Seuil> {
    use_context()
}
